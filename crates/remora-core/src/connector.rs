//! Rectangle-boundary ray intersection and the derived connector value.

use crate::geom::{Bounds, Node, Point};
use serde::{Deserialize, Serialize};

/// Point where the ray from `point` toward the center of `bounds` crosses the
/// rectangle boundary.
///
/// With `validate_outside` set, a point strictly inside the open rectangle has
/// no defined boundary crossing and yields `None`. A point exactly on the
/// center maps to the center itself.
///
/// Candidate edges are checked in a fixed left/right/top/bottom order and the
/// first in-range candidate wins, so a point exactly on a diagonal resolves to
/// the earlier-listed edge. The slope arithmetic leans on IEEE-754 division:
/// vertical alignment makes `m` infinite, which pushes the left/right
/// candidates out of range and lets the top/bottom branches take over.
pub fn boundary_intersection(
    point: Point,
    bounds: &Bounds,
    validate_outside: bool,
) -> Option<Point> {
    let Point { x, y } = point;
    if validate_outside && bounds.contains_strict(point) {
        return None;
    }

    let mid = bounds.center();
    // mid.x == x -> m == ±inf -> the top/bottom candidates collapse onto x
    // (value / ±inf = ±0); mid == point -> m is NaN, resolved below.
    let m = (mid.y - y) / (mid.x - x);

    if x <= mid.x {
        // left edge
        let min_xy = m * (bounds.min_x - x) + y;
        if bounds.min_y <= min_xy && min_xy <= bounds.max_y {
            return Some(Point {
                x: bounds.min_x,
                y: min_xy,
            });
        }
    }

    if x >= mid.x {
        // right edge
        let max_xy = m * (bounds.max_x - x) + y;
        if bounds.min_y <= max_xy && max_xy <= bounds.max_y {
            return Some(Point {
                x: bounds.max_x,
                y: max_xy,
            });
        }
    }

    if y <= mid.y {
        // top edge
        let min_yx = (bounds.min_y - y) / m + x;
        if bounds.min_x <= min_yx && min_yx <= bounds.max_x {
            return Some(Point {
                x: min_yx,
                y: bounds.min_y,
            });
        }
    }

    if y >= mid.y {
        // bottom edge
        let max_yx = (bounds.max_y - y) / m + x;
        if bounds.min_x <= max_yx && max_yx <= bounds.max_x {
            return Some(Point {
                x: max_yx,
                y: bounds.max_y,
            });
        }
    }

    // m was 0/0 = NaN: every candidate above failed its range check.
    if x == mid.x && y == mid.y {
        return Some(point);
    }

    None
}

/// Derived connector quantities for a node pair. Ephemeral: recomputed from
/// scratch on every layout pass, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectorGeometry {
    pub midpoint: Point,
    /// Euclidean center-to-center distance.
    pub distance: f64,
    /// Direction from source center to target center, `atan2` radians.
    pub angle: f64,
    /// Where the connector crosses the source box boundary.
    pub source_anchor: Point,
    pub source_anchor_distance: f64,
    /// Where the connector crosses the target box boundary.
    pub target_anchor: Point,
    pub target_anchor_distance: f64,
}

/// Composes the full derived value for a node pair.
///
/// `None` when either anchor has no defined boundary crossing, i.e. one
/// node's center lies inside the other's bounds or a box has zero-ish extent.
/// Callers that can degrade per side should call [`boundary_intersection`]
/// for each endpoint instead.
pub fn connector_geometry(source: &Node, target: &Node) -> Option<ConnectorGeometry> {
    let midpoint = Point {
        x: (source.x + target.x) / 2.0,
        y: (source.y + target.y) / 2.0,
    };
    let distance = (target.x - source.x).hypot(target.y - source.y);
    let angle = (target.y - source.y).atan2(target.x - source.x);

    let source_anchor = boundary_intersection(target.center(), &source.bounds(), true)?;
    let target_anchor = boundary_intersection(source.center(), &target.bounds(), true)?;

    Some(ConnectorGeometry {
        midpoint,
        distance,
        angle,
        source_anchor,
        source_anchor_distance: source_anchor.distance_to(&source.center()),
        target_anchor,
        target_anchor_distance: target_anchor.distance_to(&target.center()),
    })
}
