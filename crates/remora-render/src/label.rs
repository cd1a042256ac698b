//! Label placement policy for a single connector.

use crate::model::{ConnectorLayout, LabelDraw, LabelOffset, LineDraw, TextAlign};
use remora_core::{Node, Point, boundary_intersection};
use std::f64::consts::PI;

/// Center-to-center distance (world units) at or above which labels leave the
/// connector midpoint and anchor to the node boundaries instead. Policy knob;
/// fixed for now.
pub const LABEL_DISTANCE_THRESHOLD: f64 = 300.0;

/// Labels sit this many units above the rotated text baseline.
pub const LABEL_BASELINE_LIFT: f64 = 3.0;

/// Places the connector line and label(s) for a node pair.
///
/// Short connectors (center distance below [`LABEL_DISTANCE_THRESHOLD`]) get
/// a single label on the midpoint. Long connectors get one label per
/// endpoint, anchored outside the node box and rotated along the connector
/// direction, mirrored so both labels read outward from their boxes. An
/// endpoint whose boundary anchor is undefined (its peer's center sits inside
/// the box) is skipped rather than failing the whole layout.
///
/// Pure: identical inputs produce identical instructions.
pub fn place_label(source: &Node, target: &Node, text: &str, text_width: f64) -> ConnectorLayout {
    let midpoint = Point {
        x: (source.x + target.x) / 2.0,
        y: (source.y + target.y) / 2.0,
    };
    let distance = (target.x - source.x).hypot(target.y - source.y);
    let angle = (target.y - source.y).atan2(target.x - source.x);

    // Computed once and threaded into both endpoint draws so the two sign
    // flips cannot drift apart.
    let mirrored = source.x > target.x;
    let rotation = if mirrored { angle + PI } else { angle };

    let mut labels = Vec::new();
    if distance >= LABEL_DISTANCE_THRESHOLD {
        let outward = if mirrored { -1.0 } else { 1.0 };
        if let Some(anchor) = boundary_intersection(target.center(), &source.bounds(), true) {
            labels.push(LabelDraw {
                origin: source.center(),
                rotation,
                text_align: TextAlign::Center,
                offset: LabelOffset {
                    dx: (text_width + anchor.distance_to(&source.center())) * outward,
                    dy: -LABEL_BASELINE_LIFT,
                },
                text: text.to_string(),
            });
        }
        if let Some(anchor) = boundary_intersection(source.center(), &target.bounds(), true) {
            labels.push(LabelDraw {
                origin: target.center(),
                rotation,
                text_align: TextAlign::Center,
                offset: LabelOffset {
                    dx: (text_width + anchor.distance_to(&target.center())) * -outward,
                    dy: -LABEL_BASELINE_LIFT,
                },
                text: text.to_string(),
            });
        }
    } else {
        labels.push(LabelDraw {
            origin: midpoint,
            rotation,
            text_align: TextAlign::Center,
            offset: LabelOffset {
                dx: 0.0,
                dy: -LABEL_BASELINE_LIFT,
            },
            text: text.to_string(),
        });
    }

    ConnectorLayout {
        line: LineDraw {
            from: source.center(),
            to: target.center(),
        },
        labels,
    }
}
