//! Mutable connector scene owned by the embedding surface.

use crate::model::ConnectorLayout;
use crate::{LayoutOptions, Result};
use remora_core::Node;

/// The two node boxes plus the connector label text.
///
/// The source box follows the pointer during interactive dragging; both
/// boxes are single-writer, last-write-wins values. Every change triggers a
/// full recomputation — there is no cached or incremental layout state to
/// invalidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorScene {
    pub source: Node,
    pub target: Node,
    pub text: String,
}

impl ConnectorScene {
    pub fn new(source: Node, target: Node, text: impl Into<String>) -> Self {
        Self {
            source,
            target,
            text: text.into(),
        }
    }

    /// Recenters the source box (pointer-move handler).
    pub fn move_source(&mut self, x: f64, y: f64) {
        self.source.x = x;
        self.source.y = y;
    }

    pub fn move_target(&mut self, x: f64, y: f64) {
        self.target.x = x;
        self.target.y = y;
    }

    /// Full, independent recomputation from the current node positions.
    pub fn layout(&self, options: &LayoutOptions) -> Result<ConnectorLayout> {
        crate::layout_connector(&self.source, &self.target, &self.text, options)
    }
}
