#![forbid(unsafe_code)]

//! Connector layout + label placement over the `remora-core` geometry kernel.
//!
//! The render layer is headless: it turns a node pair and a label into an
//! explicit [`model::ConnectorLayout`] draw-instruction value and leaves
//! applying those instructions (canvas, SVG, ...) to the embedding surface.
//! [`svg`] ships a debug SVG writer for headless inspection.

pub mod label;
pub mod model;
pub mod scene;
pub mod svg;
pub mod text;

mod trace;

use crate::model::ConnectorLayout;
use crate::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
use remora_core::Node;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid node geometry: {message}")]
    InvalidNode { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
    pub text_style: TextStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
            text_style: TextStyle::default(),
        }
    }
}

/// Lays out the connector between `source` and `target`, with `text` as the
/// connector label.
///
/// Label width measurement is an external capability supplied through
/// [`LayoutOptions::text_measurer`]; callers that already measured the text
/// can call [`label::place_label`] directly.
pub fn layout_connector(
    source: &Node,
    target: &Node,
    text: &str,
    options: &LayoutOptions,
) -> Result<ConnectorLayout> {
    validate_node("source", source)?;
    validate_node("target", target)?;

    let metrics = options.text_measurer.measure(text, &options.text_style);
    let layout = label::place_label(source, target, text, metrics.width);
    trace::maybe_write_connector_trace(source, target, metrics.width, &layout);
    Ok(layout)
}

fn validate_node(role: &str, node: &Node) -> Result<()> {
    if node.is_valid() {
        return Ok(());
    }
    Err(Error::InvalidNode {
        message: format!(
            "{role} node needs a finite center and positive extents, got x={} y={} width={} height={}",
            node.x, node.y, node.width, node.height
        ),
    })
}
