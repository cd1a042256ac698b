//! Trace payload for debugging connector layout.
//!
//! A JSON dump is written only when `REMORA_TRACE_CONNECTOR_OUT` is set.
//! Tracing never affects layout results; write failures are ignored.

use crate::model::ConnectorLayout;
use remora_core::{ConnectorGeometry, Node, connector_geometry};

#[derive(serde::Serialize)]
struct ConnectorTrace<'a> {
    source: &'a Node,
    target: &'a Node,
    text_width: f64,
    /// `None` when the node pair is degenerate (overlapping centers).
    geometry: Option<ConnectorGeometry>,
    layout: &'a ConnectorLayout,
}

pub(crate) fn maybe_write_connector_trace(
    source: &Node,
    target: &Node,
    text_width: f64,
    layout: &ConnectorLayout,
) {
    let Some(out_path) = std::env::var_os("REMORA_TRACE_CONNECTOR_OUT") else {
        return;
    };
    let trace = ConnectorTrace {
        source,
        target,
        text_width,
        geometry: connector_geometry(source, target),
        layout,
    };
    if let Ok(json) = serde_json::to_string_pretty(&trace) {
        let _ = std::fs::write(out_path, json);
    }
}
