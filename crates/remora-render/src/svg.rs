//! Debug SVG writer for connector layouts.
//!
//! Headless stand-in for the interactive canvas surface: applies the draw
//! instructions to a standalone `<svg>` string so layouts can be inspected
//! and diffed without a browser.

use crate::model::{ConnectorLayout, LabelDraw};
use remora_core::{Bounds, Node};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
    /// When true, draw the filled node boxes.
    pub include_nodes: bool,
    /// When true, draw the connector line.
    pub include_line: bool,
    /// When true, draw the label text groups.
    pub include_labels: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            include_nodes: true,
            include_line: true,
            include_labels: true,
        }
    }
}

pub fn render_connector_debug_svg(
    source: &Node,
    target: &Node,
    layout: &ConnectorLayout,
    options: &SvgRenderOptions,
) -> String {
    let bounds = layout_bounds(source, target, layout);
    let pad = options.viewbox_padding.max(0.0);
    let vb_min_x = bounds.min_x - pad;
    let vb_min_y = bounds.min_y - pad;
    let vb_w = (bounds.max_x - bounds.min_x) + pad * 2.0;
    let vb_h = (bounds.max_y - bounds.min_y) + pad * 2.0;

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt(vb_min_x),
        fmt(vb_min_y),
        fmt(vb_w.max(1.0)),
        fmt(vb_h.max(1.0))
    );
    out.push_str(
        r#"<style>
.source-box { fill: #0000ff; }
.target-box { fill: #ff0000; }
.connector { fill: none; stroke: #000000; stroke-width: 3; }
.connector-label { fill: #000000; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 11px; text-anchor: middle; }
</style>
"#,
    );

    // Paint order: line first, then the boxes (which occlude the interior
    // segment), labels on top.
    if options.include_line {
        let _ = write!(
            &mut out,
            r#"<polyline class="connector" points="{},{} {},{}" />"#,
            fmt(layout.line.from.x),
            fmt(layout.line.from.y),
            fmt(layout.line.to.x),
            fmt(layout.line.to.y)
        );
        out.push('\n');
    }

    if options.include_nodes {
        render_node_box(&mut out, source, "source-box");
        render_node_box(&mut out, target, "target-box");
    }

    if options.include_labels {
        for label in &layout.labels {
            render_label(&mut out, label);
        }
    }

    out.push_str("</svg>\n");
    out
}

fn layout_bounds(source: &Node, target: &Node, layout: &ConnectorLayout) -> Bounds {
    let sb = source.bounds();
    let tb = target.bounds();
    Bounds::from_points([
        (sb.min_x, sb.min_y),
        (sb.max_x, sb.max_y),
        (tb.min_x, tb.min_y),
        (tb.max_x, tb.max_y),
        (layout.line.from.x, layout.line.from.y),
        (layout.line.to.x, layout.line.to.y),
    ])
    .unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 100.0,
        max_y: 100.0,
    })
}

fn render_node_box(out: &mut String, node: &Node, class: &str) {
    let b = node.bounds();
    let _ = write!(
        out,
        r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" />"#,
        class,
        fmt(b.min_x),
        fmt(b.min_y),
        fmt(node.width),
        fmt(node.height)
    );
    out.push('\n');
}

fn render_label(out: &mut String, label: &LabelDraw) {
    // The draw instruction's translate/rotate/offset sequence maps 1:1 onto
    // the SVG transform list; text-anchor handles the centered alignment.
    let _ = write!(
        out,
        r#"<g transform="translate({}, {}) rotate({})"><text class="connector-label" x="{}" y="{}">{}</text></g>"#,
        fmt(label.origin.x),
        fmt(label.origin.y),
        fmt(label.rotation.to_degrees()),
        fmt(label.offset.dx),
        fmt(label.offset.dy),
        escape_xml(&label.text)
    );
    out.push('\n');
}

fn fmt(v: f64) -> String {
    let mut out = String::new();
    fmt_into(&mut out, v);
    out
}

fn fmt_into(out: &mut String, v: f64) {
    // Use a round-trippable decimal form, but avoid `-0` and tiny float noise
    // from our own calculations.
    if !v.is_finite() {
        out.push('0');
        return;
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }

    let _ = write!(out, "{v}");
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
