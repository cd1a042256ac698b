use remora_core::Point;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment for a label draw. The connector renderer only
/// ever centers text on the point it draws at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Center,
}

/// Offset applied after translating to `origin` and rotating by `rotation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDraw {
    pub origin: Point,
    /// Radians, applied around `origin`.
    pub rotation: f64,
    pub text_align: TextAlign,
    pub offset: LabelOffset,
    pub text: String,
}

/// Connector line endpoints. These are the node centers; the filled node
/// boxes occlude the interior segment when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDraw {
    pub from: Point,
    pub to: Point,
}

/// Full set of draw instructions for one connector render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorLayout {
    pub line: LineDraw,
    pub labels: Vec<LabelDraw>,
}
