//! Serializable layout primitives handed to renderers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// Horizontal text alignment for a perimeter label, derived from the
/// horizontal component of its ray. Maps 1:1 onto SVG `text-anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Start,
    Middle,
    End,
}

impl TextAlignment {
    pub fn as_svg_anchor(self) -> &'static str {
        match self {
            TextAlignment::Start => "start",
            TextAlignment::Middle => "middle",
            TextAlignment::End => "end",
        }
    }
}

/// Center-to-grid-boundary reference line, one per stat position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpokeLayout {
    pub x2: f64,
    pub y2: f64,
}

/// One concentric graticule ring (a closed polygon, one vertex per stat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingLayout {
    pub radius: f64,
    #[serde(default)]
    pub points: Vec<LayoutPoint>,
}

/// A positioned perimeter label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub alignment: TextAlignment,
    pub font_size: f64,
}

/// Everything a renderer needs, in logical coordinates centered at
/// (`center_x`, `center_y`) within a `svg_width` × `svg_height` viewBox
/// starting at (`view_min_x`, `view_min_y`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub svg_width: f64,
    pub svg_height: f64,
    pub view_min_x: f64,
    pub view_min_y: f64,
    pub chart_size: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub grid_radius: f64,
    pub outer_ring_radius: f64,
    #[serde(default)]
    pub rings: Vec<RingLayout>,
    #[serde(default)]
    pub spokes: Vec<SpokeLayout>,
    /// Stat polygon vertices in stat order; the path closes back to the
    /// first vertex.
    #[serde(default)]
    pub vertices: Vec<LayoutPoint>,
    pub polygon_path: String,
    pub center_zone_path: String,
    #[serde(default)]
    pub name_labels: Vec<LabelLayout>,
    #[serde(default)]
    pub value_labels: Vec<LabelLayout>,
}
