#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for hexagonal stat charts.
//!
//! Layout is a pure function of the stat set and the chart configuration:
//! no hidden state, bit-identical output for identical input. The SVG
//! emitter consumes a [`model::ChartLayout`] and nothing else.

pub mod model;
pub mod radial;
pub mod svg;
pub mod text;

pub use radial::layout_stat_chart;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Serializes a layout for consumers that embed the chart themselves
/// instead of taking our SVG.
pub fn layout_to_json(layout: &model::ChartLayout, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(layout)?
    } else {
        serde_json::to_string(layout)?
    })
}
