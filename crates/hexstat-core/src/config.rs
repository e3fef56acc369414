//! Chart configuration.
//!
//! All distances are in the chart's logical coordinate space: a square of
//! `chart_size` units with `margin` units of bleed on every side, centered
//! at `chart_size / 2`. Consumers embed the resulting SVG at arbitrary
//! pixel sizes; nothing here is a pixel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Side length of the logical chart square.
    pub chart_size: f64,
    /// Bleed around the chart square (the viewBox extends this far past it).
    pub margin: f64,
    /// Radius of the data grid; a 100% stat vertex lands exactly here.
    pub grid_radius: f64,
    /// Fixed radius of the stat-name label ring.
    pub name_label_radius: f64,
    /// Fixed radius of the rank-value label ring.
    pub value_label_radius: f64,
    /// Radius of the decorative outer circle.
    pub outer_ring_radius: f64,
    /// Number of concentric graticule rings.
    pub ticks: u32,
    /// Center zone radius as a fraction of `grid_radius`.
    pub center_zone_ratio: f64,
    /// Stat counts above this push the label rings outward.
    pub crowd_threshold: usize,
    /// Ring stretch factor applied past `crowd_threshold`.
    pub crowd_stretch: f64,
    /// Rays with |cos(angle)| below this are treated as vertical and get
    /// center-aligned labels.
    pub align_cos_threshold: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_size: 600.0,
            margin: 10.0,
            grid_radius: 200.0,
            name_label_radius: 230.0,
            value_label_radius: 250.0,
            outer_ring_radius: 280.0,
            ticks: 5,
            center_zone_ratio: 0.4,
            crowd_threshold: 6,
            crowd_stretch: 1.1,
            align_cos_threshold: 0.3,
        }
    }
}

impl ChartConfig {
    pub fn center(&self) -> f64 {
        self.chart_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: ChartConfig = serde_json::from_str(r#"{"gridRadius": 150}"#).unwrap();
        assert_eq!(cfg.grid_radius, 150.0);
        assert_eq!(cfg.chart_size, 600.0);
        assert_eq!(cfg.ticks, 5);
    }

    #[test]
    fn empty_object_is_the_default_config() {
        let cfg: ChartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ChartConfig::default());
    }
}
