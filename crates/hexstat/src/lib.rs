#![forbid(unsafe_code)]

//! `hexstat` is a headless hexagonal (radar-style) stat chart generator.
//!
//! A stat sheet (named attributes with ordinal ranks like `"A+"` or `"SS"`)
//! resolves against a configurable rank scale, lays out as radial geometry,
//! and renders to SVG or raster formats. No DOM, no GUI.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`hexstat::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization

pub use hexstat_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use hexstat_render::model::{ChartLayout, LabelLayout, TextAlignment};
    pub use hexstat_render::svg::{SvgRenderOptions, render_chart_svg, sanitize_chart_id};
    pub use hexstat_render::{layout_stat_chart, layout_to_json};

    #[cfg(feature = "raster")]
    pub mod raster;

    use hexstat_core::{ChartConfig, Result, StatSet, StatSheet};

    /// Convenience wrapper bundling a chart configuration and SVG options.
    ///
    /// Intended for shells where passing separate parameters per call is
    /// noisy. All work is CPU-bound and performs no I/O.
    #[derive(Debug, Clone, Default)]
    pub struct ChartRenderer {
        pub config: ChartConfig,
        pub svg: SvgRenderOptions,
    }

    impl ChartRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_config(mut self, config: ChartConfig) -> Self {
            self.config = config;
            self
        }

        pub fn with_chart_id(mut self, chart_id: &str) -> Self {
            self.svg.chart_id = Some(sanitize_chart_id(chart_id));
            self
        }

        pub fn layout(&self, stats: &StatSet) -> ChartLayout {
            layout_stat_chart(stats, &self.config)
        }

        pub fn render_svg(&self, stats: &StatSet) -> String {
            render_chart_svg(&self.layout(stats), &self.svg)
        }

        /// Parses a JSON stat sheet and renders it in one step, honoring any
        /// config overrides embedded in the sheet.
        pub fn render_sheet_svg(&self, sheet_json: &str) -> Result<String> {
            let sheet = StatSheet::from_json(sheet_json)?;
            let stats = StatSet::from_sheet(&sheet)?;
            let config = sheet.config.clone().unwrap_or_else(|| self.config.clone());
            let layout = layout_stat_chart(&stats, &config);
            Ok(render_chart_svg(&layout, &self.svg))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use hexstat_core::StatSheet;

        #[test]
        fn renderer_renders_the_example_sheet() {
            let sheet = serde_json::to_string(&serde_json::json!({
                "maxRank": "S",
                "stats": [
                    { "name": "ATK", "rank": "S" },
                    { "name": "DEF", "rank": "B+" },
                    { "name": "AGI", "rank": "A" },
                ],
            }))
            .unwrap();
            let svg = ChartRenderer::new()
                .with_chart_id("demo")
                .render_sheet_svg(&sheet)
                .unwrap();
            assert!(svg.starts_with("<svg id=\"demo\""));
        }

        #[test]
        fn sheet_config_overrides_the_renderer_default() {
            let sheet = serde_json::to_string(&serde_json::json!({
                "maxRank": "S",
                "stats": [
                    { "name": "ATK", "rank": "S" },
                    { "name": "DEF", "rank": "B+" },
                    { "name": "AGI", "rank": "A" },
                ],
                "config": { "chartSize": 400, "margin": 0 },
            }))
            .unwrap();
            let svg = ChartRenderer::new().render_sheet_svg(&sheet).unwrap();
            assert!(svg.contains(r#"viewBox="0 0 400 400""#));
        }

        #[test]
        fn example_sheet_stays_renderable() {
            let set = hexstat_core::StatSet::from_sheet(&StatSheet::example()).unwrap();
            let svg = ChartRenderer::new().render_svg(&set);
            assert!(svg.contains(">VERSATILITY</text>"));
        }
    }
}
