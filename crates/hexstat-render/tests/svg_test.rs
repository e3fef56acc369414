use hexstat_core::{ChartConfig, StatSet, StatSheet};
use hexstat_render::layout_stat_chart;
use hexstat_render::svg::{SvgRenderOptions, render_chart_svg};

fn example_svg(options: &SvgRenderOptions) -> String {
    let set = StatSet::from_sheet(&StatSheet::example()).unwrap();
    let layout = layout_stat_chart(&set, &ChartConfig::default());
    render_chart_svg(&layout, options)
}

#[test]
fn svg_has_root_viewbox_and_scoped_style() {
    let svg = example_svg(&SvgRenderOptions::default());
    assert!(svg.starts_with("<svg id=\"stat-chart\""));
    assert!(svg.contains(r#"viewBox="-10 -10 620 620""#));
    assert!(svg.contains("#stat-chart .gridRing{"));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn svg_draws_polygon_spokes_and_labels() {
    let svg = example_svg(&SvgRenderOptions::default());
    assert!(svg.contains(r#"class="statArea""#));
    assert!(svg.contains(r#"class="centerZone""#));
    assert_eq!(svg.matches(r#"class="spoke""#).count(), 6);
    assert_eq!(svg.matches("class=\"gridRing").count(), 5);
    assert!(svg.contains(">KNOWLEDGE</text>"));
    assert!(svg.contains(">S+</text>"));
}

#[test]
fn gradient_ids_are_scoped_by_the_chart_id() {
    let svg = example_svg(&SvgRenderOptions {
        chart_id: Some("hero one".to_string()),
    });
    assert!(svg.starts_with("<svg id=\"hero-one\""));
    assert!(svg.contains(r##"id="statFill-hero-one""##));
    assert!(svg.contains(r##"fill="url(#statFill-hero-one)""##));
    assert!(svg.contains(r##"filter="url(#glow-hero-one)""##));
}

#[test]
fn empty_set_renders_a_chart_shell_without_data_marks() {
    let set = StatSet::new("S").unwrap();
    let layout = layout_stat_chart(&set, &ChartConfig::default());
    let svg = render_chart_svg(&layout, &SvgRenderOptions::default());
    assert!(svg.contains("<svg id="));
    assert!(svg.contains(r#"class="outerRing""#));
    assert!(!svg.contains(r#"class="statArea""#));
    assert!(!svg.contains(r#"class="spoke""#));
    assert!(!svg.contains("<text"));
}

#[test]
fn label_text_is_xml_escaped() {
    let sheet: StatSheet = serde_json::from_value(serde_json::json!({
        "maxRank": "S",
        "stats": [
            { "name": "R&D <SPIKE>", "rank": "A" },
            { "name": "DEF", "rank": "B" },
            { "name": "ATK", "rank": "C" },
        ],
    }))
    .unwrap();
    let set = StatSet::from_sheet(&sheet).unwrap();
    let layout = layout_stat_chart(&set, &ChartConfig::default());
    let svg = render_chart_svg(&layout, &SvgRenderOptions::default());
    assert!(svg.contains(">R&amp;D &lt;SPIKE></text>"));
}

#[test]
fn rendering_is_deterministic() {
    let a = example_svg(&SvgRenderOptions::default());
    let b = example_svg(&SvgRenderOptions::default());
    assert_eq!(a, b);
}
