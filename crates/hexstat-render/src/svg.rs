//! SVG emission for a laid-out chart.
//!
//! Emits a standalone SVG document: `<style>` block scoped by the chart id,
//! gradient defs, graticule, spokes, the filled stat polygon and the
//! perimeter labels. Gradient/filter ids carry the chart id as a suffix so
//! several charts can be inlined in one page without id collisions.

use std::fmt::Write as _;

use crate::model::{ChartLayout, LabelLayout, TextAlignment};
use crate::radial::fmt_number as fmt;

const NAME_PILL_WIDTH: f64 = 120.0;
const VALUE_PILL_WIDTH: f64 = 30.0;
const PILL_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `id` of the emitted `<svg>`; sanitized before use.
    /// Defaults to `stat-chart`.
    pub chart_id: Option<String>,
}

/// Converts an arbitrary string into a conservative SVG `id` token.
///
/// The root id prefixes the internal gradient and filter ids, so a hostile
/// or merely unusual id would otherwise leak into `url(#...)` references.
pub fn sanitize_chart_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "stat-chart".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "h-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "h" {
        return "stat-chart".to_string();
    }
    out.to_string()
}

pub fn render_chart_svg(layout: &ChartLayout, options: &SvgRenderOptions) -> String {
    let chart_id = sanitize_chart_id(options.chart_id.as_deref().unwrap_or("stat-chart"));
    let id = escape_xml(&chart_id);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" viewBox="{minx} {miny} {w} {h}" width="{w}" height="{h}" role="img" aria-roledescription="hexagonal stat chart" style="background-color: white;">"#,
        minx = fmt(layout.view_min_x),
        miny = fmt(layout.view_min_y),
        w = fmt(layout.svg_width),
        h = fmt(layout.svg_height),
    );

    let _ = write!(&mut out, "<style>{}</style>", chart_css(&chart_id));

    out.push_str("<defs>");
    let _ = write!(
        &mut out,
        r##"<linearGradient id="statFill-{id}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#4158D0" stop-opacity="0.8"/><stop offset="50%" stop-color="#C850C0" stop-opacity="0.8"/><stop offset="100%" stop-color="#FFCC70" stop-opacity="0.8"/></linearGradient>"##
    );
    let _ = write!(
        &mut out,
        r##"<linearGradient id="centerFill-{id}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#4158D0" stop-opacity="1"/><stop offset="50%" stop-color="#C850C0" stop-opacity="1"/><stop offset="100%" stop-color="#FFCC70" stop-opacity="1"/></linearGradient>"##
    );
    let _ = write!(
        &mut out,
        r#"<filter id="glow-{id}" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="4" result="blur"/><feComposite in="SourceGraphic" in2="blur" operator="over"/></filter>"#
    );
    out.push_str("</defs>");

    let _ = write!(
        &mut out,
        r#"<rect class="chartBackdrop" width="{size}" height="{size}"/>"#,
        size = fmt(layout.chart_size)
    );

    let _ = write!(
        &mut out,
        r#"<g transform="translate({x}, {y})">"#,
        x = fmt(layout.center_x),
        y = fmt(layout.center_y)
    );

    let _ = write!(
        &mut out,
        r#"<circle r="{r}" class="outerRing" filter="url(#glow-{id})"/>"#,
        r = fmt(layout.outer_ring_radius)
    );

    for (i, ring) in layout.rings.iter().enumerate() {
        let mut points = String::new();
        for (j, p) in ring.points.iter().enumerate() {
            if j > 0 {
                points.push(' ');
            }
            let _ = write!(&mut points, "{},{}", fmt(p.x), fmt(p.y));
        }
        let class = if i == 0 { "gridRing gridRingOuter" } else { "gridRing" };
        let _ = write!(
            &mut out,
            r#"<polygon points="{points}" class="{class}"/>"#
        );
    }

    for spoke in &layout.spokes {
        let _ = write!(
            &mut out,
            r#"<line x1="0" y1="0" x2="{x2}" y2="{y2}" class="spoke"/>"#,
            x2 = fmt(spoke.x2),
            y2 = fmt(spoke.y2)
        );
    }

    if !layout.polygon_path.is_empty() {
        let _ = write!(
            &mut out,
            r#"<path d="{d}" class="statArea" fill="url(#statFill-{id})"/>"#,
            d = escape_xml(&layout.polygon_path)
        );
    }
    if !layout.center_zone_path.is_empty() {
        let _ = write!(
            &mut out,
            r#"<path d="{d}" class="centerZone" fill="url(#centerFill-{id})"/>"#,
            d = escape_xml(&layout.center_zone_path)
        );
    }

    for label in &layout.name_labels {
        write_label(&mut out, label, "statName", NAME_PILL_WIDTH);
    }
    for label in &layout.value_labels {
        write_label(&mut out, label, "statValue", VALUE_PILL_WIDTH);
    }

    out.push_str("</g></svg>");
    out
}

/// A label is a translucent background pill plus the text itself. The pill
/// shifts with the alignment so it always covers the rendered glyph run.
fn write_label(out: &mut String, label: &LabelLayout, class: &str, pill_width: f64) {
    let pill_x = label.x
        - match label.alignment {
            TextAlignment::End => pill_width,
            TextAlignment::Middle => pill_width / 2.0,
            TextAlignment::Start => 0.0,
        };
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="4" class="labelPill"/>"#,
        x = fmt(pill_x),
        y = fmt(label.y - PILL_HEIGHT / 2.0),
        w = fmt(pill_width),
        h = fmt(PILL_HEIGHT)
    );
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" text-anchor="{anchor}" font-size="{size}" class="{class}">{text}</text>"#,
        x = fmt(label.x),
        y = fmt(label.y),
        anchor = label.alignment.as_svg_anchor(),
        size = fmt(label.font_size),
        text = escape_xml(&label.text)
    );
}

fn chart_css(chart_id: &str) -> String {
    let id = escape_xml(chart_id);
    let mut css = String::new();
    let _ = write!(
        &mut css,
        "#{id} text{{font-family:'Roboto',sans-serif;dominant-baseline:middle;}}"
    );
    let _ = write!(&mut css, "#{id} .chartBackdrop{{fill:white;}}");
    let _ = write!(
        &mut css,
        "#{id} .outerRing{{fill:none;stroke:#e0e0e0;stroke-width:2;}}"
    );
    let _ = write!(
        &mut css,
        "#{id} .gridRing{{fill:none;stroke:#000;stroke-width:1;}}"
    );
    let _ = write!(&mut css, "#{id} .gridRingOuter{{stroke-width:2;}}");
    let _ = write!(&mut css, "#{id} .spoke{{stroke:#000;stroke-width:1;}}");
    let _ = write!(
        &mut css,
        "#{id} .statArea{{stroke:#000;stroke-width:2;}}"
    );
    let _ = write!(&mut css, "#{id} .centerZone{{stroke:none;}}");
    let _ = write!(
        &mut css,
        "#{id} .labelPill{{fill:white;fill-opacity:0.7;}}"
    );
    let _ = write!(&mut css, "#{id} .statName{{font-weight:bold;}}");
    let _ = write!(&mut css, "#{id} .statValue{{fill:#444;}}");
    css
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_ids_are_sanitized_conservatively() {
        assert_eq!(sanitize_chart_id("my chart #1"), "my-chart-1");
        assert_eq!(sanitize_chart_id("42"), "h-42");
        assert_eq!(sanitize_chart_id("  "), "stat-chart");
        assert_eq!(sanitize_chart_id("---"), "stat-chart");
    }

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml(r#"<A&B>"'"#), "&lt;A&amp;B>&quot;&#39;");
    }
}
