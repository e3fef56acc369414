//! Radial layout: polar geometry for vertices, spokes, rings and labels.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

use hexstat_core::geom::{Point, point};
use hexstat_core::{ChartConfig, StatRecord, StatSet};

use crate::model::{
    ChartLayout, LabelLayout, LayoutPoint, RingLayout, SpokeLayout, TextAlignment,
};
use crate::text::font_size_hint;

/// Angle of stat `index` out of `total`: evenly spaced, index 0 at the top,
/// proceeding clockwise. Zero when `total` is zero.
pub fn stat_angle(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    TAU * index as f64 / total as f64 - FRAC_PI_2
}

/// The polygon vertex for one stat.
///
/// `percentage` is not clamped: overflow-band values past 100 legitimately
/// push the vertex beyond the nominal grid.
pub fn vertex_point(percentage: f64, index: usize, total: usize, max_radius: f64) -> Point {
    let angle = stat_angle(index, total);
    let length = percentage / 100.0 * max_radius;
    point(angle.cos() * length, angle.sin() * length)
}

/// All stat polygon vertices in stat order.
pub fn polygon_points(records: &[StatRecord], max_radius: f64) -> Vec<LayoutPoint> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let p = vertex_point(record.percentage, i, records.len(), max_radius);
            LayoutPoint { x: p.x, y: p.y }
        })
        .collect()
}

/// Closed SVG path over the given points: `M x,y L x,y ... Z`.
///
/// Empty input yields an empty path, the no-op "nothing to draw" case.
pub fn polygon_path(points: &[LayoutPoint]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(&mut out, "{cmd}{},{} ", fmt_number(p.x), fmt_number(p.y));
    }
    if !out.is_empty() {
        out.push('Z');
    }
    out
}

/// Label anchor on a fixed-radius ring along the stat's ray.
///
/// The radius is independent of the stat's percentage, so labels stay put
/// when values change; only the polygon vertex moves. Crowded charts
/// (`total > crowd_threshold`) push the ring outward by `crowd_stretch`.
pub fn label_anchor(
    index: usize,
    total: usize,
    distance: f64,
    config: &ChartConfig,
) -> (Point, TextAlignment) {
    let angle = stat_angle(index, total);
    let distance = if total > config.crowd_threshold {
        distance * config.crowd_stretch
    } else {
        distance
    };
    let position = point(angle.cos() * distance, angle.sin() * distance);
    (position, alignment_for_angle(angle, config))
}

/// Alignment from the horizontal component of the ray direction, never
/// from neighboring labels: near-vertical rays center, rightward rays
/// start-align, leftward rays end-align.
fn alignment_for_angle(angle: f64, config: &ChartConfig) -> TextAlignment {
    let cos = angle.cos();
    if cos.abs() < config.align_cos_threshold {
        TextAlignment::Middle
    } else if cos > 0.0 {
        TextAlignment::Start
    } else {
        TextAlignment::End
    }
}

/// Spoke from the center to the grid boundary for one stat position,
/// independent of the stat's value.
pub fn connector_ray(index: usize, total: usize, grid_radius: f64) -> SpokeLayout {
    let angle = stat_angle(index, total);
    SpokeLayout {
        x2: angle.cos() * grid_radius,
        y2: angle.sin() * grid_radius,
    }
}

/// Concentric graticule rings: `ticks` closed polygons with one vertex per
/// stat, radii evenly stepped up to `grid_radius`, outermost first.
pub fn graticule_rings(ticks: u32, total: usize, grid_radius: f64) -> Vec<RingLayout> {
    if total == 0 || ticks == 0 {
        return Vec::new();
    }
    (1..=ticks)
        .rev()
        .map(|t| {
            let radius = grid_radius * f64::from(t) / f64::from(ticks);
            RingLayout {
                radius,
                points: ring_points(total, radius),
            }
        })
        .collect()
}

fn ring_points(total: usize, radius: f64) -> Vec<LayoutPoint> {
    (0..total)
        .map(|i| {
            let angle = stat_angle(i, total);
            LayoutPoint {
                x: angle.cos() * radius,
                y: angle.sin() * radius,
            }
        })
        .collect()
}

/// Lays out the whole chart. Pure and idempotent: identical input produces
/// bit-identical output. An empty set yields empty collections and paths.
pub fn layout_stat_chart(stats: &StatSet, config: &ChartConfig) -> ChartLayout {
    let records = stats.records();
    let total = records.len();

    let vertices = polygon_points(records, config.grid_radius);
    let polygon = polygon_path(&vertices);

    let center_zone = polygon_path(&ring_points(
        total,
        config.grid_radius * config.center_zone_ratio,
    ));

    let spokes = (0..total)
        .map(|i| connector_ray(i, total, config.grid_radius))
        .collect();

    let mut name_labels = Vec::with_capacity(total);
    let mut value_labels = Vec::with_capacity(total);
    for (i, record) in records.iter().enumerate() {
        let (pos, alignment) = label_anchor(i, total, config.name_label_radius, config);
        name_labels.push(LabelLayout {
            text: record.name.clone(),
            x: pos.x,
            y: pos.y,
            alignment,
            font_size: font_size_hint(&record.name),
        });
        let (pos, alignment) = label_anchor(i, total, config.value_label_radius, config);
        value_labels.push(LabelLayout {
            text: record.rank.clone(),
            x: pos.x,
            y: pos.y,
            alignment,
            font_size: font_size_hint(&record.rank),
        });
    }

    ChartLayout {
        svg_width: config.chart_size + 2.0 * config.margin,
        svg_height: config.chart_size + 2.0 * config.margin,
        view_min_x: -config.margin,
        view_min_y: -config.margin,
        chart_size: config.chart_size,
        center_x: config.center(),
        center_y: config.center(),
        grid_radius: config.grid_radius,
        outer_ring_radius: config.outer_ring_radius,
        rings: graticule_rings(config.ticks, total, config.grid_radius),
        spokes,
        vertices,
        polygon_path: polygon,
        center_zone_path: center_zone,
        name_labels,
        value_labels,
    }
}

/// Attribute-friendly number formatting: round to 3 decimals, trim trailing
/// zeros, normalize `-0`.
pub(crate) fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
