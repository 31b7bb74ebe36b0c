//! Pixel geometry for the histogram charts.

use serde::{Deserialize, Serialize};

use crate::render_plan::{HeatPoint, HistogramBar};

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 260.0;
pub const CHART_PADDING: f64 = 30.0;
const BAR_GAP: f64 = 2.0;
const MAX_POINT_RADIUS: f64 = 14.0;
const MIN_POINT_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Baseline for the count text drawn above the bar.
    pub value_y: f64,
    pub label: String,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMark {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub opacity: f64,
}

fn plot_width() -> f64 {
    CHART_WIDTH - 2.0 * CHART_PADDING
}

fn plot_height() -> f64 {
    CHART_HEIGHT - 2.0 * CHART_PADDING
}

/// Bars share the plot width evenly; heights scale to the largest count.
pub fn layout_bars(bars: &[HistogramBar]) -> Vec<BarRect> {
    if bars.is_empty() {
        return vec![];
    }
    let max_count = bars.iter().map(|b| b.count).fold(0.0_f64, f64::max);
    let slot = plot_width() / bars.len() as f64;
    let baseline = CHART_PADDING + plot_height();

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let height = if max_count > 0.0 { plot_height() * bar.count.max(0.0) / max_count } else { 0.0 };
            BarRect {
                x: CHART_PADDING + slot * i as f64 + BAR_GAP / 2.0,
                y: baseline - height,
                width: (slot - BAR_GAP).max(1.0),
                height,
                value_y: baseline - height - 3.0,
                label: bar.label.clone(),
                count: bar.count,
            }
        })
        .collect()
}

fn span(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn scale(value: f64, (min, max): (f64, f64), length: f64) -> f64 {
    if max > min { (value - min) / (max - min) * length } else { length / 2.0 }
}

/// Points are placed in data space stretched over the plot area, y growing
/// upwards. Radius and opacity follow `count`; points without one get the
/// middle of the range.
pub fn layout_points(points: &[HeatPoint]) -> Vec<PointMark> {
    if points.is_empty() {
        return vec![];
    }
    let xs = span(points.iter().map(|p| p.x));
    let ys = span(points.iter().map(|p| p.y));
    let max_count = points.iter().filter_map(|p| p.count).fold(0.0_f64, f64::max);

    points
        .iter()
        .map(|p| {
            let weight = match p.count {
                Some(c) if max_count > 0.0 => (c.max(0.0) / max_count).sqrt(),
                Some(_) => 0.0,
                None => 0.5,
            };
            PointMark {
                cx: CHART_PADDING + scale(p.x, xs, plot_width()),
                cy: CHART_PADDING + plot_height() - scale(p.y, ys, plot_height()),
                r: MIN_POINT_RADIUS + (MAX_POINT_RADIUS - MIN_POINT_RADIUS) * weight,
                opacity: 0.2 + 0.8 * weight,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_bar_fills_plot_height() {
        let bars = vec![
            HistogramBar { label: "a".to_string(), count: 5.0 },
            HistogramBar { label: "b".to_string(), count: 10.0 },
        ];
        let rects = layout_bars(&bars);
        assert_eq!(rects.len(), 2);
        assert!((rects[1].height - plot_height()).abs() < 1e-9);
        assert!((rects[0].height - plot_height() / 2.0).abs() < 1e-9);
        assert!(rects[0].x < rects[1].x);
        assert!((rects[1].y + rects[1].height - (CHART_HEIGHT - CHART_PADDING)).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_bars_are_flat() {
        let bars = vec![HistogramBar { label: "a".to_string(), count: 0.0 }];
        assert_eq!(layout_bars(&bars)[0].height, 0.0);
    }

    #[test]
    fn test_points_span_plot_area() {
        let points = vec![
            HeatPoint { x: 1.0, y: 1.0, count: Some(1.0) },
            HeatPoint { x: 12.0, y: 31.0, count: Some(4.0) },
        ];
        let marks = layout_points(&points);
        assert!((marks[0].cx - CHART_PADDING).abs() < 1e-9);
        assert!((marks[1].cx - (CHART_WIDTH - CHART_PADDING)).abs() < 1e-9);
        // y grows upwards
        assert!(marks[1].cy < marks[0].cy);
        assert!(marks[1].r > marks[0].r);
        assert!((marks[1].opacity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_is_centered() {
        let marks = layout_points(&[HeatPoint { x: 3.0, y: 3.0, count: None }]);
        assert!((marks[0].cx - CHART_WIDTH / 2.0).abs() < 1e-9);
        assert!((marks[0].cy - CHART_HEIGHT / 2.0).abs() < 1e-9);
    }
}
