//! Render instructions: what the page should draw for a result set.
//!
//! These are plain values; the UI layer turns them into markup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render_mode::{COUNT_KEY, RenderMode, ResultRow, X_KEY, Y_KEY, choose_render_mode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableSpec {
    pub header: Vec<String>,
    pub body: Vec<Vec<String>>,
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl TableSpec {
    /// Header from the first row's keys; every row is read through that header.
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        let header = rows.first().map(|r| r.keys().cloned().collect::<Vec<_>>()).unwrap_or_default();
        let body = rows
            .iter()
            .map(|row| header.iter().map(|key| cell_text(row.get(key))).collect())
            .collect();
        Self { header, body }
    }

    /// Fixed `(key, label)` columns.
    pub fn with_columns(columns: &[(&str, &str)], rows: &[ResultRow]) -> Self {
        let header = columns.iter().map(|(_, label)| label.to_string()).collect();
        let body = rows
            .iter()
            .map(|row| columns.iter().map(|(key, _)| cell_text(row.get(*key))).collect())
            .collect();
        Self { header, body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBar {
    pub label: String,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    pub x: f64,
    pub y: f64,
    pub count: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    Histogram1D { xkey: String, bars: Vec<HistogramBar> },
    Histogram2D { points: Vec<HeatPoint> },
}

impl ChartSpec {
    pub fn for_mode(mode: &RenderMode, rows: &[ResultRow]) -> Option<Self> {
        match mode {
            RenderMode::Table => None,
            RenderMode::Histogram1D { xkey } => {
                let bars = rows
                    .iter()
                    .filter_map(|row| {
                        let count = row.get(COUNT_KEY)?.as_f64()?;
                        Some(HistogramBar { label: cell_text(row.get(xkey)), count })
                    })
                    .collect();
                Some(Self::Histogram1D { xkey: xkey.clone(), bars })
            }
            RenderMode::Histogram2D => {
                let points = rows
                    .iter()
                    .filter_map(|row| {
                        Some(HeatPoint {
                            x: row.get(X_KEY)?.as_f64()?,
                            y: row.get(Y_KEY)?.as_f64()?,
                            count: row.get(COUNT_KEY).and_then(|c| c.as_f64()),
                        })
                    })
                    .collect();
                Some(Self::Histogram2D { points })
            }
        }
    }
}

/// Everything drawn for one response: always a table, sometimes a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResultView {
    pub table: TableSpec,
    pub chart: Option<ChartSpec>,
}

impl ResultView {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        Self::with_table(TableSpec::from_rows(rows), rows)
    }

    pub fn with_table(table: TableSpec, rows: &[ResultRow]) -> Self {
        let mode = choose_render_mode(rows);
        Self { table, chart: ChartSpec::for_mode(&mode, rows) }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rows(value: Value) -> Vec<ResultRow> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_table_header_from_first_row_and_missing_cells() {
        let r = rows(json!([
            {"year": 2013, "passenger_count": 1, "count": 7},
            {"year": 2014, "count": 3},
            {"year": "n/a", "passenger_count": null, "count": 1, "extra": true}
        ]));
        let table = TableSpec::from_rows(&r);
        assert_eq!(table.header, vec!["year", "passenger_count", "count"]);
        assert_eq!(table.body[0], vec!["2013", "1", "7"]);
        assert_eq!(table.body[1], vec!["2014", "", "3"]);
        assert_eq!(table.body[2], vec!["n/a", "", "1"]);
    }

    #[test]
    fn test_empty_rows_give_empty_table_and_no_chart() {
        let view = ResultView::from_rows(&[]);
        assert!(view.table.header.is_empty());
        assert!(view.table.is_empty());
        assert!(view.chart.is_none());
    }

    #[test]
    fn test_1d_chart_bars() {
        let r = rows(json!([{"cab_type": 0, "count": 10}, {"cab_type": 1, "count": 30}]));
        let view = ResultView::from_rows(&r);
        assert_eq!(
            view.chart,
            Some(ChartSpec::Histogram1D {
                xkey: "cab_type".to_string(),
                bars: vec![
                    HistogramBar { label: "0".to_string(), count: 10.0 },
                    HistogramBar { label: "1".to_string(), count: 30.0 },
                ],
            })
        );
    }

    #[test]
    fn test_2d_chart_skips_non_numeric_points() {
        let r = rows(json!([
            {"x": 1, "y": 2, "count": 5},
            {"x": "a", "y": 3, "count": 6},
            {"x": 4, "y": 5}
        ]));
        let Some(ChartSpec::Histogram2D { points }) = ResultView::from_rows(&r).chart else {
            panic!("expected a 2d chart");
        };
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], HeatPoint { x: 4.0, y: 5.0, count: None });
    }

    #[test]
    fn test_fixed_columns() {
        let r = rows(json!([{"bitmapID": 4, "count": 12}, {"bitmapID": 9, "count": 2}]));
        let view = ResultView::with_table(TableSpec::with_columns(&[("bitmapID", "Bitmap ID"), ("count", "Count")], &r), &r);
        assert_eq!(view.table.header, vec!["Bitmap ID", "Count"]);
        assert_eq!(view.table.body[1], vec!["9", "2"]);
        assert!(matches!(view.chart, Some(ChartSpec::Histogram1D { ref xkey, .. }) if xkey == "bitmapID"));
    }
}
