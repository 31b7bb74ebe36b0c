//! Picks how a result set should be drawn from the shape of its first row.

use serde::{Deserialize, Serialize};

/// One result record. Key order is the order the server sent them in.
pub type ResultRow = serde_json::Map<String, serde_json::Value>;

pub const COUNT_KEY: &str = "count";
pub const X_KEY: &str = "x";
pub const Y_KEY: &str = "y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Bars of `(row[xkey], row.count)`.
    Histogram1D { xkey: String },
    /// Points at `(row.x, row.y)`, encoded by `row.count` when present.
    Histogram2D,
    Table,
}

/// Only the first row is inspected; the rest of the set is assumed to share
/// its keys. Sets with fewer than two rows always render as a table.
pub fn choose_render_mode(rows: &[ResultRow]) -> RenderMode {
    let Some(first) = rows.first() else {
        return RenderMode::Table;
    };
    if rows.len() <= 1 {
        return RenderMode::Table;
    }

    if first.len() == 2 && first.contains_key(COUNT_KEY) {
        if let Some(xkey) = first.keys().find(|k| k.as_str() != COUNT_KEY) {
            return RenderMode::Histogram1D { xkey: xkey.clone() };
        }
    }
    if first.contains_key(X_KEY) && first.contains_key(Y_KEY) {
        return RenderMode::Histogram2D;
    }
    RenderMode::Table
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rows(value: serde_json::Value) -> Vec<ResultRow> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_two_key_count_rows_are_1d() {
        let r = rows(json!([{"day": 1, "count": 10}, {"day": 2, "count": 20}]));
        assert_eq!(choose_render_mode(&r), RenderMode::Histogram1D { xkey: "day".to_string() });
    }

    #[test]
    fn test_xkey_found_when_count_comes_first() {
        let r = rows(json!([{"count": 10, "cab_type": 0}, {"count": 20, "cab_type": 1}]));
        assert_eq!(choose_render_mode(&r), RenderMode::Histogram1D { xkey: "cab_type".to_string() });
    }

    #[test]
    fn test_xy_rows_are_2d() {
        let r = rows(json!([{"x": 1, "y": 2, "count": 5}, {"x": 2, "y": 3, "count": 6}]));
        assert_eq!(choose_render_mode(&r), RenderMode::Histogram2D);
    }

    #[test]
    fn test_xy_rows_without_count_are_2d() {
        let r = rows(json!([{"x": 1, "y": 2}, {"x": 2, "y": 3}]));
        assert_eq!(choose_render_mode(&r), RenderMode::Histogram2D);
    }

    #[test]
    fn test_single_row_is_table() {
        let r = rows(json!([{"a": 1, "count": 10}]));
        assert_eq!(choose_render_mode(&r), RenderMode::Table);
    }

    #[test]
    fn test_empty_is_table() {
        assert_eq!(choose_render_mode(&[]), RenderMode::Table);
    }

    #[test]
    fn test_other_shapes_are_table() {
        let r = rows(json!([
            {"count": 1, "year": 2013, "passenger_count": 2},
            {"count": 4, "year": 2014, "passenger_count": 1}
        ]));
        assert_eq!(choose_render_mode(&r), RenderMode::Table);

        let r = rows(json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]));
        assert_eq!(choose_render_mode(&r), RenderMode::Table);
    }
}
