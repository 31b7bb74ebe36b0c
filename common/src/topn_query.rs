//! Parameters of the TopN form.

use serde::{Deserialize, Serialize};

use crate::{intersect_query::selectable_row_id, pql};

pub const DEFAULT_TOPN_N: u64 = 10;
pub const MAX_TOPN_N: u64 = 1000;

/// `(row key, header label)` columns of the TopN result table.
pub const TOPN_COLUMNS: &[(&str, &str)] = &[("bitmapID", "Bitmap ID"), ("count", "Count")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopNParams {
    pub frame: String,
    pub n: u64,
    pub filter_frame: Option<String>,
    pub filter_row_id: Option<String>,
}

impl Default for TopNParams {
    fn default() -> Self {
        Self {
            frame: crate::frames::CAB_TYPE.to_string(),
            n: DEFAULT_TOPN_N,
            filter_frame: None,
            filter_row_id: None,
        }
    }
}

impl TopNParams {
    /// The filter bitmap, if both a filter frame and a usable row id were given.
    pub fn filter(&self) -> Option<String> {
        let frame = self.filter_frame.as_deref().map(str::trim).filter(|f| !f.is_empty())?;
        let row_id = self.filter_row_id.as_deref().and_then(selectable_row_id)?;
        Some(pql::bitmap(frame, row_id))
    }

    /// A filter frame was chosen but the row id text is not a row id.
    /// A blank row id only means the filter is not filled in yet.
    pub fn invalid_filter_row_id(&self) -> Option<String> {
        self.filter_frame.as_deref().map(str::trim).filter(|f| !f.is_empty())?;
        let row_id = self.filter_row_id.as_deref().map(str::trim).filter(|r| !r.is_empty())?;
        match selectable_row_id(row_id) {
            Some(_) => None,
            None => Some(row_id.to_string()),
        }
    }

    pub fn to_pql(&self) -> String {
        let n = self.n.clamp(1, MAX_TOPN_N);
        pql::top_n(self.frame.trim(), n, self.filter().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_top_n() {
        let params = TopNParams { frame: "pickup_day".to_string(), n: 7, ..Default::default() };
        assert_eq!(params.to_pql(), "TopN(frame='pickup_day', n=7)");
    }

    #[test]
    fn test_filtered_top_n() {
        let params = TopNParams {
            frame: "passenger_count".to_string(),
            n: 5,
            filter_frame: Some("pickup_year".to_string()),
            filter_row_id: Some("2014".to_string()),
        };
        assert_eq!(
            params.to_pql(),
            "TopN(Bitmap(frame='pickup_year',rowID=2014), frame='passenger_count', n=5)"
        );
    }

    #[test]
    fn test_incomplete_filter_is_dropped_and_n_clamped() {
        let params = TopNParams {
            frame: "cab_type".to_string(),
            n: 0,
            filter_frame: Some("pickup_year".to_string()),
            filter_row_id: Some("".to_string()),
        };
        assert_eq!(params.to_pql(), "TopN(frame='cab_type', n=1)");
    }

    #[test]
    fn test_unusable_filter_row_id_is_reported() {
        let mut params = TopNParams {
            filter_frame: Some("pickup_year".to_string()),
            filter_row_id: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(params.invalid_filter_row_id(), Some("abc".to_string()));

        params.filter_row_id = Some(" 2014 ".to_string());
        assert_eq!(params.invalid_filter_row_id(), None);

        params.filter_row_id = Some("  ".to_string());
        assert_eq!(params.invalid_filter_row_id(), None);

        params.filter_frame = None;
        params.filter_row_id = Some("abc".to_string());
        assert_eq!(params.invalid_filter_row_id(), None);
    }

    #[test]
    fn test_topn_table_columns() {
        let labels = TOPN_COLUMNS.iter().map(|(_, label)| *label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Bitmap ID", "Count"]);
        let keys = TOPN_COLUMNS.iter().map(|(key, _)| *key).collect::<Vec<_>>();
        assert_eq!(keys, vec!["bitmapID", "count"]);
    }
}
