//! JSON response models returned by the demo server.

use serde::{Deserialize, Serialize};

use crate::render_mode::ResultRow;

fn is_error_set(error: &Option<String>) -> bool {
    error.as_deref().is_some_and(|e| !e.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CountRow {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntersectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub seconds: f64,
    pub rows: Vec<CountRow>,
    #[serde(rename = "numProfiles")]
    pub num_profiles: u64,
}

impl IntersectResponse {
    pub fn has_error(&self) -> bool {
        is_error_set(&self.error)
    }

    pub fn count(&self) -> Option<u64> {
        self.rows.first().map(|r| r.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TopNRow {
    #[serde(rename = "bitmapID")]
    pub bitmap_id: u64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TopNResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub query: String,
    pub seconds: f64,
    #[serde(rename = "numProfiles")]
    pub num_profiles: u64,
    pub rows: Vec<TopNRow>,
}

impl TopNResponse {
    pub fn has_error(&self) -> bool {
        is_error_set(&self.error)
    }

    /// The rows as generic result rows, for the renderer.
    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.rows
            .iter()
            .map(|row| {
                let mut r = ResultRow::new();
                r.insert("bitmapID".to_string(), row.bitmap_id.into());
                r.insert("count".to_string(), row.count.into());
                r
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredefinedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub description: String,
    pub seconds: f64,
    #[serde(rename = "numProfiles")]
    pub num_profiles: u64,
    #[serde(rename = "percentageThreshold", skip_serializing_if = "Option::is_none")]
    pub percentage_threshold: Option<f64>,
    pub rows: Vec<ResultRow>,
}

impl PredefinedResponse {
    pub fn has_error(&self) -> bool {
        is_error_set(&self.error)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VersionInfo {
    pub pilosaversion: String,
    pub demoversion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_response_wire_names() {
        let r: IntersectResponse =
            serde_json::from_str(r#"{"seconds": 0.25, "rows": [{"count": 42}], "numProfiles": 1000}"#).unwrap();
        assert!(!r.has_error());
        assert_eq!(r.count(), Some(42));
        assert_eq!(r.num_profiles, 1000);
    }

    #[test]
    fn test_empty_error_string_is_not_an_error() {
        let r: PredefinedResponse = serde_json::from_str(r#"{"error": "", "rows": []}"#).unwrap();
        assert!(!r.has_error());
        let r: PredefinedResponse = serde_json::from_str(r#"{"error": "bad frame"}"#).unwrap();
        assert!(r.has_error());
        assert!(r.rows.is_empty());
    }

    #[test]
    fn test_topn_result_rows_keep_key_order() {
        let r = TopNResponse {
            rows: vec![TopNRow { bitmap_id: 3, count: 9 }],
            ..Default::default()
        };
        let rows = r.result_rows();
        let keys = rows[0].keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec!["bitmapID", "count"]);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["rows"][0]["bitmapID"], 3);
        assert!(json.get("error").is_none());
    }
}
