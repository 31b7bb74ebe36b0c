use std::sync::OnceLock;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::get_backend_config;

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawPilosaResponse {
    pub results: Vec<Value>,
    pub error: Option<String>,
}

impl RawPilosaResponse {
    /// The first result, or the error pilosa reported for the query.
    pub fn into_single_result(self) -> Result<Value, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.results.into_iter().next().ok_or_else(|| "pilosa returned no results".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountItem {
    pub id: u64,
    pub count: u64,
}

/// A query pilosa refused to run; its message ends up in the response `error` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRejected {
    pub message: String,
}

impl std::fmt::Display for QueryRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "query rejected by pilosa: {}", self.message)
    }
}

impl std::error::Error for QueryRejected {}

/// Separates rejected queries (`Ok(Err(message))`) from every other failure.
pub fn split_rejection<T>(result: anyhow::Result<T>) -> anyhow::Result<Result<T, String>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(e) => match e.downcast_ref::<QueryRejected>() {
            Some(rejected) => Ok(Err(rejected.message.clone())),
            None => Err(e),
        },
    }
}

#[derive(Debug, Deserialize)]
struct RawVersion {
    version: String,
}

fn pilosa_http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(get_backend_config().request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("pilosa client: falling back to default client: {:#?}", e);
                reqwest::Client::new()
            })
    })
}

/// Sends one PQL query.
///
/// Query errors reported by pilosa come back in `RawPilosaResponse::error`;
/// only transport and decoding failures are returned as `Err`.
pub async fn pilosa_query(pql: &str) -> anyhow::Result<RawPilosaResponse> {
    let config = get_backend_config();
    let t0 = std::time::Instant::now();
    let response = pilosa_http_client()
        .post(config.query_url())
        .body(pql.to_string())
        .send()
        .await
        .context("sending query to pilosa")?;
    let status = response.status();
    let response_txt = response.text().await.context("reading pilosa response")?;
    tracing::debug!("PILOSA QUERY: {} ({}ms, status {})", pql, t0.elapsed().as_millis(), status);

    let parsed = serde_json::from_str::<RawPilosaResponse>(&response_txt);
    if status.is_client_error() || status.is_server_error() {
        if let Ok(response) = parsed {
            if response.error.is_some() {
                return Ok(response);
            }
        }
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let response = parsed.with_context(|| format!("decoding pilosa response: {response_txt}"))?;
    Ok(response)
}

pub async fn pilosa_single_result(pql: &str) -> anyhow::Result<Value> {
    let response = pilosa_query(pql).await?;
    let result = response.into_single_result().map_err(|message| QueryRejected { message })?;
    Ok(result)
}

pub async fn pilosa_count(pql: &str) -> anyhow::Result<u64> {
    result_as_count(&pilosa_single_result(pql).await?)
}

pub async fn pilosa_count_items(pql: &str) -> anyhow::Result<Vec<CountItem>> {
    result_as_count_items(pilosa_single_result(pql).await?)
}

pub async fn pilosa_version() -> anyhow::Result<String> {
    let config = get_backend_config();
    let response = pilosa_http_client()
        .get(config.version_url())
        .send()
        .await
        .context("requesting pilosa version")?
        .error_for_status()?;
    let version = response.json::<RawVersion>().await.context("decoding pilosa version")?;
    Ok(version.version)
}

/// `Count(...)` result: a bare number, or `{"count": n}`.
pub fn result_as_count(result: &Value) -> anyhow::Result<u64> {
    if let Some(n) = result.as_u64() {
        return Ok(n);
    }
    if let Some(n) = result.get("count").and_then(|c| c.as_u64()) {
        return Ok(n);
    }
    anyhow::bail!("expected a count result, got {}", result)
}

/// `TopN(...)` result: a list of pairs, or `{"pairs": [...]}`.
pub fn result_as_count_items(result: Value) -> anyhow::Result<Vec<CountItem>> {
    let pairs = match result {
        Value::Object(mut obj) => obj.remove("pairs").unwrap_or(Value::Array(vec![])),
        Value::Null => Value::Array(vec![]),
        other => other,
    };
    let items = serde_json::from_value::<Vec<CountItem>>(pairs).context("decoding TopN pairs")?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_count_result_shapes() {
        assert_eq!(result_as_count(&json!(17)).unwrap(), 17);
        assert_eq!(result_as_count(&json!({"count": 3})).unwrap(), 3);
        assert!(result_as_count(&json!("x")).is_err());
    }

    #[test]
    fn test_count_item_shapes() {
        let items = result_as_count_items(json!([{"id": 1, "count": 9}, {"id": 2, "key": "", "count": 4}])).unwrap();
        assert_eq!(items, vec![CountItem { id: 1, count: 9 }, CountItem { id: 2, count: 4 }]);

        let items = result_as_count_items(json!({"pairs": [{"id": 5, "count": 1}]})).unwrap();
        assert_eq!(items, vec![CountItem { id: 5, count: 1 }]);

        assert!(result_as_count_items(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_split_rejection() {
        let rejected: anyhow::Result<u64> = Err(QueryRejected { message: "bad".to_string() }.into());
        assert_eq!(split_rejection(rejected).unwrap(), Err("bad".to_string()));

        let ok: anyhow::Result<u64> = Ok(3);
        assert_eq!(split_rejection(ok).unwrap(), Ok(3));

        let transport: anyhow::Result<u64> = Err(anyhow::anyhow!("connection refused"));
        assert!(split_rejection(transport).is_err());
    }

    #[test]
    fn test_single_result_prefers_error() {
        let raw: RawPilosaResponse = serde_json::from_str(r#"{"error": "frame not found"}"#).unwrap();
        assert_eq!(raw.into_single_result(), Err("frame not found".to_string()));

        let raw: RawPilosaResponse = serde_json::from_str(r#"{"results": [12]}"#).unwrap();
        assert_eq!(raw.into_single_result(), Ok(json!(12)));

        assert!(RawPilosaResponse::default().into_single_result().is_err());
    }
}
