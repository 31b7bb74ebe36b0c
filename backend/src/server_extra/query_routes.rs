//! JSON GET routes: `query`, `query/topn`, `predefined/{id}` and `version`.

use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{predefined::PredefinedQuery, topn_query::TopNParams};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{
    predefined::run_predefined_query,
    query::{run_intersect_query, run_topn_query},
    version::get_version_info,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntersectParams {
    pub pql: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn json_or_error<T: Serialize>(route: &str, result: anyhow::Result<T>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            tracing::error!("{}: request failed: {:#?}", route, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn query(Query(params): Query<IntersectParams>) -> Response {
    info!("query: {}", params.pql);
    json_or_error("query", run_intersect_query(params.pql).await)
}

pub async fn query_topn(Query(params): Query<TopNParams>) -> Response {
    info!("query/topn: {:?}", params);
    json_or_error("query/topn", run_topn_query(params).await)
}

pub async fn predefined(Path(id): Path<String>) -> Response {
    let Some(query) = id.trim().parse::<u8>().ok().and_then(PredefinedQuery::from_id) else {
        return error_response(StatusCode::NOT_FOUND, format!("no predefined query {id}"));
    };
    info!("predefined/{}", id);
    json_or_error("predefined", run_predefined_query(query).await)
}

pub async fn version() -> Response {
    json_or_error("version", get_version_info().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_predefined_is_not_found() {
        let response = predefined(Path("9".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "no predefined query 9");
    }

    #[tokio::test]
    async fn test_unparsable_predefined_id_answers_json_error() {
        for id in ["abc", "300", "-1"] {
            let response = predefined(Path(id.to_string())).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(body_json(response).await["error"], format!("no predefined query {id}"));
        }
    }

    #[tokio::test]
    async fn test_failed_request_answers_json_error() {
        let response = json_or_error::<u64>("query", Err(anyhow::anyhow!("connection refused")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "connection refused");
    }
}
