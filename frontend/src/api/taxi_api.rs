//! Client API calls for the query endpoints.

use common::{
    responses::{IntersectResponse, PredefinedResponse, TopNResponse, VersionInfo},
    topn_query::TopNParams,
};
use dioxus::prelude::*;

#[server]
pub async fn run_intersect_query(pql: String) -> Result<IntersectResponse, ServerFnError> {
    let x = backend::api::query::run_intersect_query(pql).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn run_topn_query(params: TopNParams) -> Result<TopNResponse, ServerFnError> {
    let x = backend::api::query::run_topn_query(params).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn run_predefined_query(id: u8) -> Result<PredefinedResponse, ServerFnError> {
    let Some(query) = common::predefined::PredefinedQuery::from_id(id) else {
        return Err(ServerFnError::ServerError { message: format!("no predefined query {id}"), code: 404, details: None });
    };
    let x = backend::api::predefined::run_predefined_query(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_version_info() -> Result<VersionInfo, ServerFnError> {
    let x = backend::api::version::get_version_info().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
