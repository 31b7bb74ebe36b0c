//! Extra axum routes mounted next to the web app.

pub mod query_routes;
