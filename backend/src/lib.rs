//! Demo server logic: queries against the Pilosa taxi index and the JSON HTTP routes.

pub mod config;
pub mod db_utils;
pub mod api;
pub mod server_extra;
