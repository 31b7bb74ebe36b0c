//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod frames;
pub mod pql;
pub mod intersect_query;
pub mod topn_query;
pub mod predefined;
pub mod responses;
pub mod render_mode;
pub mod render_plan;
pub mod chart_layout;
pub mod display_format;
pub mod request_sequence;
