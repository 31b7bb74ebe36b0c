//! Query operations behind the demo page.

pub mod query;
pub mod predefined;
pub mod version;
