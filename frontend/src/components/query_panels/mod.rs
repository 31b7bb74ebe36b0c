//! The three query panels of the demo page.

pub mod intersect_panel;
pub mod topn_panel;
pub mod predefined_panel;
