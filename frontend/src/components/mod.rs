pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod copy_button;
pub mod result_view;
pub mod query_panels;
