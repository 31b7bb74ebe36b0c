//! Ad-hoc queries built by the page forms.

mod intersect;
pub use intersect::run_intersect_query;

mod topn;
pub use topn::run_topn_query;
