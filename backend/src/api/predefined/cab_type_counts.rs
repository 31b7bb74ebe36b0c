use common::{frames::CAB_TYPE, pql, render_mode::ResultRow};
use serde::Serialize;

use crate::{api::predefined::to_result_rows, db_utils::pilosa_utils::pilosa_count_items};

#[derive(Debug, Serialize)]
struct CabTypeRow {
    cab_type: u64,
    count: u64,
}

pub(super) async fn run() -> anyhow::Result<Vec<ResultRow>> {
    let items = pilosa_count_items(&pql::top_n(CAB_TYPE, 5, None)).await?;
    let rows = items
        .into_iter()
        .map(|item| CabTypeRow { cab_type: item.id, count: item.count })
        .collect::<Vec<_>>();
    to_result_rows(&rows)
}
