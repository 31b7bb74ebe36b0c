use common::{
    frames::{PICKUP_DAY, PICKUP_MONTH},
    pql,
    render_mode::ResultRow,
};
use serde::Serialize;

use crate::{api::predefined::to_result_rows, db_utils::pilosa_utils::pilosa_count_items};

const MONTHS: u64 = 12;
const MAX_DAYS: u64 = 31;

/// `x`/`y` keys so the page draws it as a 2-D histogram.
#[derive(Debug, Serialize)]
struct HeatMapRow {
    x: u64,
    y: u64,
    count: u64,
}

async fn days_for_month(month: u64) -> anyhow::Result<Vec<HeatMapRow>> {
    let filter = pql::bitmap(PICKUP_MONTH, month);
    let items = pilosa_count_items(&pql::top_n(PICKUP_DAY, MAX_DAYS, Some(&filter))).await?;
    Ok(items.into_iter().map(|item| HeatMapRow { x: month, y: item.id, count: item.count }).collect())
}

pub(super) async fn run() -> anyhow::Result<Vec<ResultRow>> {
    let per_month = futures::future::try_join_all((1..=MONTHS).map(days_for_month)).await?;
    let rows = per_month.into_iter().flatten().collect::<Vec<_>>();
    to_result_rows(&rows)
}
