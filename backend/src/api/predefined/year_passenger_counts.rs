use common::{
    frames::{PASSENGER_COUNT, PICKUP_YEAR},
    pql,
    render_mode::ResultRow,
};
use serde::Serialize;

use crate::{api::predefined::to_result_rows, db_utils::pilosa_utils::pilosa_count_items};

pub(super) const FIRST_YEAR: u64 = 2009;
pub(super) const LAST_YEAR: u64 = 2016;

#[derive(Debug, Serialize)]
struct YearPassengerRow {
    count: u64,
    year: u64,
    passenger_count: u64,
}

async fn passenger_counts_for_year(year: u64) -> anyhow::Result<Vec<YearPassengerRow>> {
    let filter = pql::bitmap(PICKUP_YEAR, year);
    let items = pilosa_count_items(&pql::top_n(PASSENGER_COUNT, 10, Some(&filter))).await?;
    Ok(items
        .into_iter()
        .map(|item| YearPassengerRow { count: item.count, year, passenger_count: item.id })
        .collect())
}

pub(super) async fn run() -> anyhow::Result<Vec<ResultRow>> {
    let per_year = futures::future::try_join_all((FIRST_YEAR..=LAST_YEAR).map(passenger_counts_for_year)).await?;
    let rows = per_year.into_iter().flatten().collect::<Vec<_>>();
    to_result_rows(&rows)
}
