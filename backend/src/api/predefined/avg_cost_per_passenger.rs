//! Mean total amount per ride for each passenger count.

use common::{
    frames::{PASSENGER_COUNT, TOTAL_AMOUNT_DOLLARS},
    pql,
    render_mode::ResultRow,
};
use serde::Serialize;

use crate::{
    api::predefined::to_result_rows,
    db_utils::pilosa_utils::{CountItem, pilosa_count_items},
};

const MAX_PASSENGER_COUNT: u64 = 8;
const AMOUNT_BUCKETS: u64 = 1000;

#[derive(Debug, Serialize)]
struct AvgCostRow {
    passenger_count: u64,
    avg_cost: Option<f64>,
}

/// Weighted mean of the dollar buckets; `None` when there are no rides.
fn average_cost(items: &[CountItem]) -> Option<f64> {
    let num_rides = items.iter().map(|i| i.count).sum::<u64>();
    if num_rides == 0 {
        return None;
    }
    let total_amount = items.iter().map(|i| i.id * i.count).sum::<u64>();
    Some(total_amount as f64 / num_rides as f64)
}

async fn avg_cost_for_passenger_count(passenger_count: u64) -> anyhow::Result<AvgCostRow> {
    let filter = pql::bitmap(PASSENGER_COUNT, passenger_count);
    let t0 = std::time::Instant::now();
    let items = pilosa_count_items(&pql::top_n(TOTAL_AMOUNT_DOLLARS, AMOUNT_BUCKETS, Some(&filter))).await?;
    tracing::debug!("query time for passenger count {}: {:.3}s", passenger_count, t0.elapsed().as_secs_f64());
    Ok(AvgCostRow { passenger_count, avg_cost: average_cost(&items) })
}

pub(super) async fn run() -> anyhow::Result<Vec<ResultRow>> {
    let rows = futures::future::try_join_all((1..=MAX_PASSENGER_COUNT).map(avg_cost_for_passenger_count)).await?;
    to_result_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_cost() {
        let items = [CountItem { id: 10, count: 3 }, CountItem { id: 20, count: 1 }];
        assert_eq!(average_cost(&items), Some(12.5));
        assert_eq!(average_cost(&[]), None);
    }
}
