//! Ride counts by (year, passenger count, distance), cut off once enough rides are covered.

use common::{
    frames::{DIST_MILES, PASSENGER_COUNT, PICKUP_YEAR},
    pql,
    render_mode::ResultRow,
};
use futures::StreamExt;
use serde::Serialize;

use crate::{
    api::predefined::{
        to_result_rows,
        year_passenger_counts::{FIRST_YEAR, LAST_YEAR},
    },
    db_utils::pilosa_utils::pilosa_count,
};

pub const PERCENT_THRESHOLD: f64 = 95.0;
const CONCURRENCY: usize = 32;
const MAX_PASSENGER_COUNT: u64 = 7;
const MAX_DISTANCE: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct YearPassengerDistanceRow {
    count: u64,
    distance: u64,
    passenger_count: u64,
    pickup_year: u64,
}

fn keys() -> impl Iterator<Item = YearPassengerDistanceRow> {
    (FIRST_YEAR..=LAST_YEAR).flat_map(|pickup_year| {
        (1..=MAX_PASSENGER_COUNT).flat_map(move |passenger_count| {
            (0..=MAX_DISTANCE).map(move |distance| YearPassengerDistanceRow {
                count: 0,
                distance,
                passenger_count,
                pickup_year,
            })
        })
    })
}

/// Share of all rides covered so far, in percent. Always 0 when the total is unknown.
fn coverage_percent(covered: u64, num_rides: u64) -> f64 {
    if num_rides == 0 {
        return 0.0;
    }
    100.0 * covered as f64 / num_rides as f64
}

fn sort_by_year_count(rows: &mut [YearPassengerDistanceRow]) {
    rows.sort_by_key(|r| (r.pickup_year, r.count));
}

async fn count_for_key(mut key: YearPassengerDistanceRow) -> anyhow::Result<YearPassengerDistanceRow> {
    let q = pql::count(&pql::intersect(&[
        pql::bitmap(PICKUP_YEAR, key.pickup_year),
        pql::bitmap(PASSENGER_COUNT, key.passenger_count),
        pql::bitmap(DIST_MILES, key.distance),
    ]));
    key.count = pilosa_count(&q).await?;
    Ok(key)
}

pub(super) async fn run(num_rides: u64) -> anyhow::Result<Vec<ResultRow>> {
    let mut results = futures::stream::iter(keys()).map(count_for_key).buffer_unordered(CONCURRENCY);

    let mut rows = Vec::new();
    let mut covered = 0;
    while let Some(row) = results.next().await {
        let row = row?;
        covered += row.count;
        rows.push(row);
        if coverage_percent(covered, num_rides) >= PERCENT_THRESHOLD {
            break;
        }
    }
    // remaining in-flight queries are dropped with the stream
    drop(results);
    tracing::info!("predefined/4: {} rows, {:.1}% of rides", rows.len(), coverage_percent(covered, num_rides));

    sort_by_year_count(&mut rows);
    to_result_rows(&rows)
}
