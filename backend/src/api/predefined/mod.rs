//! The canned reports behind `predefined/<id>`.

use common::{
    predefined::PredefinedQuery,
    render_mode::ResultRow,
    responses::PredefinedResponse,
};
use serde::Serialize;

use crate::db_utils::{pilosa_utils::split_rejection, ride_count::get_ride_count};

mod cab_type_counts;
mod avg_cost_per_passenger;
mod year_passenger_counts;
mod year_passenger_distance;
mod month_day_heat_map;

pub use year_passenger_distance::PERCENT_THRESHOLD;

pub(crate) fn to_result_rows<T: Serialize>(rows: &[T]) -> anyhow::Result<Vec<ResultRow>> {
    rows.iter()
        .map(|row| match serde_json::to_value(row)? {
            serde_json::Value::Object(obj) => Ok(obj),
            other => anyhow::bail!("report row is not an object: {}", other),
        })
        .collect()
}

pub async fn run_predefined_query(query: PredefinedQuery) -> anyhow::Result<PredefinedResponse> {
    let num_profiles = get_ride_count().await?;
    let mut response = PredefinedResponse {
        description: query.description().to_string(),
        num_profiles,
        ..Default::default()
    };

    let start = std::time::Instant::now();
    let rows = match query {
        PredefinedQuery::CabTypeCounts => cab_type_counts::run().await,
        PredefinedQuery::AvgCostPerPassengerCount => avg_cost_per_passenger::run().await,
        PredefinedQuery::YearPassengerCounts => year_passenger_counts::run().await,
        PredefinedQuery::YearPassengerDistanceCounts => {
            response.percentage_threshold = Some(PERCENT_THRESHOLD);
            year_passenger_distance::run(num_profiles).await
        }
        PredefinedQuery::MonthDayHeatMap => month_day_heat_map::run().await,
    };
    let rows = split_rejection(rows)?;
    response.seconds = start.elapsed().as_secs_f64();
    tracing::info!("predefined/{} took {:.3}s", query.id(), response.seconds);

    match rows {
        Ok(rows) => response.rows = rows,
        Err(error) => {
            tracing::warn!("predefined/{} rejected: {}", query.id(), error);
            response.error = Some(error);
        }
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        count: u64,
        year: u64,
    }

    #[test]
    fn test_to_result_rows_keeps_field_order() {
        let rows = to_result_rows(&[Row { count: 4, year: 2013 }]).unwrap();
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["count", "year"]);
        assert_eq!(rows[0]["year"], 2013);
    }

    #[test]
    fn test_to_result_rows_rejects_scalars() {
        assert!(to_result_rows(&[1_u64]).is_err());
    }
}
