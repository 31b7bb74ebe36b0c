use common::{frames::CAB_TYPE, pql};
use tokio::sync::OnceCell;

use crate::db_utils::pilosa_utils::pilosa_count;

const CAB_TYPES: u64 = 3;

/// Total number of rides in the index, summed over the cab types.
///
/// Computed on first use and kept for the lifetime of the process; a failed
/// attempt is not cached.
pub async fn get_ride_count() -> anyhow::Result<u64> {
    static RIDE_COUNT: OnceCell<u64> = OnceCell::const_new();
    let count = RIDE_COUNT
        .get_or_try_init(|| async {
            let mut total = 0;
            for cab_type in 0..CAB_TYPES {
                total += pilosa_count(&pql::count(&pql::bitmap(CAB_TYPE, cab_type))).await?;
            }
            tracing::info!("ride count: {}", total);
            anyhow::Ok(total)
        })
        .await?;
    Ok(*count)
}
