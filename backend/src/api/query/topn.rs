//! TopN over one frame, optionally filtered by a bitmap.

use common::{
    frames::FrameConfig,
    responses::{TopNResponse, TopNRow},
    topn_query::TopNParams,
};

use crate::{
    config::get_backend_config,
    db_utils::{
        pilosa_utils::{pilosa_count_items, split_rejection},
        ride_count::get_ride_count,
    },
};

fn unknown_frame(frames: &FrameConfig, params: &TopNParams) -> Option<String> {
    let filter_frame = params.filter_frame.as_deref().map(str::trim).filter(|f| !f.is_empty());
    [Some(params.frame.trim()), filter_frame]
        .into_iter()
        .flatten()
        .find(|frame| !frames.contains(frame))
        .map(|frame| frame.to_string())
}

pub async fn run_topn_query(params: TopNParams) -> anyhow::Result<TopNResponse> {
    let query = params.to_pql();
    let mut response = TopNResponse {
        query: query.clone(),
        num_profiles: get_ride_count().await?,
        ..Default::default()
    };
    if let Some(frame) = unknown_frame(&get_backend_config().frames, &params) {
        response.error = Some(format!("unknown frame: {frame}"));
        return Ok(response);
    }
    if let Some(row_id) = params.invalid_filter_row_id() {
        response.error = Some(format!("invalid filter row id: {row_id}"));
        return Ok(response);
    }

    let start = std::time::Instant::now();
    let items = split_rejection(pilosa_count_items(&query).await)?;
    response.seconds = start.elapsed().as_secs_f64();
    match items {
        Ok(items) => {
            response.rows = items
                .into_iter()
                .map(|item| TopNRow { bitmap_id: item.id, count: item.count })
                .collect();
        }
        Err(error) => {
            tracing::warn!("TopN query rejected: {}", error);
            response.error = Some(error);
        }
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_frame() {
        let frames = FrameConfig::taxi_default();
        let mut params = TopNParams { frame: "cab_type".to_string(), ..Default::default() };
        assert_eq!(unknown_frame(&frames, &params), None);

        params.filter_frame = Some("  ".to_string());
        assert_eq!(unknown_frame(&frames, &params), None);

        params.filter_frame = Some("cab_type') Bitmap(".to_string());
        assert_eq!(unknown_frame(&frames, &params), Some("cab_type') Bitmap(".to_string()));

        params.frame = "nope".to_string();
        assert_eq!(unknown_frame(&frames, &params), Some("nope".to_string()));
    }
}
