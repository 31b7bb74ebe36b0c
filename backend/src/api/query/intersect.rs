//! Count query for the intersect form.

use common::responses::{CountRow, IntersectResponse};

use crate::db_utils::{
    pilosa_utils::{pilosa_count, split_rejection},
    ride_count::get_ride_count,
};

/// Calls the intersect form can produce. Anything else, writes included, is refused.
const ALLOWED_CALLS: &[&str] = &["Count", "Intersect", "Union", "Bitmap"];

/// Only a single read-only `Count(...)` call is forwarded.
///
/// Pilosa runs every top-level call in a request, so the whole text must be
/// one call; nested call names must be in `ALLOWED_CALLS`. Quoted arguments
/// are skipped.
fn check_query(pql: &str) -> Result<(), String> {
    if pql.is_empty() {
        return Err("empty query".to_string());
    }
    if !pql.starts_with("Count(") {
        return Err("only Count(...) queries are accepted".to_string());
    }

    let mut depth = 0_usize;
    let mut quote = None::<char>;
    let mut word = String::new();
    for (i, c) in pql.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                word.clear();
            }
            '(' => {
                if !ALLOWED_CALLS.contains(&word.as_str()) {
                    return Err(format!("call not allowed: {word:?}"));
                }
                depth += 1;
                word.clear();
            }
            ')' => {
                if depth == 0 {
                    return Err("unbalanced parentheses".to_string());
                }
                depth -= 1;
                if depth == 0 && i + 1 != pql.len() {
                    return Err("only one top-level call is accepted".to_string());
                }
                word.clear();
            }
            c if c.is_alphanumeric() || c == '_' => word.push(c),
            _ => word.clear(),
        }
    }
    if depth != 0 || quote.is_some() {
        return Err("unbalanced parentheses".to_string());
    }
    Ok(())
}

pub async fn run_intersect_query(pql: String) -> anyhow::Result<IntersectResponse> {
    let pql = pql.trim();
    let mut response = IntersectResponse {
        num_profiles: get_ride_count().await?,
        ..Default::default()
    };
    if let Err(error) = check_query(pql) {
        response.error = Some(error);
        return Ok(response);
    }

    let start = std::time::Instant::now();
    let count = split_rejection(pilosa_count(pql).await)?;
    response.seconds = start.elapsed().as_secs_f64();
    match count {
        Ok(count) => response.rows.push(CountRow { count }),
        Err(error) => {
            tracing::warn!("intersect query rejected: {}", error);
            response.error = Some(error);
        }
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use common::{frames::FrameConfig, intersect_query::{Selection, build_intersect_query}};

    use super::*;

    #[test]
    fn test_check_query() {
        assert!(check_query("").is_err());
        assert!(check_query("SetBit(frame='cab_type', rowID=1, columnID=2)").is_err());
        assert!(check_query("Count(Intersect(\n  Bitmap(frame='cab_type',rowID=1)\n))").is_ok());
    }

    #[test]
    fn test_built_queries_pass() {
        let selection = Selection::new()
            .with("cab_type", vec!["0", "1"])
            .with("pickup_year", vec!["2013"]);
        let pql = build_intersect_query(&FrameConfig::taxi_default(), &selection);
        assert_eq!(check_query(&pql), Ok(()));
    }

    #[test]
    fn test_trailing_write_call_is_refused() {
        let pql = "Count(Bitmap(frame='cab_type',rowID=1))SetBit(frame='cab_type',rowID=1,columnID=99)";
        assert!(check_query(pql).is_err());
        let pql = "Count(Bitmap(frame='cab_type',rowID=1)) Count(Bitmap(frame='cab_type',rowID=2))";
        assert!(check_query(pql).is_err());
    }

    #[test]
    fn test_nested_write_call_is_refused() {
        let pql = "Count(Intersect(Bitmap(frame='cab_type',rowID=1), SetBit(frame='cab_type',rowID=1,columnID=99)))";
        assert_eq!(check_query(pql), Err("call not allowed: \"SetBit\"".to_string()));
    }

    #[test]
    fn test_unbalanced_or_quoted_parentheses() {
        assert!(check_query("Count(Bitmap(frame='cab_type',rowID=1)").is_err());
        assert!(check_query("Count(Bitmap(frame='cab)type',rowID=1))").is_ok());
        assert!(check_query("Count(Bitmap(frame='cab_type,rowID=1))").is_err());
    }
}
