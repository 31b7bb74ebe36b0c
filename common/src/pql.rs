//! Single-line builders for the backend query language.

pub fn bitmap(frame: &str, row_id: u64) -> String {
    format!("Bitmap(frame='{frame}',rowID={row_id})")
}

pub fn union(children: &[String]) -> String {
    format!("Union({})", children.join(", "))
}

pub fn intersect(children: &[String]) -> String {
    format!("Intersect({})", children.join(", "))
}

pub fn count(child: &str) -> String {
    format!("Count({child})")
}

/// `TopN` over `frame`, optionally restricted to the rows matched by `filter`.
pub fn top_n(frame: &str, n: u64, filter: Option<&str>) -> String {
    match filter {
        Some(filter) => format!("TopN({filter}, frame='{frame}', n={n})"),
        None => format!("TopN(frame='{frame}', n={n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_of_intersect() {
        let q = count(&intersect(&[bitmap("pickup_year", 2013), bitmap("passenger_count", 2)]));
        assert_eq!(
            q,
            "Count(Intersect(Bitmap(frame='pickup_year',rowID=2013), Bitmap(frame='passenger_count',rowID=2)))"
        );
    }

    #[test]
    fn test_top_n_with_and_without_filter() {
        assert_eq!(top_n("cab_type", 5, None), "TopN(frame='cab_type', n=5)");
        let filter = bitmap("passenger_count", 3);
        assert_eq!(
            top_n("total_amount_dollars", 1000, Some(&filter)),
            "TopN(Bitmap(frame='passenger_count',rowID=3), frame='total_amount_dollars', n=1000)"
        );
    }
}
