//! Text formatting for result summaries.

/// `1234567` -> `"1,234,567"`.
pub fn add_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Seconds truncated to five characters, e.g. `0.0123456` -> `"0.012 sec"`.
pub fn format_latency(seconds: f64) -> String {
    let text = seconds.to_string();
    let short = text.chars().take(5).collect::<String>();
    format!("{short} sec")
}

pub fn format_rides(count: u64) -> String {
    format!("{} rides", add_commas(count))
}

pub fn format_total_rides(total: u64) -> String {
    format!("{} total rides", add_commas(total))
}
