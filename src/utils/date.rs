use chrono::NaiveDate;

/// Validate a `"yyyy-MM"` key, returning the first day of that month.
pub fn parse_month_key(key: &str) -> Option<NaiveDate> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", key.trim()), "%Y-%m-%d").ok()?;
    // reject "2024-9" and friends: the key must round-trip
    if first.format("%Y-%m").to_string() == key.trim() {
        Some(first)
    } else {
        None
    }
}
