//! Time utilities: timestamp text format, duration formatting/parsing, rounding.

use chrono::{NaiveDateTime, TimeDelta};

/// Text representation of timestamps in the tracker tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

/// Format a span as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and a negative span gets a leading `-`.
pub fn format_duration(d: TimeDelta) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let s = total.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

/// Parse the `HH:MM:SS` text written by [`format_duration`].
/// `HH:MM` is accepted too (seconds default to zero).
pub fn parse_duration(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let h = parts[0].parse::<i64>().ok()?;
    let m = parts[1].parse::<i64>().ok()?;
    let sec = match parts.get(2) {
        Some(p) => p.parse::<i64>().ok()?,
        None => 0,
    };
    if h < 0 || !(0..60).contains(&m) || !(0..60).contains(&sec) {
        return None;
    }

    let total = h * 3600 + m * 60 + sec;
    Some(TimeDelta::seconds(if negative { -total } else { total }))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
