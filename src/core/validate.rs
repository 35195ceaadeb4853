//! Input validation shared by the interactive menu and the one-shot commands.
//!
//! Every validator answers with a [`Validated`]: the user asked to leave
//! (`Exit`), the input is usable (`Value`), or it must be entered again
//! (`Invalid`, with a message for the prompt).

use crate::errors::{AppError, AppResult};
use crate::models::MonthName;
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::collections::HashSet;

/// Token that aborts any prompt.
pub const EXIT_TOKEN: &str = "e";

/// Accepted date layouts, tried in order: MM-dd-yyyy, dd-MM-yyyy, yyyy-MM-dd.
pub const DATE_FORMATS: [&str; 3] = ["%m-%d-%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Accepted time-of-day layouts: 24h with/without seconds, 12h with AM/PM.
pub const TIME_FORMATS: [&str; 6] = [
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M:%S%p",
    "%I:%M%p",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    Exit,
    Value(T),
    Invalid(String),
}

impl<T> Validated<T> {
    /// `Exit` and `Value` both count as a successful answer.
    pub fn is_successful(&self) -> bool {
        !matches!(self, Validated::Invalid(_))
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Validated::Exit)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Validated::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Turn the answer of a one-shot command line argument into a result:
    /// `None` when the user typed the exit token.
    pub fn into_result(self, err: impl FnOnce(String) -> AppError) -> AppResult<Option<T>> {
        match self {
            Validated::Exit => Ok(None),
            Validated::Value(v) => Ok(Some(v)),
            Validated::Invalid(msg) => Err(err(msg)),
        }
    }
}

pub fn is_exit_token(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_TOKEN)
}

pub fn validate_date_or_exit(input: &str, formats: &[&str]) -> Validated<NaiveDate> {
    if is_exit_token(input) {
        return Validated::Exit;
    }

    let input = input.trim();
    for fmt in formats {
        // exact match only: "2024-9-1" parses with %m/%d but is not accepted
        if let Ok(d) = NaiveDate::parse_from_str(input, fmt)
            && d.format(fmt).to_string() == input
        {
            return Validated::Value(d);
        }
    }

    Validated::Invalid(format!(
        "Invalid date format '{}'. Use MM-DD-YYYY, DD-MM-YYYY or YYYY-MM-DD.",
        input
    ))
}

pub fn validate_time_or_exit(input: &str) -> Validated<NaiveTime> {
    if is_exit_token(input) {
        return Validated::Exit;
    }

    let input = input.trim();
    if !input.is_empty() {
        for fmt in TIME_FORMATS {
            // chrono reads ":60" as a leap second, which SQLite date functions reject
            if let Ok(t) = NaiveTime::parse_from_str(input, fmt)
                && t.nanosecond() < 1_000_000_000
            {
                return Validated::Value(t);
            }
        }
    }

    Validated::Invalid(format!(
        "Invalid time format '{}'. Use HH:MM, HH:MM:SS or hh:mm AM/PM.",
        input
    ))
}

/// `known_ids` are the ids currently stored in the table being edited.
pub fn validate_id(id: &str, known_ids: &HashSet<String>) -> Validated<i64> {
    let id = id.trim();
    if id.is_empty() {
        return Validated::Invalid("An id is required.".into());
    }
    if is_exit_token(id) {
        return Validated::Exit;
    }

    match id.parse::<i64>() {
        Ok(n) if known_ids.contains(id) => Validated::Value(n),
        _ => Validated::Invalid(format!("No record with id '{}'.", id)),
    }
}

pub fn validate_hours(value: i64) -> Validated<i64> {
    if value >= 1 {
        Validated::Value(value)
    } else {
        Validated::Invalid(format!(
            "Invalid number of hours ({}), it must be at least 1.",
            value
        ))
    }
}

pub fn validate_hours_input(input: &str) -> Validated<i64> {
    if is_exit_token(input) {
        return Validated::Exit;
    }
    match input.trim().parse::<i64>() {
        Ok(h) => validate_hours(h),
        Err(_) => Validated::Invalid(format!("'{}' is not a whole number of hours.", input.trim())),
    }
}

/// Month name (any case) or number 1..=12, normalized to the canonical name.
pub fn validate_month_or_exit(input: &str) -> Validated<MonthName> {
    if is_exit_token(input) {
        return Validated::Exit;
    }

    let input = input.trim();
    let month = MonthName::from_input(input)
        .or_else(|| input.parse::<u32>().ok().and_then(MonthName::from_number));

    match month {
        Some(m) => Validated::Value(m),
        None => Validated::Invalid(format!(
            "Unknown month '{}'. Use a full English month name or 1-12.",
            input
        )),
    }
}

pub fn validate_year_or_exit(input: &str) -> Validated<i32> {
    if is_exit_token(input) {
        return Validated::Exit;
    }
    match input.trim().parse::<i32>() {
        Ok(y) if (1..=9999).contains(&y) => Validated::Value(y),
        _ => Validated::Invalid(format!("Invalid year '{}'.", input.trim())),
    }
}

/// Build the membership set expected by [`validate_id`].
pub fn id_set<I: IntoIterator<Item = i64>>(ids: I) -> HashSet<String> {
    ids.into_iter().map(|i| i.to_string()).collect()
}
