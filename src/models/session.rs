use super::entry::Entry;
use crate::utils::time::{TIMESTAMP_FORMAT, format_duration};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodingSession {
    pub id: i64,
    #[serde(serialize_with = "ser_timestamp")]
    pub start_time: NaiveDateTime, // ⇔ CodeTrackerTable.StartTime (TEXT "YYYY-MM-DD HH:MM:SS")
    #[serde(serialize_with = "ser_timestamp")]
    pub end_time: NaiveDateTime, // ⇔ CodeTrackerTable.EndTime
    #[serde(serialize_with = "ser_duration")]
    pub duration: TimeDelta, // ⇔ CodeTrackerTable.Duration (TEXT "HH:MM:SS")
}

impl CodingSession {
    /// Build an unsaved session, deriving the duration from the two timestamps.
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            id: 0,
            start_time,
            end_time,
            duration: end_time - start_time,
        }
    }

    /// Replace both timestamps and recompute the stored duration.
    pub fn set_times(&mut self, start_time: NaiveDateTime, end_time: NaiveDateTime) {
        self.start_time = start_time;
        self.end_time = end_time;
        self.duration = end_time - start_time;
    }

    pub fn start_str(&self) -> String {
        self.start_time.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn duration_str(&self) -> String {
        format_duration(self.duration)
    }

    /// Duration in fractional hours (negative spans stay negative).
    pub fn total_hours(&self) -> f64 {
        self.duration.num_seconds() as f64 / 3600.0
    }

    /// `"yyyy-MM"` key of the month the session started in.
    pub fn month_key(&self) -> String {
        self.start_time.format("%Y-%m").to_string()
    }
}

impl Entry for CodingSession {
    fn id(&self) -> i64 {
        self.id
    }
}

fn ser_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}

fn ser_duration<S: Serializer>(d: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_duration(*d))
}
