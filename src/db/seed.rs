//! Synthetic rows written the first time the sessions table is created.

use crate::db::sessions::SessionStore;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::CodingSession;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;

pub const SEED_ROWS: usize = 10;

/// First instant a seeded session may start at.
pub fn seed_range_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Last instant (inclusive) a seeded session may start at.
pub fn seed_range_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Uniform instant in `[from, to]`, at whole-second resolution.
pub fn random_start<R: Rng + ?Sized>(rng: &mut R, from: NaiveDateTime, to: NaiveDateTime) -> NaiveDateTime {
    let total = (to - from).num_seconds().max(0);
    from + TimeDelta::seconds(rng.random_range(0..=total))
}

/// `start` plus a random offset of up to 23:59:59, so the end never
/// precedes the start and the session never exceeds a day.
pub fn random_end<R: Rng + ?Sized>(rng: &mut R, start: NaiveDateTime) -> NaiveDateTime {
    let hours = rng.random_range(0..24);
    let minutes = rng.random_range(0..60);
    let seconds = rng.random_range(0..60);
    start + TimeDelta::hours(hours) + TimeDelta::minutes(minutes) + TimeDelta::seconds(seconds)
}

pub fn random_session<R: Rng + ?Sized>(rng: &mut R) -> CodingSession {
    let start = random_start(rng, seed_range_start(), seed_range_end());
    let end = random_end(rng, start);
    CodingSession::new(start, end)
}

/// Insert `count` random sessions; returns how many were written.
pub fn seed_sessions(store: &SessionStore, count: usize) -> AppResult<usize> {
    let mut rng = rand::rng();
    for _ in 0..count {
        store.add(&random_session(&mut rng))?;
    }
    Ok(count)
}
