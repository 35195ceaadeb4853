use crate::core::records::{add_entry, delete_entry, update_entry};
use crate::db::pool::DbPool;
use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::CodingSession;
use crate::utils::time::TIMESTAMP_FORMAT;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Components of a session edit; `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionEdit {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
}

impl SessionEdit {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.start_time.is_none()
            && self.end_date.is_none()
            && self.end_time.is_none()
    }
}

/// Input-time rule: the end is not before the start and the session lasts
/// at most `max_hours`.
pub fn check_session_bounds(
    start: NaiveDateTime,
    end: NaiveDateTime,
    max_hours: i64,
) -> AppResult<()> {
    if end < start {
        return Err(AppError::EndBeforeStart {
            start: start.format(TIMESTAMP_FORMAT).to_string(),
            end: end.format(TIMESTAMP_FORMAT).to_string(),
        });
    }

    let span = (end - start).num_seconds();
    if span > max_hours.saturating_mul(3600) {
        return Err(AppError::SessionTooLong {
            hours: span as f64 / 3600.0,
            max: max_hours,
        });
    }

    Ok(())
}

/// High-level business logic for coding sessions.
pub struct SessionLogic;

impl SessionLogic {
    /// Build an unsaved session from validated parts.
    pub fn build(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
        max_hours: i64,
    ) -> AppResult<CodingSession> {
        let start = start_date.and_time(start_time);
        let end = end_date.and_time(end_time);
        check_session_bounds(start, end, max_hours)?;
        Ok(CodingSession::new(start, end))
    }

    /// Apply `edit` to a copy of `session`, recomputing the duration.
    pub fn apply_edit(
        session: &CodingSession,
        edit: &SessionEdit,
        max_hours: i64,
    ) -> AppResult<CodingSession> {
        let start = edit
            .start_date
            .unwrap_or(session.start_time.date())
            .and_time(edit.start_time.unwrap_or(session.start_time.time()));
        let end = edit
            .end_date
            .unwrap_or(session.end_time.date())
            .and_time(edit.end_time.unwrap_or(session.end_time.time()));

        check_session_bounds(start, end, max_hours)?;

        let mut updated = session.clone();
        updated.set_times(start, end);
        Ok(updated)
    }

    /// Store a new session; returns it with its assigned id.
    pub fn add(pool: &DbPool, session: &CodingSession) -> AppResult<CodingSession> {
        let message = format!(
            "Added session {} → {} ({})",
            session.start_str(),
            session.end_str(),
            session.duration_str()
        );
        let id = add_entry(&pool.conn, &pool.sessions(), session, &message)?;

        let mut stored = session.clone();
        stored.id = id;
        Ok(stored)
    }

    /// Load, edit and write back session `id`.
    pub fn edit(
        pool: &DbPool,
        id: i64,
        edit: &SessionEdit,
        max_hours: i64,
    ) -> AppResult<CodingSession> {
        let store = pool.sessions();
        let current = store.get_by_id(id)?.ok_or(AppError::NotFound {
            kind: "session",
            id,
        })?;

        let updated = Self::apply_edit(&current, edit, max_hours)?;
        Self::save(pool, &updated)?;
        Ok(updated)
    }

    /// Write back an already edited session.
    pub fn save(pool: &DbPool, session: &CodingSession) -> AppResult<()> {
        let message = format!(
            "Session now {} → {} ({})",
            session.start_str(),
            session.end_str(),
            session.duration_str()
        );
        match update_entry(&pool.conn, &pool.sessions(), session, &message) {
            WriteOutcome::Applied => Ok(()),
            WriteOutcome::NotFound => Err(AppError::NotFound {
                kind: "session",
                id: session.id,
            }),
            WriteOutcome::Failed(e) => Err(AppError::WriteFailed(e)),
        }
    }

    pub fn delete(pool: &DbPool, id: i64) -> WriteOutcome {
        delete_entry(&pool.conn, &pool.sessions(), id)
    }
}
