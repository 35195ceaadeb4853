use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::CodingSession;
use crate::utils::time::{TIMESTAMP_FORMAT, format_duration, parse_duration, parse_timestamp};
use chrono::{NaiveDateTime, TimeDelta};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub const SESSIONS_TABLE: &str = "CodeTrackerTable";

const SELECT_COLUMNS: &str = "SELECT Id, StartTime, EndTime, Duration FROM CodeTrackerTable";

pub struct SessionStore<'c> {
    conn: &'c Connection,
}

fn conversion_error(idx: usize, column: &'static str, value: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        rusqlite::types::Type::Text,
        Box::new(AppError::CorruptValue { column, value }),
    )
}

pub fn map_session(row: &Row) -> rusqlite::Result<CodingSession> {
    let start_str: String = row.get("StartTime")?;
    let end_str: String = row.get("EndTime")?;
    let duration_str: Option<String> = row.get("Duration")?;

    let start_time =
        parse_timestamp(&start_str).ok_or_else(|| conversion_error(1, "StartTime", start_str))?;
    let end_time =
        parse_timestamp(&end_str).ok_or_else(|| conversion_error(2, "EndTime", end_str))?;

    // Duration is nullable in the schema: fall back to the timestamps
    let duration = match duration_str {
        Some(d) => parse_duration(&d).ok_or_else(|| conversion_error(3, "Duration", d))?,
        None => SessionStore::calculate_duration(start_time, end_time),
    };

    Ok(CodingSession {
        id: row.get("Id")?,
        start_time,
        end_time,
        duration,
    })
}

impl<'c> SessionStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Pure helper: `end - start`, sign not checked.
    pub fn calculate_duration(start: NaiveDateTime, end: NaiveDateTime) -> TimeDelta {
        end - start
    }

    /// Sessions whose start timestamp falls in the `"yyyy-MM"` month.
    pub fn get_sessions_for_month(&self, year_month: &str) -> AppResult<Vec<CodingSession>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE strftime('%Y-%m', StartTime) = ?1 ORDER BY Id ASC"
        ))?;

        let rows = stmt.query_map([year_month], map_session)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn count(&self) -> AppResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM CodeTrackerTable", [], |row| row.get(0))?;
        Ok(n)
    }
}

impl RecordStore for SessionStore<'_> {
    type Record = CodingSession;
    const KIND: &'static str = "session";

    fn get_all_records(&self) -> AppResult<Vec<CodingSession>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY Id ASC"))?;

        let rows = stmt.query_map([], map_session)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<CodingSession>> {
        let session = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE Id = ?1"),
                [id],
                map_session,
            )
            .optional()?;
        Ok(session)
    }

    fn add(&self, session: &CodingSession) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO CodeTrackerTable (StartTime, EndTime, Duration)
             VALUES (?1, ?2, ?3)",
            params![
                session.start_time.format(TIMESTAMP_FORMAT).to_string(),
                session.end_time.format(TIMESTAMP_FORMAT).to_string(),
                format_duration(session.duration),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, session: &CodingSession) -> WriteOutcome {
        WriteOutcome::from_affected(self.conn.execute(
            "UPDATE CodeTrackerTable
             SET StartTime = ?1, EndTime = ?2, Duration = ?3
             WHERE Id = ?4",
            params![
                session.start_time.format(TIMESTAMP_FORMAT).to_string(),
                session.end_time.format(TIMESTAMP_FORMAT).to_string(),
                format_duration(session.duration),
                session.id,
            ],
        ))
    }

    fn delete(&self, id: i64) -> WriteOutcome {
        WriteOutcome::from_affected(
            self.conn
                .execute("DELETE FROM CodeTrackerTable WHERE Id = ?1", [id]),
        )
    }
}
