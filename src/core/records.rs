//! Writes shared by every record kind, with their audit log line.

use crate::db::log::ttlog_or_warn;
use crate::db::store::{RecordStore, WriteOutcome};
use crate::errors::AppResult;
use crate::models::Entry;
use rusqlite::Connection;

fn target<S: RecordStore>(id: i64) -> String {
    format!("{}#{}", S::KIND, id)
}

pub fn add_entry<S: RecordStore>(
    conn: &Connection,
    store: &S,
    record: &S::Record,
    message: &str,
) -> AppResult<i64> {
    let id = store.add(record)?;
    ttlog_or_warn(conn, &format!("{}_add", S::KIND), &target::<S>(id), message);
    Ok(id)
}

pub fn update_entry<S: RecordStore>(
    conn: &Connection,
    store: &S,
    record: &S::Record,
    message: &str,
) -> WriteOutcome {
    let outcome = store.update(record);
    if outcome == WriteOutcome::Applied {
        ttlog_or_warn(
            conn,
            &format!("{}_edit", S::KIND),
            &target::<S>(record.id()),
            message,
        );
    }
    outcome
}

/// Deleting an id that is not stored is a no-op reported as `NotFound`.
pub fn delete_entry<S: RecordStore>(conn: &Connection, store: &S, id: i64) -> WriteOutcome {
    let outcome = store.delete(id);
    if outcome == WriteOutcome::Applied {
        ttlog_or_warn(
            conn,
            &format!("{}_del", S::KIND),
            &target::<S>(id),
            &format!("Deleted {} {}", S::KIND, id),
        );
    }
    outcome
}
