//! Operations shared by the session and goal tables.

use crate::errors::AppResult;
use crate::models::Entry;
use std::collections::HashSet;

/// Result of a write that must not abort the caller.
///
/// Storage errors are caught at the store boundary and reported here; the
/// caller shows the message and goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    /// No row with that id; the write was a no-op.
    NotFound,
    Failed(String),
}

impl WriteOutcome {
    pub fn from_affected(res: rusqlite::Result<usize>) -> Self {
        match res {
            Ok(0) => WriteOutcome::NotFound,
            Ok(_) => WriteOutcome::Applied,
            Err(e) => WriteOutcome::Failed(e.to_string()),
        }
    }

    /// `Applied` and `NotFound` are both successful outcomes.
    pub fn is_success(&self) -> bool {
        !matches!(self, WriteOutcome::Failed(_))
    }
}

/// CRUD capability implemented by each table store.
pub trait RecordStore {
    type Record: Entry;

    /// Short name used in messages and in the audit log ("session", "goal").
    const KIND: &'static str;

    /// Every row, ordered by id.
    fn get_all_records(&self) -> AppResult<Vec<Self::Record>>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Self::Record>>;

    /// Insert a new row and return the id assigned by SQLite.
    fn add(&self, record: &Self::Record) -> AppResult<i64>;

    /// Replace the row with the same id.
    fn update(&self, record: &Self::Record) -> WriteOutcome;

    fn delete(&self, id: i64) -> WriteOutcome;

    /// Ids currently stored, as strings (the shape `validate_id` expects).
    fn known_ids(&self) -> AppResult<HashSet<String>> {
        Ok(self
            .get_all_records()?
            .iter()
            .map(|r| r.id().to_string())
            .collect())
    }
}
