pub mod config;
pub mod db;
pub mod goal;
pub mod init;
pub mod log;
pub mod menu;
pub mod session;

use crate::core::validate::{Validated, is_exit_token, validate_id};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};

/// Resolve an `--id` argument against the ids stored in `store`.
/// `Ok(None)` when the exit token was given.
pub(crate) fn resolve_id<S: RecordStore>(store: &S, raw: &str) -> AppResult<Option<i64>> {
    match validate_id(raw, &store.known_ids()?) {
        Validated::Exit => Ok(None),
        Validated::Value(id) => Ok(Some(id)),
        Validated::Invalid(_) => match raw.trim().parse::<i64>() {
            Ok(id) => Err(AppError::NotFound { kind: S::KIND, id }),
            Err(_) => Err(AppError::InvalidId(raw.to_string())),
        },
    }
}

/// Parse an `--id` argument for deletion, where a missing row is not an error.
pub(crate) fn parse_id(raw: &str) -> AppResult<Option<i64>> {
    if is_exit_token(raw) {
        return Ok(None);
    }
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}
