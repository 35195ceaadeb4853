//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupt value in column {column}: {value}")]
    CorruptValue { column: &'static str, value: String },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Invalid number of hours: {0}")]
    InvalidHours(String),

    #[error("Unrecognized month name: {0}")]
    InvalidMonth(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    // ---------------------------
    // Session rules
    // ---------------------------
    #[error("End time {end} is before start time {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("Coding session lasts {hours:.2}h, longer than the {max}h limit")]
    SessionTooLong { hours: f64, max: i64 },

    #[error("No {kind} found with id {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
