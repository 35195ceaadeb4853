use crate::db::goals::{GOALS_TABLE, GoalStore};
use crate::db::log::ensure_log_table;
use crate::db::seed::{SEED_ROWS, seed_sessions};
use crate::db::sessions::{SESSIONS_TABLE, SessionStore};
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::CodingGoal;
use rusqlite::{Connection, OptionalExtension};

/// What `init_db` had to create on this run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub sessions_created: bool,
    pub goals_created: bool,
    pub seeded_sessions: usize,
}

impl InitReport {
    pub fn created_anything(&self) -> bool {
        self.sessions_created || self.goals_created
    }
}

pub fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn create_sessions_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS CodeTrackerTable (
            Id        INTEGER PRIMARY KEY AUTOINCREMENT,
            StartTime TEXT NOT NULL,
            EndTime   TEXT NOT NULL,
            Duration  TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_start ON CodeTrackerTable(StartTime);
        "#,
    )
}

fn create_goals_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS GoalsTrackerTable (
            Id        INTEGER PRIMARY KEY AUTOINCREMENT,
            GoalMonth TEXT NOT NULL,
            GoalYear  INTEGER NOT NULL,
            GoalHours TEXT NOT NULL
        );
        "#,
    )
}

/// Initialize the database.
///
/// Missing tables are created; a fresh sessions table receives the synthetic
/// rows (unless `seed_sample_data` is off) and a fresh goals table always
/// receives the default goal. Existing tables are left untouched.
pub fn init_db(conn: &Connection, seed_sample_data: bool) -> AppResult<InitReport> {
    let tx = conn.unchecked_transaction()?;
    let mut report = InitReport::default();

    ensure_log_table(&tx)?;

    if !table_exists(&tx, SESSIONS_TABLE)? {
        create_sessions_table(&tx)?;
        report.sessions_created = true;

        if seed_sample_data {
            report.seeded_sessions = seed_sessions(&SessionStore::new(&tx), SEED_ROWS)?;
        }
    }

    if !table_exists(&tx, GOALS_TABLE)? {
        create_goals_table(&tx)?;
        GoalStore::new(&tx).add(&CodingGoal::seed_default())?;
        report.goals_created = true;
    }

    tx.commit()?;
    Ok(report)
}
