//! SQLite connection wrapper (one connection for the whole CLI run).

use crate::db::{GoalStore, SessionStore};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    pub fn sessions(&self) -> SessionStore<'_> {
        SessionStore::new(&self.conn)
    }

    pub fn goals(&self) -> GoalStore<'_> {
        GoalStore::new(&self.conn)
    }
}
