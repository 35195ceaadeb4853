//! Everything a command needs, built once at startup and passed down.

use crate::config::Config;
use crate::db::initialize::{InitReport, init_db};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub struct AppContext {
    pub cfg: Config,
    pub pool: DbPool,
    /// Tables created (and seeded) while opening the store.
    pub init: InitReport,
}

impl AppContext {
    /// Open the configured database, creating and seeding missing tables.
    pub fn open(cfg: Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        let init = init_db(&pool.conn, cfg.seed_sample_data)?;
        Ok(Self { cfg, pool, init })
    }
}
