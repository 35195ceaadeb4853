#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use codetracker::config::Config;
use codetracker::context::AppContext;
use codetracker::db::initialize::init_db;
use codetracker::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("codetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_codetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh database with tables created; `seed` controls the sample sessions.
pub fn open_test_pool(name: &str, seed: bool) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn, seed).expect("init db");
    pool
}

/// Context over a fresh, unseeded database (only the default goal).
pub fn test_context(name: &str) -> AppContext {
    let cfg = Config {
        database: setup_test_db(name),
        seed_sample_data: false,
        ..Config::default()
    };
    AppContext::open(cfg).expect("open context")
}

/// `init` in test mode, so the user's config file is never touched.
pub fn init_test_db(db_path: &str) {
    ct().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_session(db_path: &str, start_date: &str, start_time: &str, end_date: &str, end_time: &str) {
    ct().args([
        "--db",
        db_path,
        "session",
        "add",
        "--start-date",
        start_date,
        "--start-time",
        start_time,
        "--end-date",
        end_date,
        "--end-time",
        end_time,
    ])
    .assert()
    .success();
}
