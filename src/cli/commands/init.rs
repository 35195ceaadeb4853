use crate::cli::parser::Cli;
use crate::config::Config;
use crate::context::AppContext;
use crate::db::log;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with its tables and starter rows
pub fn handle(cli: &Cli, mut cfg: Config) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    cfg.database = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing codetracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let ctx = AppContext::open(cfg)?;
    let report = &ctx.init;

    if report.sessions_created {
        println!(
            "✅ Created sessions table ({} sample sessions)",
            report.seeded_sessions
        );
    }
    if report.goals_created {
        println!("✅ Created goals table with a default goal");
    }
    if !report.created_anything() {
        println!("ℹ️  Tables already present, nothing to create");
    }

    log::ttlog_or_warn(
        &ctx.pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &ctx.cfg.database),
    );

    println!("🎉 codetracker initialization completed!");
    Ok(())
}
