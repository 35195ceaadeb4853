//! codetracker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, &AppContext::open(cfg)?),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &AppContext::open(cfg)?),
        Commands::Session { action } => {
            cli::commands::session::handle(action, &AppContext::open(cfg)?)
        }
        Commands::Goal { action } => cli::commands::goal::handle(action, &AppContext::open(cfg)?),
        Commands::Menu => cli::commands::menu::handle(&AppContext::open(cfg)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db overrides the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, cfg)
}
