use clap::{Parser, Subcommand};

/// Command-line interface definition for codetracker
/// CLI application to log coding sessions and monthly goals with SQLite
#[derive(Parser)]
#[command(
    name = "codetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple coding-time tracker: log coding sessions and follow monthly goals using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Database maintenance (integrity check, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage coding sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Manage monthly coding goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Start the interactive menu
    Menu,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// List sessions
    List {
        #[arg(long, value_name = "YYYY-MM", help = "Only sessions started in this month")]
        month: Option<String>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Add a coding session
    Add {
        /// Start date (MM-DD-YYYY, DD-MM-YYYY or YYYY-MM-DD)
        #[arg(long = "start-date")]
        start_date: String,

        /// Start time (HH:MM, HH:MM:SS or hh:mm AM/PM)
        #[arg(long = "start-time")]
        start_time: String,

        #[arg(long = "end-date", help = "End date (same formats as --start-date)")]
        end_date: String,

        #[arg(long = "end-time", help = "End time (same formats as --start-time)")]
        end_time: String,
    },

    /// Edit start/end date or time of a session
    Edit {
        #[arg(long, allow_hyphen_values = true)]
        id: String,

        #[arg(long = "start-date")]
        start_date: Option<String>,

        #[arg(long = "start-time")]
        start_time: Option<String>,

        #[arg(long = "end-date")]
        end_date: Option<String>,

        #[arg(long = "end-time")]
        end_time: Option<String>,
    },

    /// Delete a session by id
    Del {
        #[arg(long, allow_hyphen_values = true)]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// List goals
    List {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Add a monthly goal
    Add {
        /// Month name (e.g. September) or number 1-12
        #[arg(long)]
        month: String,

        #[arg(long)]
        year: String,

        /// Target hours (at least 1)
        #[arg(long, allow_hyphen_values = true)]
        hours: String,
    },

    /// Edit month, year or hours of a goal
    Edit {
        #[arg(long, allow_hyphen_values = true)]
        id: String,

        #[arg(long)]
        month: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        hours: Option<String>,
    },

    /// Delete a goal by id
    Del {
        #[arg(long, allow_hyphen_values = true)]
        id: String,
    },

    /// Show progress towards a goal
    Progress {
        #[arg(long, allow_hyphen_values = true)]
        id: String,
    },
}
