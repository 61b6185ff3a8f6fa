use crate::core::calculator::{PairingPolicy, WeekMatch};
use crate::models::role::Role;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stechuhr
/// Time clock for a small team, backed by SQLite
#[derive(Parser)]
#[command(
    name = "stechuhr",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time clock: clock in/out, weekly hours, redemptions and ratings on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting user (username)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the clock to "YYYY-MM-DD HH:MM:SS"
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

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

    /// Register a new user
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long = "confirm-password")]
        confirm_password: String,

        #[arg(long = "first-name")]
        first_name: String,

        #[arg(long = "last-name")]
        last_name: String,

        #[arg(long, value_enum, default_value = "employee")]
        role: Role,
    },

    /// List registered users
    Users,

    /// Clock in or out as --user
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Show who is currently clocked in
    Status,

    /// List the clock events of --user and this week's total
    Events,

    /// Worked hours of --user for the current ISO week
    Hours {
        #[arg(long = "match-by", value_enum, help = "Override week matching")]
        match_by: Option<WeekMatch>,

        #[arg(long = "pairing", value_enum, help = "Override the pairing policy")]
        pairing: Option<PairingPolicy>,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Record or list redemptions
    Redemption {
        #[command(subcommand)]
        action: RedemptionAction,
    },

    /// Record or list ratings
    Rating {
        #[command(subcommand)]
        action: RatingAction,
    },

    /// Move clock events older than a date into the archive (management only)
    Archive {
        #[arg(long, value_name = "YYYY-MM-DD")]
        before: String,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub enum ClockAction {
    /// Clock in
    In,
    /// Clock out
    Out,
}

#[derive(Subcommand)]
pub enum RedemptionAction {
    /// Redeem an item
    Add {
        #[arg(long)]
        item: String,
    },
    /// List all redemptions (management only)
    List,
}

#[derive(Subcommand)]
pub enum RatingAction {
    /// Leave a rating
    Add {
        #[arg(long, allow_negative_numbers = true)]
        score: i64,

        #[arg(long)]
        comment: Option<String>,
    },
    /// List all ratings (management only)
    List,
}
