//! stechuhr library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (the weekly hours calculator lives in `core::calculator`).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::resolve_db_path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg),
        Commands::Users => cli::commands::users::handle(cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(cli, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Events => cli::commands::events::handle(cli, cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(cli, cfg),
        Commands::Redemption { .. } => cli::commands::redemption::handle(cli, cfg),
        Commands::Rating { .. } => cli::commands::rating::handle(cli, cfg),
        Commands::Archive { .. } => cli::commands::archive::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to every command
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_db_path(custom_db, &Config::config_dir())
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
