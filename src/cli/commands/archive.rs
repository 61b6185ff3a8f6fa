use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::access::resolve_user;
use crate::core::archive::ArchiveLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Archive { before } = &cli.command {
        let cutoff =
            date::parse_date(before).ok_or_else(|| AppError::InvalidDate(before.to_string()))?;

        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_deref())?;
        let now = clock_for(cli)?.now();

        let moved = ArchiveLogic::apply(&pool.conn, &user, cutoff, now)?;
        success(format!(
            "Archived {} clock event(s) recorded before {}.",
            moved, cutoff
        ));
    }

    Ok(())
}
