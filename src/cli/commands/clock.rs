use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, ClockAction, Commands};
use crate::config::Config;
use crate::core::access::resolve_user;
use crate::core::recorder::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { action } = &cli.command {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_deref())?;
        let now = clock_for(cli)?.now();

        let kind = match action {
            ClockAction::In => EventKind::ClockIn,
            ClockAction::Out => EventKind::ClockOut,
        };

        let ev = ClockLogic::record(&pool.conn, &user, kind, now)?;

        let verb = if kind.is_in() { "in" } else { "out" };
        success(format!(
            "{} clocked {} at {}.",
            user.username,
            verb,
            ev.timestamp_str()
        ));
    }

    Ok(())
}
