use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands, RatingAction};
use crate::config::Config;
use crate::core::access::resolve_user;
use crate::core::records::RecordsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;
use crate::utils::time::format_timestamp;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Rating { action } = &cli.command {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_deref())?;

        match action {
            RatingAction::Add { score, comment } => {
                let now = clock_for(cli)?.now();
                RecordsLogic::add_rating(&pool.conn, &user, *score, comment.as_deref(), now)?;
                success(format!("{} rated {}.", user.username, score));
            }
            RatingAction::List => {
                let rows = RecordsLogic::list_ratings(&pool.conn, &user)?;
                if rows.is_empty() {
                    info("No ratings.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "USER", "RATING", "COMMENT", "AT"]);
                for r in &rows {
                    table.add_row(vec![
                        r.id.to_string(),
                        r.username.clone(),
                        r.rating.to_string(),
                        r.comment.clone().unwrap_or_default(),
                        format_timestamp(&r.timestamp),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
