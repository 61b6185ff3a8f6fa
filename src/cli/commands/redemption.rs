use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands, RedemptionAction};
use crate::config::Config;
use crate::core::access::resolve_user;
use crate::core::records::RecordsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;
use crate::utils::time::format_timestamp;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Redemption { action } = &cli.command {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_deref())?;

        match action {
            RedemptionAction::Add { item } => {
                let now = clock_for(cli)?.now();
                RecordsLogic::add_redemption(&pool.conn, &user, item, now)?;
                success(format!("{} redeemed '{}'.", user.username, item.trim()));
            }
            RedemptionAction::List => {
                let rows = RecordsLogic::list_redemptions(&pool.conn, &user)?;
                if rows.is_empty() {
                    info("No redemptions.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "USER", "ITEM", "REDEEMED AT"]);
                for r in &rows {
                    table.add_row(vec![
                        r.id.to_string(),
                        r.username.clone(),
                        r.item_name.clone(),
                        r.redemption_time
                            .as_ref()
                            .map(format_timestamp)
                            .unwrap_or_else(|| "--".to_string()),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
