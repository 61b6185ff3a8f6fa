use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::pad_right;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let board = StatusLogic::board(&pool.conn)?;

    if board.is_empty() {
        info("No users registered.");
        return Ok(());
    }

    let name_w = board
        .iter()
        .map(|s| s.user.username.chars().count())
        .max()
        .unwrap_or(8);

    for entry in &board {
        println!(
            "{} {} {}{}{}",
            pad_right(&entry.user.username, name_w),
            pad_right(&entry.user.display_name(), 24),
            color_for_status(entry.status),
            entry.status.label(),
            RESET
        );
    }

    Ok(())
}
