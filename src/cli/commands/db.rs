use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

fn file_len(path: &str) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn apply_migrations(pool: &DbPool) -> AppResult<()> {
    let applied = run_pending_migrations(&pool.conn)?;
    if applied.is_empty() {
        info("Schema already current, nothing to migrate.");
        return Ok(());
    }
    for version in &applied {
        println!("  + {}", version);
    }
    success(format!("Schema migrated: {} migration(s) applied.", applied.len()));
    Ok(())
}

fn check_integrity(pool: &DbPool) -> AppResult<()> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if verdict == "ok" {
        success("Clock database is consistent (integrity_check: ok).");
    } else {
        warning(format!("Clock database reports damage: {}", verdict));
    }
    Ok(())
}

fn compact(pool: &DbPool, path: &str) -> AppResult<()> {
    let before = file_len(path);
    pool.conn.execute_batch("VACUUM;")?;
    success(format!(
        "Clock database compacted: {} -> {} bytes.",
        before,
        file_len(path)
    ));
    Ok(())
}

/// `db`: schema upgrades, file statistics, integrity and compaction.
/// Flags combine and run in that order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // opened raw so that --info can report pending migrations
    let pool = DbPool::open_raw(&cfg.database)?;

    if *migrate {
        apply_migrations(&pool)?;
    }
    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }
    if *check {
        check_integrity(&pool)?;
    }
    if *vacuum {
        compact(&pool, &cfg.database)?;
    }

    Ok(())
}
