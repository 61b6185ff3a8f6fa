use crate::db::archive::count_archived;
use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::TS_KEY;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    Ok(pool.conn.query_row(&sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) SCHEMA
    //
    let pending = pending_migrations(&pool.conn)?;
    if !pending.is_empty() {
        println!(
            "{}• Schema:{} {}{} pending migration(s), run `db --migrate`{}\n",
            CYAN,
            RESET,
            YELLOW,
            pending.len(),
            RESET
        );
        return Ok(());
    }
    println!("{}• Schema:{} up to date", CYAN, RESET);

    //
    // 3) ROW COUNTS
    //
    let users = count(pool, "users")?;
    let events = count(pool, "clock_events")?;
    let archived = count_archived(&pool.conn)?;
    let redemptions = count(pool, "redemptions")?;
    let ratings = count(pool, "ratings")?;

    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);
    println!("{}• Clock events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);
    println!("{}• Archived events:{} {}", CYAN, RESET, archived);
    println!("{}• Redemptions:{} {}", CYAN, RESET, redemptions);
    println!("{}• Ratings:{} {}", CYAN, RESET, ratings);

    //
    // 4) EVENT RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            &format!("SELECT MIN({TS_KEY}), MAX({TS_KEY}) FROM clock_events"),
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    println!("{}• Event range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
