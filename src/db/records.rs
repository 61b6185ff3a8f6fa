//! Redemption and rating queries.

use crate::errors::AppResult;
use crate::models::records::{Rating, Redemption};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row, params};

fn parse_ts_column(idx: usize, raw: &str) -> Result<NaiveDateTime> {
    parse_timestamp(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn map_redemption(row: &Row) -> Result<Redemption> {
    let raw: Option<String> = row.get("redemption_time")?;
    let redemption_time = match raw {
        Some(s) => Some(parse_ts_column(4, &s)?),
        None => None,
    };

    Ok(Redemption {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        username: row.get("username")?,
        item_name: row.get("item_name")?,
        redemption_time,
    })
}

fn map_rating(row: &Row) -> Result<Rating> {
    let raw: String = row.get("timestamp")?;

    Ok(Rating {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        username: row.get("username")?,
        rating: row.get("rating")?,
        comment: row.get("comment")?,
        timestamp: parse_ts_column(5, &raw)?,
    })
}

pub fn insert_redemption(
    conn: &Connection,
    user_id: i64,
    item_name: &str,
    redemption_time: Option<NaiveDateTime>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO redemptions (user_id, item_name, redemption_time) VALUES (?1, ?2, ?3)",
        params![user_id, item_name, redemption_time.as_ref().map(format_timestamp)],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_rating(
    conn: &Connection,
    user_id: i64,
    rating: i64,
    comment: Option<&str>,
    timestamp: NaiveDateTime,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO ratings (user_id, rating, comment, timestamp) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, rating, comment, format_timestamp(&timestamp)],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_redemptions(conn: &Connection) -> AppResult<Vec<Redemption>> {
    let mut stmt = conn.prepare_cached(
        "SELECT r.id, r.user_id, u.username, r.item_name, r.redemption_time
         FROM redemptions r JOIN users u ON u.id = r.user_id
         ORDER BY r.id ASC",
    )?;
    let rows = stmt.query_map([], map_redemption)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_ratings(conn: &Connection) -> AppResult<Vec<Rating>> {
    let mut stmt = conn.prepare_cached(
        "SELECT r.id, r.user_id, u.username, r.rating, r.comment, r.timestamp
         FROM ratings r JOIN users u ON u.id = r.user_id
         ORDER BY r.id ASC",
    )?;
    let rows = stmt.query_map([], map_rating)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
