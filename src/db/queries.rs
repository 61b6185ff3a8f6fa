//! Clock event queries.

use crate::core::calculator::source::{EventSource, WeekFilter};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str = "id, user_id, event_type, timestamp, iso_year, iso_week";

/// Sort/compare key for stored timestamps. Older rows may use a `T`
/// separator or fractional seconds, which must not order as raw text.
pub(crate) const TS_KEY: &str = "datetime(timestamp)";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

/// Map a `clock_events` row. Unknown kinds and unparseable timestamps are errors.
pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("event_type")?;
    let kind = EventKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidEventType(kind_str.clone())))?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_timestamp(&ts_str).map_err(|e| conversion_error(3, e))?;

    Ok(ClockEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        timestamp,
        iso_year: row.get("iso_year")?,
        iso_week: row.get("iso_week")?,
    })
}

fn collect_events(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append a clock event. Returns the new row id.
pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO clock_events (event_type, timestamp, iso_year, iso_week, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.kind.to_db_str(),
            format_timestamp(&ev.timestamp),
            ev.iso_year,
            ev.iso_week,
            ev.user_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All events of a user, oldest first.
pub fn load_events_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<ClockEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM clock_events
         WHERE user_id = ?1
         ORDER BY {TS_KEY} ASC, id ASC"
    );
    collect_events(conn, &sql, [user_id])
}

/// Most recent event of a user, if any.
pub fn last_event_for_user(conn: &Connection, user_id: i64) -> AppResult<Option<ClockEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM clock_events
         WHERE user_id = ?1
         ORDER BY {TS_KEY} DESC, id DESC
         LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([user_id], map_row).optional()?)
}

/// `EventSource` backed by the `clock_events` table.
pub struct SqliteEvents<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteEvents<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl EventSource for SqliteEvents<'_> {
    fn fetch_week_events(&self, user_id: i64, filter: WeekFilter) -> AppResult<Vec<ClockEvent>> {
        match filter.iso_year {
            None => {
                let sql = format!(
                    "SELECT {EVENT_COLUMNS} FROM clock_events
                     WHERE user_id = ?1 AND iso_week = ?2"
                );
                collect_events(self.conn, &sql, params![user_id, filter.iso_week])
            }
            Some(year) => {
                let sql = format!(
                    "SELECT {EVENT_COLUMNS} FROM clock_events
                     WHERE user_id = ?1 AND iso_week = ?2 AND iso_year = ?3"
                );
                collect_events(self.conn, &sql, params![user_id, filter.iso_week, year])
            }
        }
    }

    fn last_event_before(
        &self,
        user_id: i64,
        before: NaiveDateTime,
    ) -> AppResult<Option<ClockEvent>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM clock_events
             WHERE user_id = ?1 AND {TS_KEY} < ?2
             ORDER BY {TS_KEY} DESC, id DESC
             LIMIT 1"
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        Ok(stmt
            .query_row(params![user_id, format_timestamp(&before)], map_row)
            .optional()?)
    }
}
