use crate::db::queries::TS_KEY;
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use rusqlite::{Connection, params};

/// Move every clock event older than `cutoff` into `archived_clock_events`.
/// Runs in one transaction; returns the number of events moved.
pub fn archive_events_before(
    conn: &Connection,
    cutoff: NaiveDateTime,
    archived_at: NaiveDateTime,
) -> AppResult<usize> {
    let cutoff_str = format_timestamp(&cutoff);
    let tx = conn.unchecked_transaction()?;

    let copied = tx.execute(
        &format!(
            "INSERT INTO archived_clock_events
                 (original_id, event_type, timestamp, iso_year, iso_week, user_id, archived_at)
             SELECT id, event_type, timestamp, iso_year, iso_week, user_id, ?2
             FROM clock_events
             WHERE {TS_KEY} < ?1
             ORDER BY id ASC"
        ),
        params![cutoff_str, format_timestamp(&archived_at)],
    )?;

    let deleted = tx.execute(
        &format!("DELETE FROM clock_events WHERE {TS_KEY} < ?1"),
        params![cutoff_str],
    )?;

    // dropping the transaction rolls both statements back
    if copied != deleted {
        return Err(AppError::Archive(format!(
            "copied {} event(s) but deleted {}",
            copied, deleted
        )));
    }

    tx.commit()?;
    Ok(deleted)
}

pub fn count_archived(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM archived_clock_events", [], |row| {
        row.get(0)
    })?)
}
