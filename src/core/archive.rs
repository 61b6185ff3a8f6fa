use crate::core::access::require_manager;
use crate::db::archive::archive_events_before;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::user::User;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::Connection;

pub struct ArchiveLogic;

impl ArchiveLogic {
    /// Move clock events recorded before `before` (00:00) to the archive table.
    pub fn apply(
        conn: &Connection,
        actor: &User,
        before: NaiveDate,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        require_manager(actor, "archive")?;

        let cutoff = before.and_time(NaiveTime::MIN);
        let moved = archive_events_before(conn, cutoff, now)?;

        audit(
            conn,
            "archive",
            &before.to_string(),
            &format!("{} clock event(s) archived by {}", moved, actor.username),
        );
        Ok(moved)
    }
}
