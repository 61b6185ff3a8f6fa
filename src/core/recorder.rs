use crate::db::log::audit;
use crate::db::queries::insert_event;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::models::user::User;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Appends clock-in / clock-out events.
pub struct ClockLogic;

impl ClockLogic {
    /// Store a new event at `now`. Alternation of in/out is not checked:
    /// clocking in twice in a row stores two clock-ins.
    pub fn record(
        conn: &Connection,
        user: &User,
        kind: EventKind,
        now: NaiveDateTime,
    ) -> AppResult<ClockEvent> {
        let mut ev = ClockEvent::new(user.id, kind, now);
        ev.id = insert_event(conn, &ev)?;

        let op = match kind {
            EventKind::ClockIn => "clock_in",
            EventKind::ClockOut => "clock_out",
        };
        audit(conn, op, &user.username, &ev.timestamp_str());

        Ok(ev)
    }
}
