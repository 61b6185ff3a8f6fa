use super::event_kind::EventKind;
use crate::utils::time::format_timestamp;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i64,
    pub user_id: i64,            // ⇔ clock_events.user_id
    pub kind: EventKind,         // ⇔ clock_events.event_type
    pub timestamp: NaiveDateTime, // ⇔ clock_events.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub iso_year: i32,           // ⇔ clock_events.iso_year
    pub iso_week: u32,           // ⇔ clock_events.iso_week
}

impl ClockEvent {
    /// Build a not-yet-persisted event (`id = 0`); the ISO week columns are
    /// derived from the timestamp.
    pub fn new(user_id: i64, kind: EventKind, timestamp: NaiveDateTime) -> Self {
        let week = timestamp.date().iso_week();
        Self {
            id: 0,
            user_id,
            kind,
            timestamp,
            iso_year: week.year(),
            iso_week: week.week(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}
