//! Read access to stored clock events, as seen by the calculator.

use super::policy::WeekMatch;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use chrono::{Datelike, NaiveDateTime};

/// ISO week bucket used to select events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekFilter {
    pub iso_week: u32,
    /// `None` matches the week number in every year.
    pub iso_year: Option<i32>,
}

impl WeekFilter {
    pub fn for_instant(now: &NaiveDateTime, match_by: WeekMatch) -> Self {
        let week = now.date().iso_week();
        Self {
            iso_week: week.week(),
            iso_year: match match_by {
                WeekMatch::WeekNumber => None,
                WeekMatch::WeekAndYear => Some(week.year()),
            },
        }
    }
}

/// Storage collaborator of the weekly hours calculator.
pub trait EventSource {
    /// All events of `user_id` in the given week bucket. No ordering is promised.
    fn fetch_week_events(&self, user_id: i64, filter: WeekFilter) -> AppResult<Vec<ClockEvent>>;

    /// The user's latest event strictly before `before`, if any.
    fn last_event_before(
        &self,
        user_id: i64,
        before: NaiveDateTime,
    ) -> AppResult<Option<ClockEvent>>;
}
