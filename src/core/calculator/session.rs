//! Open/closed session replay of a user's timeline.

use crate::models::clock_event::ClockEvent;
use crate::models::event_kind::EventKind;
use crate::utils::time::hours_between;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Open(NaiveDateTime),
    Closed,
}

/// A completed work interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn hours(&self) -> f64 {
        hours_between(&self.start, &self.end)
    }
}

impl Session {
    /// State at `window_start`, derived from the last event recorded before it.
    /// A session left open is clipped to the window start.
    pub fn seed(last_known: Option<&ClockEvent>, window_start: NaiveDateTime) -> Self {
        match last_known.map(|e| e.kind) {
            Some(EventKind::ClockIn) => Session::Open(window_start),
            Some(EventKind::ClockOut) | None => Session::Closed,
        }
    }

    /// Apply one event. An interval is emitted only when an open session closes.
    /// Clock-in while open keeps the earlier start; clock-out while closed is ignored.
    pub fn step(self, ev: &ClockEvent) -> (Session, Option<Interval>) {
        match (self, ev.kind) {
            (Session::Closed, EventKind::ClockIn) => (Session::Open(ev.timestamp), None),
            (open @ Session::Open(_), EventKind::ClockIn) => (open, None),
            (Session::Open(start), EventKind::ClockOut) => (
                Session::Closed,
                Some(Interval {
                    start,
                    end: ev.timestamp,
                }),
            ),
            (Session::Closed, EventKind::ClockOut) => (Session::Closed, None),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Session::Open(_))
    }
}

/// Replay chronologically sorted events from `seed`.
/// Returns the completed intervals and the final state.
pub fn replay(seed: Session, events: &[ClockEvent]) -> (Vec<Interval>, Session) {
    let mut state = seed;
    let mut intervals = Vec::new();

    for ev in events {
        let (next, closed) = state.step(ev);
        if let Some(iv) = closed {
            intervals.push(iv);
        }
        state = next;
    }

    (intervals, state)
}
