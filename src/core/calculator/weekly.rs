use super::adjacent::adjacent_gap_hours;
use super::policy::{PairingPolicy, WeekMatch};
use super::session::{Session, replay};
use super::source::{EventSource, WeekFilter};
use crate::config::Config;
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::utils::date::iso_week_start;
use chrono::NaiveDateTime;

/// Total worked hours of one user for the ISO week of a given instant.
pub struct WeeklyHoursCalculator<'a> {
    source: &'a dyn EventSource,
    match_by: WeekMatch,
    pairing: PairingPolicy,
}

impl<'a> WeeklyHoursCalculator<'a> {
    pub fn new(source: &'a dyn EventSource) -> Self {
        Self {
            source,
            match_by: WeekMatch::default(),
            pairing: PairingPolicy::default(),
        }
    }

    pub fn from_config(source: &'a dyn EventSource, cfg: &Config) -> Self {
        Self::new(source).with_policy(cfg.week_match, cfg.pairing)
    }

    pub fn with_policy(mut self, match_by: WeekMatch, pairing: PairingPolicy) -> Self {
        self.match_by = match_by;
        self.pairing = pairing;
        self
    }

    pub fn match_by(&self) -> WeekMatch {
        self.match_by
    }

    pub fn pairing(&self) -> PairingPolicy {
        self.pairing
    }

    /// Unrounded hours; 0.0 when the week has no events.
    pub fn compute_weekly_hours(&self, user_id: i64, now: NaiveDateTime) -> AppResult<f64> {
        let filter = WeekFilter::for_instant(&now, self.match_by);
        let mut events = self.source.fetch_week_events(user_id, filter)?;

        if events.is_empty() {
            return Ok(0.0);
        }

        match self.pairing {
            PairingPolicy::Adjacent => Ok(adjacent_gap_hours(&events)),
            PairingPolicy::Session => {
                events.sort_by_key(|e| (e.timestamp, e.id));

                // With week-number matching the slice may hold several ISO
                // years; each week is replayed from its own last known state.
                let mut total = 0.0;
                let same_week = |a: &ClockEvent, b: &ClockEvent| {
                    (a.iso_year, a.iso_week) == (b.iso_year, b.iso_week)
                };
                for week in events.chunk_by(same_week) {
                    let week_start = iso_week_start(&week[0].timestamp);
                    let last_known = self.source.last_event_before(user_id, week_start)?;
                    let seed = Session::seed(last_known.as_ref(), week_start);
                    let (intervals, _) = replay(seed, week);
                    total += intervals.iter().map(|iv| iv.hours()).sum::<f64>();
                }
                Ok(total)
            }
        }
    }

    pub fn compute_current_week(&self, user_id: i64, clock: &dyn Clock) -> AppResult<f64> {
        self.compute_weekly_hours(user_id, clock.now())
    }
}
