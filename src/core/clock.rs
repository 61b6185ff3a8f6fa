//! Wall-clock sources. Commands receive one explicitly instead of calling
//! `Local::now()` themselves, so tests can pin "now".

use chrono::{Local, NaiveDateTime, Timelike};

pub trait Clock {
    /// Current local time, second precision.
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
