use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which stored events belong to "this week".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum WeekMatch {
    /// ISO week number only. Events from the same week number of another
    /// year are included too; this is how totals have always been computed.
    #[default]
    WeekNumber,
    /// ISO week number and ISO year.
    WeekAndYear,
}

impl WeekMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekMatch::WeekNumber => "week_number",
            WeekMatch::WeekAndYear => "week_and_year",
        }
    }
}

/// How clock events are turned into worked time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PairingPolicy {
    /// Every clock-in adds the gap since the event right before it,
    /// whatever that event was.
    #[default]
    Adjacent,
    /// Explicit open/closed session per user; only closed sessions count.
    Session,
}

impl PairingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingPolicy::Adjacent => "adjacent",
            PairingPolicy::Session => "session",
        }
    }
}
