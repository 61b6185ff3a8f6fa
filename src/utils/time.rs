//! Timestamp utilities: parsing and formatting stored timestamps, hour fractions.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage format of every timestamp column (second precision).
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TS_FORMAT).to_string()
}

/// Parse a stored or user supplied timestamp.
/// Accepts `YYYY-MM-DD HH:MM:SS`, the ISO `T` separator and fractional seconds
/// (older rows were written with microseconds).
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    for fmt in [TS_FORMAT, "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    Err(AppError::InvalidTimestamp(s.to_string()))
}

/// Elapsed time between two instants as fractional hours (seconds / 3600).
pub fn hours_between(start: &NaiveDateTime, end: &NaiveDateTime) -> f64 {
    (*end - *start).num_seconds() as f64 / 3600.0
}
