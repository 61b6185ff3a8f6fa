use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday 00:00 of the ISO week containing `ts`.
pub fn iso_week_start(ts: &NaiveDateTime) -> NaiveDateTime {
    let date = ts.date();
    let offset = date.weekday().num_days_from_monday() as i64;
    (date - Duration::days(offset)).and_time(NaiveTime::MIN)
}

