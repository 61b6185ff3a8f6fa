use crate::core::calculator::{PairingPolicy, WeekMatch, WeeklyHoursCalculator};
use crate::errors::AppResult;
use crate::models::user::User;
use crate::utils::formatting::round_hours;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

/// Weekly total as shown to the user (rounded for display).
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub username: String,
    pub iso_year: i32,
    pub iso_week: u32,
    pub match_by: WeekMatch,
    pub pairing: PairingPolicy,
    pub hours: f64,
}

impl WeeklyReport {
    /// Run `calc` for `user` and label the result with the policies it used.
    pub fn build(
        calc: &WeeklyHoursCalculator<'_>,
        user: &User,
        now: NaiveDateTime,
        decimals: u32,
    ) -> AppResult<Self> {
        let hours = calc.compute_weekly_hours(user.id, now)?;
        let week = now.date().iso_week();

        Ok(Self {
            username: user.username.clone(),
            iso_year: week.year(),
            iso_week: week.week(),
            match_by: calc.match_by(),
            pairing: calc.pairing(),
            hours: round_hours(hours, decimals),
        })
    }
}
