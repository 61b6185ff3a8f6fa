//! Redemption and rating rows. Display-only records owned by a user.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Redemption {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub item_name: String,
    pub redemption_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub timestamp: NaiveDateTime,
}
