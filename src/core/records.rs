use crate::core::access::require_manager;
use crate::db::log::audit;
use crate::db::records::{insert_rating, insert_redemption, load_ratings, load_redemptions};
use crate::errors::{AppError, AppResult};
use crate::models::records::{Rating, Redemption};
use crate::models::user::User;
use chrono::NaiveDateTime;
use rusqlite::Connection;

pub struct RecordsLogic;

impl RecordsLogic {
    pub fn add_redemption(
        conn: &Connection,
        user: &User,
        item_name: &str,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let item = item_name.trim();
        if item.is_empty() {
            return Err(AppError::MissingField("item"));
        }

        let id = insert_redemption(conn, user.id, item, Some(now))?;
        audit(conn, "redemption", &user.username, item);
        Ok(id)
    }

    pub fn add_rating(
        conn: &Connection,
        user: &User,
        score: i64,
        comment: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let comment = comment.map(str::trim).filter(|c| !c.is_empty());
        let id = insert_rating(conn, user.id, score, comment, now)?;
        audit(conn, "rating", &user.username, &format!("rating={}", score));
        Ok(id)
    }

    pub fn list_redemptions(conn: &Connection, actor: &User) -> AppResult<Vec<Redemption>> {
        require_manager(actor, "redemption list")?;
        load_redemptions(conn)
    }

    pub fn list_ratings(conn: &Connection, actor: &User) -> AppResult<Vec<Rating>> {
        require_manager(actor, "rating list")?;
        load_ratings(conn)
    }
}
