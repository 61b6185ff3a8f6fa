use crate::db::queries::last_event_for_user;
use crate::db::users::load_users;
use crate::errors::AppResult;
use crate::models::user_status::{ClockStatus, UserStatus};
use rusqlite::Connection;

pub struct StatusLogic;

impl StatusLogic {
    /// Every user with the status implied by their latest event.
    pub fn board(conn: &Connection) -> AppResult<Vec<UserStatus>> {
        let mut out = Vec::new();
        for user in load_users(conn)? {
            let last = last_event_for_user(conn, user.id)?;
            out.push(UserStatus {
                status: ClockStatus::from_last_event(last.map(|e| e.kind)),
                user,
            });
        }
        Ok(out)
    }
}
