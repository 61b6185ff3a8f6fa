//! Identity of the acting user and role checks.

use crate::db::users::find_user_by_username;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use rusqlite::Connection;

/// Resolve the `--user` given on the command line to a registered user.
pub fn resolve_user(conn: &Connection, username: Option<&str>) -> AppResult<User> {
    let name = username.map(str::trim).filter(|n| !n.is_empty()).ok_or(AppError::NoUser)?;

    find_user_by_username(conn, name)?.ok_or_else(|| AppError::UnknownUser(name.to_string()))
}

/// Redemptions, ratings and archiving are for management and owners only.
pub fn require_manager(user: &User, action: &str) -> AppResult<()> {
    if user.role.is_manager() {
        Ok(())
    } else {
        Err(AppError::AccessDenied(action.to_string()))
    }
}
