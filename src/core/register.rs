use crate::db::log::audit;
use crate::db::users::{find_user_by_username, insert_user, username_exists};
use crate::errors::{AppError, AppResult};
use crate::models::user::{NewUser, User};
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use rusqlite::Connection;

pub struct RegisterLogic;

fn required<'a>(value: &'a str, field: &'static str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v)
}

/// Argon2 PHC string for `password`.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

impl RegisterLogic {
    /// Validate and store a new user.
    /// Every field is required, both passwords must match and the username
    /// must not be taken yet.
    pub fn apply(conn: &Connection, new_user: &NewUser) -> AppResult<User> {
        let username = required(&new_user.username, "username")?;
        required(&new_user.password, "password")?;
        required(&new_user.confirm_password, "confirm_password")?;
        let first_name = required(&new_user.first_name, "first_name")?;
        let last_name = required(&new_user.last_name, "last_name")?;

        if new_user.password != new_user.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        if username_exists(conn, username)? {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        let hash = hash_password(&new_user.password)?;
        insert_user(conn, username, &hash, first_name, last_name, new_user.role)?;

        audit(
            conn,
            "register",
            username,
            &format!("Registered {} {} ({})", first_name, last_name, new_user.role.to_db_str()),
        );

        find_user_by_username(conn, username)?
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))
    }
}
