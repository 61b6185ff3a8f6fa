use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::User;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const USER_COLUMNS: &str = "id, username, password, first_name, last_name, role";

pub fn map_user_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password_hash: row.get("password")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        role,
    })
}

/// Insert a user whose password is already hashed. Returns the new id.
pub fn insert_user(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
    role: Role,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (username, password, first_name, last_name, role)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![username, password_hash, first_name, last_name, role.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([username], map_user_row).optional()?)
}

pub fn username_exists(conn: &Connection, username: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM users WHERE username = ?1")?;
    Ok(stmt.exists([username])?)
}

pub fn load_users(conn: &Connection) -> AppResult<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username ASC");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
