//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Archive aborted: {0}")]
    Archive(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Users and access
    // ---------------------------
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("No user given: pass --user <USERNAME>")]
    NoUser,

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Access denied: '{0}' requires management or owner role")]
    AccessDenied(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
