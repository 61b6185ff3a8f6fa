//! Versioned schema migrations.
//!
//! Every migration runs once, inside its own transaction, and is recorded as
//! a `migration_applied` row of the `log` table.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240304_0001_initial_schema",
        description: "Created users, clock_events, redemptions and ratings tables",
        sql: r#"
            CREATE TABLE IF NOT EXISTS users (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                username    TEXT NOT NULL UNIQUE,
                password    TEXT NOT NULL,
                first_name  TEXT NOT NULL,
                last_name   TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS clock_events (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                event_type  TEXT NOT NULL,
                timestamp   TEXT NOT NULL,
                iso_year    INTEGER NOT NULL,
                iso_week    INTEGER NOT NULL,
                user_id     INTEGER NOT NULL REFERENCES users(id)
            );

            CREATE INDEX IF NOT EXISTS idx_clock_events_user_week ON clock_events(user_id, iso_week);
            CREATE INDEX IF NOT EXISTS idx_clock_events_user_ts ON clock_events(user_id, timestamp);

            CREATE TABLE IF NOT EXISTS redemptions (
                id               INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id          INTEGER NOT NULL REFERENCES users(id),
                item_name        TEXT NOT NULL,
                redemption_time  TEXT
            );

            CREATE TABLE IF NOT EXISTS ratings (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id    INTEGER NOT NULL REFERENCES users(id),
                rating     INTEGER NOT NULL,
                comment    TEXT,
                timestamp  TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20240318_0002_add_user_role",
        description: "Added role column to users",
        sql: r#"
            ALTER TABLE users ADD COLUMN role TEXT NOT NULL DEFAULT 'employee'
                CHECK(role IN ('employee','management','owner'));
        "#,
    },
    Migration {
        version: "20240405_0003_archive_tables",
        description: "Created archived_clock_events table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS archived_clock_events (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                original_id  INTEGER NOT NULL,
                event_type   TEXT NOT NULL,
                timestamp    TEXT NOT NULL,
                iso_year     INTEGER NOT NULL,
                iso_week     INTEGER NOT NULL,
                user_id      INTEGER NOT NULL REFERENCES users(id),
                archived_at  TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_archived_user_ts ON archived_clock_events(user_id, timestamp);
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now', 'localtime'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Versions not yet applied to this database, in order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations.
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}
