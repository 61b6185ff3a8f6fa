#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stechuhr() -> Command {
    let mut cmd = cargo_bin_cmd!("stechuhr");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stechuhr.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema without touching the user's config file
pub fn init_db(db_path: &str) {
    stechuhr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn register(db_path: &str, username: &str, role: &str) {
    stechuhr()
        .args([
            "--db",
            db_path,
            "register",
            "--username",
            username,
            "--password",
            "geheim",
            "--confirm-password",
            "geheim",
            "--first-name",
            "Erika",
            "--last-name",
            "Mustermann",
            "--role",
            role,
        ])
        .assert()
        .success();
}

/// Clock `direction` ("in" / "out") for `username` at a pinned instant
pub fn clock(db_path: &str, username: &str, direction: &str, now: &str) {
    stechuhr()
        .args([
            "--db", db_path, "--user", username, "--now", now, "clock", direction,
        ])
        .assert()
        .success();
}
