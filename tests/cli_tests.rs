use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{clock, init_db, register, setup_test_db, stechuhr};

#[test]
fn test_register_and_list_users() {
    let db_path = setup_test_db("cli_register");
    init_db(&db_path);

    register(&db_path, "anna", "employee");
    register(&db_path, "chef", "management");

    stechuhr()
        .args(["--db", &db_path, "users"])
        .assert()
        .success()
        .stdout(contains("anna"))
        .stdout(contains("chef"))
        .stdout(contains("management"))
        .stdout(contains("geheim").not());
}

#[test]
fn test_register_rejects_duplicate_username() {
    let db_path = setup_test_db("cli_register_dup");
    init_db(&db_path);
    register(&db_path, "anna", "employee");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "register",
            "--username",
            "anna",
            "--password",
            "x",
            "--confirm-password",
            "x",
            "--first-name",
            "Anna",
            "--last-name",
            "Zweit",
        ])
        .assert()
        .failure()
        .stderr(contains("already taken"));
}

#[test]
fn test_register_rejects_password_mismatch() {
    let db_path = setup_test_db("cli_register_mismatch");
    init_db(&db_path);

    stechuhr()
        .args([
            "--db",
            &db_path,
            "register",
            "--username",
            "bert",
            "--password",
            "eins",
            "--confirm-password",
            "zwei",
            "--first-name",
            "Bert",
            "--last-name",
            "Beispiel",
        ])
        .assert()
        .failure()
        .stderr(contains("Passwords do not match"));

    stechuhr()
        .args(["--db", &db_path, "users"])
        .assert()
        .success()
        .stdout(contains("No users registered"));
}

#[test]
fn test_clock_requires_a_known_user() {
    let db_path = setup_test_db("cli_unknown_user");
    init_db(&db_path);

    stechuhr()
        .args(["--db", &db_path, "--user", "ghost", "clock", "in"])
        .assert()
        .failure()
        .stderr(contains("Unknown user: ghost"));

    stechuhr()
        .args(["--db", &db_path, "clock", "in"])
        .assert()
        .failure()
        .stderr(contains("--user"));
}

#[test]
fn test_status_follows_last_event() {
    let db_path = setup_test_db("cli_status");
    init_db(&db_path);
    register(&db_path, "anna", "employee");
    register(&db_path, "bert", "employee");

    clock(&db_path, "anna", "in", "2025-03-11 08:00:00");

    let out = stechuhr()
        .args(["--db", &db_path, "status"])
        .output()
        .expect("failed to run status");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let anna = stdout.lines().find(|l| l.starts_with("anna")).expect("anna row");
    let bert = stdout.lines().find(|l| l.starts_with("bert")).expect("bert row");
    assert!(anna.contains("clocked in"), "anna: {anna}");
    assert!(bert.contains("clocked out"), "bert without events: {bert}");

    clock(&db_path, "anna", "out", "2025-03-11 16:00:00");

    stechuhr()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("clocked in").not());
}

#[test]
fn test_hours_plain_pair_is_zero_with_adjacent_and_counted_with_session() {
    let db_path = setup_test_db("cli_hours_policies");
    init_db(&db_path);
    register(&db_path, "anna", "employee");

    clock(&db_path, "anna", "in", "2025-03-11 08:00:00");
    clock(&db_path, "anna", "out", "2025-03-11 16:00:00");

    let now = "2025-03-12 09:00:00";

    stechuhr()
        .args(["--db", &db_path, "--user", "anna", "--now", now, "hours"])
        .assert()
        .success()
        .stdout(contains("2025-W11"))
        .stdout(contains("0.00 h"));

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "anna",
            "--now",
            now,
            "hours",
            "--pairing",
            "session",
        ])
        .assert()
        .success()
        .stdout(contains("session"))
        .stdout(contains("8.00 h"));
}

#[test]
fn test_hours_counts_gap_before_clock_in() {
    let db_path = setup_test_db("cli_hours_adjacent");
    init_db(&db_path);
    register(&db_path, "anna", "employee");

    clock(&db_path, "anna", "out", "2025-03-11 09:00:00");
    clock(&db_path, "anna", "in", "2025-03-11 13:30:00");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "anna",
            "--now",
            "2025-03-12 09:00:00",
            "hours",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"hours\": 4.5"))
        .stdout(contains("\"match_by\": \"week_number\""))
        .stdout(contains("\"pairing\": \"adjacent\""))
        .stdout(contains("\"iso_week\": 11"));
}

#[test]
fn test_events_lists_history_and_weekly_total() {
    let db_path = setup_test_db("cli_events");
    init_db(&db_path);
    register(&db_path, "anna", "employee");

    clock(&db_path, "anna", "out", "2025-03-03 09:00:00");
    clock(&db_path, "anna", "out", "2025-03-11 09:00:00");
    clock(&db_path, "anna", "in", "2025-03-11 11:00:00");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "anna",
            "--now",
            "2025-03-12 09:00:00",
            "events",
        ])
        .assert()
        .success()
        .stdout(contains("2025-03-03 09:00:00"))
        .stdout(contains("2025-W10"))
        .stdout(contains("2025-03-11 11:00:00"))
        .stdout(contains("Total hours this week: 2.00 h"));
}

#[test]
fn test_redemptions_are_reserved_to_management() {
    let db_path = setup_test_db("cli_redemptions");
    init_db(&db_path);
    register(&db_path, "anna", "employee");
    register(&db_path, "chef", "owner");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "anna",
            "redemption",
            "add",
            "--item",
            "Kaffee",
        ])
        .assert()
        .success();

    stechuhr()
        .args(["--db", &db_path, "--user", "anna", "redemption", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    stechuhr()
        .args(["--db", &db_path, "--user", "chef", "redemption", "list"])
        .assert()
        .success()
        .stdout(contains("Kaffee"))
        .stdout(contains("anna"));
}

#[test]
fn test_ratings_are_reserved_to_management() {
    let db_path = setup_test_db("cli_ratings");
    init_db(&db_path);
    register(&db_path, "anna", "employee");
    register(&db_path, "chef", "management");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "anna",
            "rating",
            "add",
            "--score",
            "4",
            "--comment",
            "Gute Schicht",
        ])
        .assert()
        .success();

    stechuhr()
        .args(["--db", &db_path, "--user", "anna", "rating", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    stechuhr()
        .args(["--db", &db_path, "--user", "chef", "rating", "list"])
        .assert()
        .success()
        .stdout(contains("Gute Schicht"))
        .stdout(contains("4"));
}

#[test]
fn test_archive_moves_old_events_out_of_the_week() {
    let db_path = setup_test_db("cli_archive");
    init_db(&db_path);
    register(&db_path, "anna", "employee");
    register(&db_path, "chef", "owner");

    // same ISO week number, one year apart
    clock(&db_path, "anna", "out", "2024-03-13 09:00:00");
    clock(&db_path, "anna", "in", "2024-03-13 12:00:00");
    clock(&db_path, "anna", "out", "2025-03-11 09:00:00");
    clock(&db_path, "anna", "in", "2025-03-11 10:00:00");

    let hours = |expected: &str| {
        stechuhr()
            .args([
                "--db",
                &db_path,
                "--user",
                "anna",
                "--now",
                "2025-03-12 09:00:00",
                "hours",
            ])
            .assert()
            .success()
            .stdout(contains(expected.to_string()));
    };

    hours("4.00 h");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "anna",
            "archive",
            "--before",
            "2025-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "chef",
            "archive",
            "--before",
            "2025-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("Archived 2 clock event(s)"));

    hours("1.00 h");
}

#[test]
fn test_archive_rejects_invalid_date() {
    let db_path = setup_test_db("cli_archive_bad_date");
    init_db(&db_path);
    register(&db_path, "chef", "owner");

    stechuhr()
        .args([
            "--db",
            &db_path,
            "--user",
            "chef",
            "archive",
            "--before",
            "01.01.2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    register(&db_path, "anna", "employee");
    clock(&db_path, "anna", "in", "2025-03-11 08:00:00");

    stechuhr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("register"))
        .stdout(contains("clock_in"))
        .stdout(contains("2025-03-11 08:00:00"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);
    register(&db_path, "anna", "employee");
    clock(&db_path, "anna", "in", "2025-03-11 08:00:00");

    stechuhr()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("up to date"))
        .stdout(contains("Clock events"))
        .stdout(contains("integrity_check: ok"));
}

#[test]
fn test_db_migrate_and_vacuum() {
    let db_path = setup_test_db("cli_db_maintenance");
    init_db(&db_path);

    stechuhr()
        .args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Schema already current"))
        .stdout(contains("compacted"));
}

#[test]
fn test_init_is_repeatable() {
    let db_path = setup_test_db("cli_init_twice");
    init_db(&db_path);

    stechuhr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}
