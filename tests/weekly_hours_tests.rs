use chrono::NaiveDateTime;
use rusqlite::Connection;
use stechuhr::core::calculator::session::{Session, replay};
use stechuhr::core::calculator::{EventSource, PairingPolicy, WeekMatch, WeeklyHoursCalculator};
use stechuhr::core::clock::FixedClock;
use stechuhr::core::status::StatusLogic;
use stechuhr::db::initialize::init_db;
use stechuhr::db::queries::{SqliteEvents, insert_event, load_events_for_user};
use stechuhr::db::users::insert_user;
use stechuhr::models::clock_event::ClockEvent;
use stechuhr::models::event_kind::EventKind::{self, ClockIn, ClockOut};
use stechuhr::models::role::Role;
use stechuhr::models::user_status::ClockStatus;
use stechuhr::utils::time::parse_timestamp;

mod common;
use common::setup_test_db;

const EPS: f64 = 1e-9;

fn open_db(name: &str) -> Connection {
    let path = setup_test_db(name);
    let conn = Connection::open(&path).expect("open db");
    init_db(&conn).expect("init db");
    conn
}

fn add_user(conn: &Connection, username: &str) -> i64 {
    insert_user(conn, username, "$argon2id$dummy", "Erika", "Muster", Role::Employee)
        .expect("insert user")
}

fn at(s: &str) -> NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp")
}

fn push(conn: &Connection, user_id: i64, kind: EventKind, ts: &str) {
    insert_event(conn, &ClockEvent::new(user_id, kind, at(ts))).expect("insert event");
}

fn hours_with(
    conn: &Connection,
    user_id: i64,
    now: &str,
    match_by: WeekMatch,
    pairing: PairingPolicy,
) -> f64 {
    let source = SqliteEvents::new(conn);
    WeeklyHoursCalculator::new(&source)
        .with_policy(match_by, pairing)
        .compute_weekly_hours(user_id, at(now))
        .expect("compute hours")
}

fn hours(conn: &Connection, user_id: i64, now: &str) -> f64 {
    hours_with(
        conn,
        user_id,
        now,
        WeekMatch::WeekNumber,
        PairingPolicy::Adjacent,
    )
}

#[test]
fn test_no_events_this_week_is_zero() {
    let conn = open_db("wh_no_events");
    let uid = add_user(&conn, "anna");

    assert_eq!(hours(&conn, uid, "2025-03-12 10:00:00"), 0.0);
    assert_eq!(
        hours_with(
            &conn,
            uid,
            "2025-03-12 10:00:00",
            WeekMatch::WeekAndYear,
            PairingPolicy::Session
        ),
        0.0
    );
}

#[test]
fn test_gap_ending_on_clock_in_is_counted() {
    let conn = open_db("wh_gap_counted");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockOut, "2025-03-11 09:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 17:00:00");

    let h = hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 8.0).abs() < EPS, "expected 8h, got {h}");
}

#[test]
fn test_fractional_hours_are_not_rounded() {
    let conn = open_db("wh_fractional");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockOut, "2025-03-11 09:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 09:20:00");

    let h = hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 1.0 / 3.0).abs() < EPS, "expected 1/3 h, got {h}");
}

#[test]
fn test_events_are_sorted_before_pairing() {
    let conn = open_db("wh_sorted");
    let uid = add_user(&conn, "anna");

    // inserted newest first
    push(&conn, uid, ClockIn, "2025-03-11 17:00:00");
    push(&conn, uid, ClockOut, "2025-03-11 09:00:00");

    let h = hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 8.0).abs() < EPS, "expected 8h, got {h}");
}

#[test]
fn test_first_event_of_week_never_contributes() {
    let conn = open_db("wh_first_event");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockIn, "2025-03-10 08:00:00");
    assert_eq!(hours(&conn, uid, "2025-03-12 10:00:00"), 0.0);

    // a plain in/out pair adds nothing either: only gaps ending on a clock-in count
    push(&conn, uid, ClockOut, "2025-03-10 16:00:00");
    assert_eq!(hours(&conn, uid, "2025-03-12 10:00:00"), 0.0);
}

#[test]
fn test_consecutive_clock_ins_count_the_gap_once() {
    let conn = open_db("wh_double_in");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockIn, "2025-03-11 09:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 11:30:00");

    let h = hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 2.5).abs() < EPS, "expected 2.5h, got {h}");
}

#[test]
fn test_other_weeks_are_excluded_across_year_end() {
    let conn = open_db("wh_year_end");
    let uid = add_user(&conn, "anna");

    // 2024-12-29 is ISO 2024-W52, 2024-12-30 already belongs to 2025-W01
    push(&conn, uid, ClockOut, "2024-12-29 20:00:00");
    push(&conn, uid, ClockIn, "2024-12-30 08:00:00");
    push(&conn, uid, ClockOut, "2024-12-31 08:00:00");
    push(&conn, uid, ClockIn, "2024-12-31 10:00:00");

    let h = hours(&conn, uid, "2025-01-02 12:00:00");
    assert!((h - 2.0).abs() < EPS, "expected 2h, got {h}");
}

#[test]
fn test_week_number_matching_ignores_the_year() {
    let conn = open_db("wh_week_number");
    let uid = add_user(&conn, "anna");

    // both in ISO week 11, one year apart
    push(&conn, uid, ClockOut, "2024-03-13 09:00:00");
    push(&conn, uid, ClockIn, "2024-03-13 13:00:00");
    push(&conn, uid, ClockOut, "2025-03-10 09:00:00");
    push(&conn, uid, ClockIn, "2025-03-10 11:00:00");

    let now = "2025-03-12 10:00:00";
    let by_number = hours_with(&conn, uid, now, WeekMatch::WeekNumber, PairingPolicy::Adjacent);
    let by_year = hours_with(&conn, uid, now, WeekMatch::WeekAndYear, PairingPolicy::Adjacent);

    assert!((by_number - 6.0).abs() < EPS, "week_number got {by_number}");
    assert!((by_year - 2.0).abs() < EPS, "week_and_year got {by_year}");
}

#[test]
fn test_legacy_labels_are_decoded() {
    let conn = open_db("wh_legacy_labels");
    let uid = add_user(&conn, "anna");

    for (label, ts) in [
        ("Ausstempeln", "2025-03-11 09:00:00"),
        ("Stempeln", "2025-03-11 12:00:00"),
        ("Ausstempeln", "2025-03-11 13:00:00"),
        ("Einstempeln", "2025-03-11 14:00:00"),
    ] {
        conn.execute(
            "INSERT INTO clock_events (event_type, timestamp, iso_year, iso_week, user_id)
             VALUES (?1, ?2, 2025, 11, ?3)",
            rusqlite::params![label, ts, uid],
        )
        .expect("raw insert");
    }

    let h = hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 4.0).abs() < EPS, "expected 3h + 1h, got {h}");
}

#[test]
fn test_malformed_timestamp_fails_fast() {
    let conn = open_db("wh_bad_timestamp");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockOut, "2025-03-11 09:00:00");
    conn.execute(
        "INSERT INTO clock_events (event_type, timestamp, iso_year, iso_week, user_id)
         VALUES ('Einstempeln', 'yesterday-ish', 2025, 11, ?1)",
        [uid],
    )
    .expect("raw insert");

    let source = SqliteEvents::new(&conn);
    let result = WeeklyHoursCalculator::new(&source).compute_weekly_hours(uid, at("2025-03-12 10:00:00"));
    assert!(result.is_err(), "a malformed row must not be skipped");
}

#[test]
fn test_unknown_event_kind_fails_fast() {
    let conn = open_db("wh_bad_kind");
    let uid = add_user(&conn, "anna");

    conn.execute(
        "INSERT INTO clock_events (event_type, timestamp, iso_year, iso_week, user_id)
         VALUES ('Pause', '2025-03-11 09:00:00', 2025, 11, ?1)",
        [uid],
    )
    .expect("raw insert");

    let source = SqliteEvents::new(&conn);
    let result = WeeklyHoursCalculator::new(&source).compute_weekly_hours(uid, at("2025-03-12 10:00:00"));
    assert!(result.is_err());
}

#[test]
fn test_other_users_do_not_leak_into_the_total() {
    let conn = open_db("wh_other_users");
    let anna = add_user(&conn, "anna");
    let bert = add_user(&conn, "bert");

    push(&conn, bert, ClockOut, "2025-03-11 09:00:00");
    push(&conn, bert, ClockIn, "2025-03-11 17:00:00");
    push(&conn, anna, ClockIn, "2025-03-11 12:00:00");

    assert_eq!(hours(&conn, anna, "2025-03-12 10:00:00"), 0.0);
}

#[test]
fn test_calculation_is_idempotent() {
    let conn = open_db("wh_idempotent");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockOut, "2025-03-11 09:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 10:15:00");
    push(&conn, uid, ClockIn, "2025-03-11 11:00:00");

    let source = SqliteEvents::new(&conn);
    let calc = WeeklyHoursCalculator::new(&source);
    let clock = FixedClock(at("2025-03-13 08:00:00"));

    let first = calc.compute_current_week(uid, &clock).expect("first run");
    let second = calc.compute_current_week(uid, &clock).expect("second run");
    assert_eq!(first, second);
    assert!((first - 2.0).abs() < EPS, "expected 1.25h + 0.75h, got {first}");
}

// ---------------------------------------------------------------
// Session pairing
// ---------------------------------------------------------------

fn session_hours(conn: &Connection, user_id: i64, now: &str) -> f64 {
    hours_with(
        conn,
        user_id,
        now,
        WeekMatch::WeekAndYear,
        PairingPolicy::Session,
    )
}

#[test]
fn test_session_counts_closed_in_out_pairs() {
    let conn = open_db("wh_session_pair");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockIn, "2025-03-10 09:00:00");
    push(&conn, uid, ClockOut, "2025-03-10 17:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 08:30:00");
    push(&conn, uid, ClockOut, "2025-03-11 12:00:00");

    let h = session_hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 11.5).abs() < EPS, "expected 8h + 3.5h, got {h}");
}

#[test]
fn test_session_open_from_previous_week_counts_from_week_start() {
    let conn = open_db("wh_session_carry");
    let uid = add_user(&conn, "anna");

    // night shift starting Friday of week 10, closing Monday 02:00 of week 11
    push(&conn, uid, ClockIn, "2025-03-07 22:00:00");
    push(&conn, uid, ClockOut, "2025-03-10 02:00:00");

    let now = "2025-03-12 10:00:00";
    let h = session_hours(&conn, uid, now);
    assert!((h - 2.0).abs() < EPS, "expected 2h since Monday 00:00, got {h}");

    // the reference pairing never counts the first event of the week
    assert_eq!(hours(&conn, uid, now), 0.0);
}

#[test]
fn test_session_duplicate_clock_in_is_not_double_counted() {
    let conn = open_db("wh_session_dup_in");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockIn, "2025-03-11 09:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 10:00:00");
    push(&conn, uid, ClockOut, "2025-03-11 12:00:00");

    let h = session_hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 3.0).abs() < EPS, "expected 3h from the first clock-in, got {h}");
}

#[test]
fn test_session_still_open_contributes_nothing() {
    let conn = open_db("wh_session_open");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockIn, "2025-03-12 08:00:00");
    assert_eq!(session_hours(&conn, uid, "2025-03-12 10:00:00"), 0.0);
}

#[test]
fn test_session_week_number_replays_each_year_separately() {
    let conn = open_db("wh_session_years");
    let uid = add_user(&conn, "anna");

    push(&conn, uid, ClockIn, "2024-03-13 09:00:00");
    push(&conn, uid, ClockOut, "2024-03-13 10:00:00");
    push(&conn, uid, ClockIn, "2025-03-11 09:00:00");
    push(&conn, uid, ClockOut, "2025-03-11 11:00:00");

    let now = "2025-03-12 10:00:00";
    let both = hours_with(&conn, uid, now, WeekMatch::WeekNumber, PairingPolicy::Session);
    let this_year = hours_with(&conn, uid, now, WeekMatch::WeekAndYear, PairingPolicy::Session);

    assert!((both - 3.0).abs() < EPS, "week_number got {both}");
    assert!((this_year - 2.0).abs() < EPS, "week_and_year got {this_year}");
}

#[test]
fn test_session_state_machine_transitions() {
    let week_start = at("2025-03-10 00:00:00");
    let ev = |kind, ts: &str| ClockEvent::new(1, kind, at(ts));

    let carried = ev(ClockIn, "2025-03-07 22:00:00");
    assert_eq!(Session::seed(Some(&carried), week_start), Session::Open(week_start));
    assert_eq!(Session::seed(None, week_start), Session::Closed);

    // stray clock-out while closed is ignored
    let (state, emitted) = Session::Closed.step(&ev(ClockOut, "2025-03-10 08:00:00"));
    assert_eq!(state, Session::Closed);
    assert!(emitted.is_none());

    let events = vec![
        ev(ClockIn, "2025-03-10 09:00:00"),
        ev(ClockOut, "2025-03-10 12:00:00"),
        ev(ClockIn, "2025-03-10 13:00:00"),
    ];
    let (intervals, last) = replay(Session::Closed, &events);
    assert_eq!(intervals.len(), 1);
    assert!((intervals[0].hours() - 3.0).abs() < EPS);
    assert!(last.is_open());
}

// ---------------------------------------------------------------
// Legacy timestamp formats
// ---------------------------------------------------------------

fn push_raw(conn: &Connection, user_id: i64, label: &str, ts: &str) {
    let parsed = at(ts);
    let ev = ClockEvent::new(user_id, ClockIn, parsed);
    conn.execute(
        "INSERT INTO clock_events (event_type, timestamp, iso_year, iso_week, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![label, ts, ev.iso_year, ev.iso_week, user_id],
    )
    .expect("raw insert");
}

#[test]
fn test_legacy_t_separator_orders_by_time_not_text() {
    let conn = open_db("wh_legacy_order");
    let uid = add_user(&conn, "anna");

    // Sunday of week 10: in at 08:00 (old format), out at 23:00
    push_raw(&conn, uid, "Einstempeln", "2025-03-09T08:00:00");
    push_raw(&conn, uid, "Ausstempeln", "2025-03-09 23:00:00");

    let source = SqliteEvents::new(&conn);
    let last = source
        .last_event_before(uid, at("2025-03-10 00:00:00"))
        .expect("query")
        .expect("an event before the week");
    assert_eq!(last.kind, ClockOut);
    assert_eq!(last.timestamp, at("2025-03-09 23:00:00"));

    let board = StatusLogic::board(&conn).expect("status board");
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].status, ClockStatus::ClockedOut);
}

#[test]
fn test_session_seed_ignores_text_order_of_legacy_rows() {
    let conn = open_db("wh_legacy_seed");
    let uid = add_user(&conn, "anna");

    push_raw(&conn, uid, "Einstempeln", "2025-03-09T08:00:00.250");
    push_raw(&conn, uid, "Ausstempeln", "2025-03-09 23:00:00");
    push(&conn, uid, ClockIn, "2025-03-10 09:00:00");
    push(&conn, uid, ClockOut, "2025-03-10 17:00:00");

    // a wrongly open seed would start the Monday shift at 00:00 (17h)
    let h = session_hours(&conn, uid, "2025-03-12 10:00:00");
    assert!((h - 8.0).abs() < EPS, "expected 8h, got {h}");
}

#[test]
fn test_events_are_listed_chronologically_across_formats() {
    let conn = open_db("wh_legacy_listing");
    let uid = add_user(&conn, "anna");

    push_raw(&conn, uid, "Stempeln", "2025-03-09T08:00:00");
    push_raw(&conn, uid, "Ausstempeln", "2025-03-09 23:00:00");

    let events = load_events_for_user(&conn, uid).expect("load events");
    let times: Vec<NaiveDateTime> = events.iter().map(|e| e.timestamp).collect();
    assert_eq!(
        times,
        vec![at("2025-03-09 08:00:00"), at("2025-03-09 23:00:00")]
    );
}
