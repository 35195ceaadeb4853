use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use codetracker::core::session::{SessionEdit, SessionLogic};
use codetracker::db::initialize::init_db;
use codetracker::db::seed::{SEED_ROWS, seed_range_end, seed_range_start};
use codetracker::db::store::{RecordStore, WriteOutcome};
use codetracker::models::{CodingGoal, CodingSession};

mod common;
use common::open_test_pool;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_first_run_seeds_sessions_and_default_goal() {
    let pool = open_test_pool("store_first_run", true);

    let sessions = pool.sessions().get_all_records().expect("sessions");
    assert_eq!(sessions.len(), SEED_ROWS);
    for s in &sessions {
        assert!(s.end_time >= s.start_time);
        assert!(s.start_time >= seed_range_start() && s.start_time <= seed_range_end());
        assert_eq!(s.duration, s.end_time - s.start_time);
        assert!(s.duration < TimeDelta::hours(24));
    }

    let goals = pool.goals().get_all_records().expect("goals");
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].goal_month, "September");
    assert_eq!(goals[0].goal_year, 2024);
    assert_eq!(goals[0].goal_hours, 1);
}

#[test]
fn test_second_init_leaves_tables_alone() {
    let pool = open_test_pool("store_second_init", true);

    let report = init_db(&pool.conn, true).expect("init again");
    assert!(!report.created_anything());
    assert_eq!(pool.sessions().count().unwrap(), SEED_ROWS as i64);
    assert_eq!(pool.goals().count().unwrap(), 1);
}

#[test]
fn test_unseeded_init_only_has_default_goal() {
    let pool = open_test_pool("store_unseeded", false);
    assert!(pool.sessions().get_all_records().unwrap().is_empty());
    assert_eq!(pool.goals().count().unwrap(), 1);
}

#[test]
fn test_add_session_round_trip() {
    let pool = open_test_pool("store_add_session", true);
    let before = pool.sessions().known_ids().unwrap();

    let session = CodingSession::new(at(2024, 9, 2, 9, 0), at(2024, 9, 2, 11, 30));
    let stored = SessionLogic::add(&pool, &session).expect("add");
    assert!(!before.contains(&stored.id.to_string()));

    let all = pool.sessions().get_all_records().unwrap();
    let found = all.iter().find(|s| s.id == stored.id).expect("stored row");
    assert_eq!(found.start_time, session.start_time);
    assert_eq!(found.end_time, session.end_time);
    assert_eq!(found.duration_str(), "02:30:00");
}

#[test]
fn test_edit_session_recomputes_duration() {
    let pool = open_test_pool("store_edit_session", false);
    let stored = SessionLogic::add(
        &pool,
        &CodingSession::new(at(2024, 9, 2, 9, 0), at(2024, 9, 2, 10, 0)),
    )
    .unwrap();

    let edit = SessionEdit {
        end_time: chrono::NaiveTime::from_hms_opt(13, 15, 0),
        ..SessionEdit::default()
    };
    SessionLogic::edit(&pool, stored.id, &edit, 24).expect("edit");

    let reloaded = pool.sessions().get_by_id(stored.id).unwrap().unwrap();
    assert_eq!(reloaded.end_time, at(2024, 9, 2, 13, 15));
    assert_eq!(reloaded.duration, reloaded.end_time - reloaded.start_time);
    assert_eq!(reloaded.duration_str(), "04:15:00");
}

#[test]
fn test_edit_session_rejects_end_before_start() {
    let pool = open_test_pool("store_edit_reject", false);
    let stored = SessionLogic::add(
        &pool,
        &CodingSession::new(at(2024, 9, 2, 9, 0), at(2024, 9, 2, 10, 0)),
    )
    .unwrap();

    let edit = SessionEdit {
        start_time: chrono::NaiveTime::from_hms_opt(11, 0, 0),
        ..SessionEdit::default()
    };
    let err = SessionLogic::edit(&pool, stored.id, &edit, 24).unwrap_err();
    assert!(matches!(
        err,
        codetracker::errors::AppError::EndBeforeStart { .. }
    ));

    // row untouched
    let reloaded = pool.sessions().get_by_id(stored.id).unwrap().unwrap();
    assert_eq!(reloaded.start_time, at(2024, 9, 2, 9, 0));
}

#[test]
fn test_update_missing_row_reports_not_found() {
    let pool = open_test_pool("store_update_missing", false);
    let mut ghost = CodingSession::new(at(2024, 9, 2, 9, 0), at(2024, 9, 2, 10, 0));
    ghost.id = 999;
    assert_eq!(pool.sessions().update(&ghost), WriteOutcome::NotFound);
}

#[test]
fn test_delete_is_idempotent() {
    let pool = open_test_pool("store_delete_twice", true);
    let victim = pool.sessions().get_all_records().unwrap()[0].id;

    assert_eq!(SessionLogic::delete(&pool, victim), WriteOutcome::Applied);
    assert_eq!(SessionLogic::delete(&pool, victim), WriteOutcome::NotFound);
    assert!(SessionLogic::delete(&pool, victim).is_success());

    let ids = pool.sessions().known_ids().unwrap();
    assert!(!ids.contains(&victim.to_string()));
    assert_eq!(ids.len(), SEED_ROWS - 1);
}

#[test]
fn test_sessions_for_month_filters_on_start() {
    let pool = open_test_pool("store_month_filter", false);
    let store = pool.sessions();

    // starts in September, ends in October: belongs to September
    store
        .add(&CodingSession::new(at(2025, 9, 30, 22, 0), at(2025, 10, 1, 1, 0)))
        .unwrap();
    store
        .add(&CodingSession::new(at(2025, 9, 1, 8, 0), at(2025, 9, 1, 9, 0)))
        .unwrap();
    store
        .add(&CodingSession::new(at(2025, 10, 1, 8, 0), at(2025, 10, 1, 9, 0)))
        .unwrap();

    let september = store.get_sessions_for_month("2025-09").unwrap();
    assert_eq!(september.len(), 2);
    assert!(september.iter().all(|s| s.month_key() == "2025-09"));

    assert_eq!(store.get_sessions_for_month("2025-10").unwrap().len(), 1);
    assert!(store.get_sessions_for_month("2025-11").unwrap().is_empty());
    // the key is bound as a parameter, never spliced into the query
    assert!(
        store
            .get_sessions_for_month("2025-09' OR '1'='1")
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_goal_crud() {
    let pool = open_test_pool("store_goal_crud", false);
    let store = pool.goals();

    let id = store.add(&CodingGoal::new("March", 2025, 40)).unwrap();
    let mut goal = store.get_by_id(id).unwrap().expect("goal");
    assert_eq!(goal.goal_hours, 40);

    goal.goal_hours = 55;
    goal.goal_month = "April".into();
    assert_eq!(store.update(&goal), WriteOutcome::Applied);
    assert_eq!(store.get_by_id(id).unwrap(), Some(goal));

    assert_eq!(store.delete(id), WriteOutcome::Applied);
    assert_eq!(store.get_by_id(id).unwrap(), None);
    assert_eq!(store.delete(id), WriteOutcome::NotFound);
}

#[test]
fn test_writes_are_audited() {
    let pool = open_test_pool("store_audit_log", false);
    let stored = SessionLogic::add(
        &pool,
        &CodingSession::new(at(2024, 9, 2, 9, 0), at(2024, 9, 2, 10, 0)),
    )
    .unwrap();
    SessionLogic::delete(&pool, stored.id);
    // a missing row writes nothing
    SessionLogic::delete(&pool, stored.id);

    let entries = codetracker::core::log::LogLogic::load(&pool).unwrap();
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, ["session_add", "session_del"]);
    assert_eq!(entries[1].target, format!("session#{}", stored.id));
}

#[test]
fn test_corrupt_timestamp_is_reported() {
    let pool = open_test_pool("store_corrupt_row", false);
    pool.conn
        .execute(
            "INSERT INTO CodeTrackerTable (StartTime, EndTime, Duration) VALUES (?1, ?2, ?3)",
            ["yesterday", "2024-09-01 10:00:00", "01:00:00"],
        )
        .unwrap();

    assert!(pool.sessions().get_all_records().is_err());
}

#[test]
fn test_missing_duration_is_derived() {
    let pool = open_test_pool("store_null_duration", false);
    pool.conn
        .execute(
            "INSERT INTO CodeTrackerTable (StartTime, EndTime) VALUES (?1, ?2)",
            ["2024-09-01 08:00:00", "2024-09-01 09:10:00"],
        )
        .unwrap();

    let sessions = pool.sessions().get_all_records().unwrap();
    assert_eq!(sessions[0].duration_str(), "01:10:00");
    assert_eq!(
        codetracker::db::SessionStore::calculate_duration(at(2024, 9, 1, 10, 0), at(2024, 9, 1, 9, 0)),
        TimeDelta::hours(-1)
    );
}

#[test]
fn test_month_key_helpers() {
    use codetracker::utils::date::parse_month_key;

    assert_eq!(parse_month_key("2024-09"), NaiveDate::from_ymd_opt(2024, 9, 1));
    assert_eq!(parse_month_key("2024-9"), None);
    assert_eq!(parse_month_key("2024-13"), None);
    assert_eq!(at(2024, 9, 30, 23, 59).format("%Y-%m").to_string(), "2024-09");
}
