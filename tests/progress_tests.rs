use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use codetracker::core::goal::GoalLogic;
use codetracker::core::progress::{CURRENT_PROGRESS_LABEL, GOAL_HOURS_LABEL, calculate_progress};
use codetracker::core::session::SessionLogic;
use codetracker::db::GoalStore;
use codetracker::errors::AppError;
use codetracker::models::{CodingGoal, CodingSession};
use codetracker::ui::chart::{bar_length, render_progress_chart};

mod common;
use common::open_test_pool;

fn session(start: NaiveDateTime, minutes: i64) -> CodingSession {
    CodingSession::new(start, start + TimeDelta::minutes(minutes))
}

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn test_progress_sums_only_the_goal_month() {
    let goal = CodingGoal::new("September", 2024, 10);
    let sessions = vec![
        session(day(2024, 9, 1), 60),
        session(day(2024, 9, 10), 120),
        session(day(2024, 9, 30), 30),
        session(day(2024, 10, 1), 300),
    ];

    let progress = calculate_progress(&goal, &sessions).expect("progress");
    assert_eq!(progress.total_hours, 3.5);
    assert_eq!(progress.goal_hours, 10);
    assert_eq!(
        progress.series(),
        [(CURRENT_PROGRESS_LABEL, 3.5), (GOAL_HOURS_LABEL, 10.0)]
    );
    assert!(!progress.is_reached());
    assert_eq!(progress.remaining_hours(), 6.5);
    assert_eq!(progress.percent(), 35.0);
}

#[test]
fn test_progress_same_month_other_year_is_excluded() {
    let goal = CodingGoal::new("September", 2024, 1);
    let sessions = vec![session(day(2023, 9, 5), 90)];
    assert_eq!(calculate_progress(&goal, &sessions).unwrap().total_hours, 0.0);
}

#[test]
fn test_progress_without_sessions_is_zero() {
    let goal = CodingGoal::new("January", 2025, 5);
    let progress = calculate_progress(&goal, &[]).unwrap();
    assert_eq!(progress.total_hours, 0.0);
    assert_eq!(progress.percent(), 0.0);
}

#[test]
fn test_progress_exceeding_goal_is_not_clamped() {
    let goal = CodingGoal::new("September", 2024, 1);
    let progress = calculate_progress(&goal, &[session(day(2024, 9, 3), 150)]).unwrap();
    assert_eq!(progress.total_hours, 2.5);
    assert!(progress.is_reached());
    assert_eq!(progress.remaining_hours(), 0.0);
    assert_eq!(progress.series()[0].1, 2.5);
}

#[test]
fn test_progress_rounds_to_two_decimals() {
    let goal = CodingGoal::new("September", 2024, 1);
    // 20 minutes = 0.3333h
    let progress = calculate_progress(&goal, &[session(day(2024, 9, 3), 20)]).unwrap();
    assert_eq!(progress.total_hours, 0.33);
}

#[test]
fn test_unknown_month_is_an_error() {
    let goal = CodingGoal::new("Septembre", 2024, 1);
    let err = calculate_progress(&goal, &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidMonth(m) if m == "Septembre"));

    // month names are matched case-sensitively
    let lower = CodingGoal::new("september", 2024, 1);
    assert!(GoalStore::get_formatted_month_key(&lower).is_err());
}

#[test]
fn test_formatted_month_key() {
    let goal = CodingGoal::new("September", 2024, 1);
    assert_eq!(GoalStore::get_formatted_month_key(&goal).unwrap(), "2024-09");

    let goal = CodingGoal::new("December", 987, 1);
    assert_eq!(GoalStore::get_formatted_month_key(&goal).unwrap(), "0987-12");
}

#[test]
fn test_progress_from_the_store() {
    let pool = open_test_pool("progress_from_store", false);
    for (start, minutes) in [(day(2025, 3, 1), 60), (day(2025, 3, 2), 45), (day(2025, 4, 1), 600)] {
        SessionLogic::add(&pool, &session(start, minutes)).unwrap();
    }

    let goal = GoalLogic::add(&pool, &CodingGoal::new("March", 2025, 2)).unwrap();
    let progress = GoalLogic::progress(&pool, &goal).unwrap();
    assert_eq!(progress.total_hours, 1.75);
    assert_eq!(progress.goal_month, "March");
    assert_eq!(progress.goal_year, 2025);
}

#[test]
fn test_bar_length() {
    assert_eq!(bar_length(5.0, 10.0, 50), 25);
    assert_eq!(bar_length(10.0, 10.0, 50), 50);
    assert_eq!(bar_length(0.0, 10.0, 50), 0);
    assert_eq!(bar_length(3.0, 0.0, 50), 0);
}

#[test]
fn test_chart_mentions_goal_and_status() {
    let goal = CodingGoal::new("September", 2024, 4);
    let progress = calculate_progress(&goal, &[session(day(2024, 9, 3), 60)]).unwrap();
    let chart = render_progress_chart(&progress, 20);

    assert!(chart.contains("Goal Progress: September, 2024"));
    assert!(chart.contains(CURRENT_PROGRESS_LABEL));
    assert!(chart.contains(GOAL_HOURS_LABEL));
    assert!(chart.contains("25.00% done, 3.00h to go"));
    assert_eq!(chart.matches('█').count(), 5 + 20);
}
