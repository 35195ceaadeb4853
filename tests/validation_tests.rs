use chrono::{NaiveDate, NaiveTime};
use codetracker::core::validate::{
    DATE_FORMATS, Validated, id_set, validate_date_or_exit, validate_hours, validate_hours_input,
    validate_id, validate_month_or_exit, validate_time_or_exit, validate_year_or_exit,
};
use codetracker::models::MonthName;

fn known() -> std::collections::HashSet<String> {
    id_set([0, 1, 3, 4, 5, 6, 7])
}

#[test]
fn test_validate_id_known_and_unknown() {
    let ids = known();
    assert_eq!(validate_id("1", &ids), Validated::Value(1));
    assert_eq!(validate_id(" 7 ", &ids), Validated::Value(7));
    assert!(!validate_id("2", &ids).is_successful());
    assert!(!validate_id("one", &ids).is_successful());
    assert!(!validate_id("-1", &ids).is_successful());
}

#[test]
fn test_validate_id_empty_and_exit() {
    let ids = known();
    assert!(!validate_id("", &ids).is_successful());
    assert!(!validate_id("   ", &ids).is_successful());

    let exit = validate_id("e", &ids);
    assert!(exit.is_successful());
    assert!(exit.is_exit());
    assert!(validate_id("E", &id_set([])).is_exit());
}

#[test]
fn test_validate_hours() {
    assert_eq!(validate_hours(1), Validated::Value(1));
    assert_eq!(validate_hours(120), Validated::Value(120));
    assert!(!validate_hours(0).is_successful());
    assert!(!validate_hours(-1).is_successful());
}

#[test]
fn test_validate_hours_input_text() {
    assert_eq!(validate_hours_input("12"), Validated::Value(12));
    assert!(validate_hours_input("e").is_exit());
    assert!(!validate_hours_input("0").is_successful());
    assert!(!validate_hours_input("ten").is_successful());
    assert!(!validate_hours_input("1.5").is_successful());
}

#[test]
fn test_validate_time_or_exit() {
    assert_eq!(
        validate_time_or_exit("11:11"),
        Validated::Value(NaiveTime::from_hms_opt(11, 11, 0).unwrap())
    );
    assert!(!validate_time_or_exit("34:12").is_successful());
    assert!(!validate_time_or_exit("23:59:60").is_successful());
    assert!(!validate_time_or_exit("11:59:60 PM").is_successful());
    assert!(validate_time_or_exit("e").is_exit());
    assert!(!validate_time_or_exit("").is_successful());
}

#[test]
fn test_validate_time_accepts_seconds_and_am_pm() {
    assert_eq!(
        validate_time_or_exit("23:05:09").value(),
        NaiveTime::from_hms_opt(23, 5, 9)
    );
    assert_eq!(
        validate_time_or_exit("02:30 PM").value(),
        NaiveTime::from_hms_opt(14, 30, 0)
    );
    assert_eq!(
        validate_time_or_exit("12:00:01 AM").value(),
        NaiveTime::from_hms_opt(0, 0, 1)
    );
    assert!(!validate_time_or_exit("noon").is_successful());
}

#[test]
fn test_validate_date_or_exit() {
    assert_eq!(
        validate_date_or_exit("2024-09-01", &DATE_FORMATS),
        Validated::Value(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())
    );
    assert!(!validate_date_or_exit("2024-23-12", &DATE_FORMATS).is_successful());
    assert_eq!(
        validate_date_or_exit("03-15-2024", &DATE_FORMATS).value(),
        NaiveDate::from_ymd_opt(2024, 3, 15)
    );
    assert!(validate_date_or_exit("e", &DATE_FORMATS).is_exit());
}

#[test]
fn test_validate_date_format_order_and_strictness() {
    // not a valid MM-dd-yyyy, falls through to dd-MM-yyyy
    assert_eq!(
        validate_date_or_exit("20-08-2023", &DATE_FORMATS).value(),
        NaiveDate::from_ymd_opt(2023, 8, 20)
    );
    // both readings are valid: the first format wins
    assert_eq!(
        validate_date_or_exit("04-05-2024", &DATE_FORMATS).value(),
        NaiveDate::from_ymd_opt(2024, 4, 5)
    );
    assert!(!validate_date_or_exit("September 1,2024", &DATE_FORMATS).is_successful());
    assert!(!validate_date_or_exit("2024-9-1", &DATE_FORMATS).is_successful());
    assert!(!validate_date_or_exit("", &DATE_FORMATS).is_successful());
}

#[test]
fn test_validate_date_respects_given_formats() {
    assert!(!validate_date_or_exit("03-15-2024", &["%Y-%m-%d"]).is_successful());
    assert!(validate_date_or_exit("2024-03-15", &["%Y-%m-%d"]).is_successful());
}

#[test]
fn test_validate_month_names_and_numbers() {
    assert_eq!(validate_month_or_exit("September"), Validated::Value(MonthName::September));
    assert_eq!(validate_month_or_exit("march"), Validated::Value(MonthName::March));
    assert_eq!(validate_month_or_exit("12"), Validated::Value(MonthName::December));
    assert!(validate_month_or_exit("e").is_exit());
    assert!(!validate_month_or_exit("13").is_successful());
    assert!(!validate_month_or_exit("Sept").is_successful());
}

#[test]
fn test_validate_year() {
    assert_eq!(validate_year_or_exit("2024"), Validated::Value(2024));
    assert!(validate_year_or_exit("e").is_exit());
    assert!(!validate_year_or_exit("0").is_successful());
    assert!(!validate_year_or_exit("twenty").is_successful());
}

#[test]
fn test_into_result() {
    use codetracker::errors::AppError;

    assert_eq!(
        validate_hours_input("3").into_result(AppError::InvalidHours).unwrap(),
        Some(3)
    );
    assert_eq!(
        validate_hours_input("e").into_result(AppError::InvalidHours).unwrap(),
        None
    );
    assert!(matches!(
        validate_hours_input("0").into_result(AppError::InvalidHours),
        Err(AppError::InvalidHours(_))
    ));
}
