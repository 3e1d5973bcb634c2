use academic_planner::utils::datetime::*;
use chrono::{NaiveDate, NaiveTime, Weekday};

#[test]
fn test_parse_date() {
    let date = parse_date("2025-03-01").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    assert_eq!(parse_date(" 2025-03-01 ").unwrap(), date);
    assert!(parse_date("01/03/2025").is_err());
    assert!(parse_date("2025-02-30").is_err());
}

#[test]
fn test_parse_time() {
    assert_eq!(parse_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    assert!(parse_time("9h30").is_err());
    assert!(parse_time("25:00").is_err());
}

#[test]
fn test_format_ymd_and_hm() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
    let time = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
    assert_eq!(format_hm(time), "14:05");
}

#[test]
fn test_format_with_custom_patterns() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_date_with(date, "%d/%m/%Y"), "15/01/2025");
    // A date has no hour; fall back to the storage format
    assert_eq!(format_date_with(date, "%H"), "2025-01-15");

    let time = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
    assert_eq!(format_time_with(time, "%I:%M %p"), "02:05 PM");
}

#[test]
fn test_format_relative() {
    let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    assert_eq!(format_relative(today, today), "today");
    assert_eq!(format_relative(today.succ_opt().unwrap(), today), "tomorrow");
    assert_eq!(format_relative(today.pred_opt().unwrap(), today), "yesterday");
    assert_eq!(
        format_relative(NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(), today),
        "in 3 days"
    );
    assert_eq!(
        format_relative(NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(), today),
        "2 days ago"
    );
}

#[test]
fn test_weekday_names() {
    for day in WEEKDAYS {
        assert_eq!(parse_weekday(weekday_name(day)), Some(day));
    }
    assert_eq!(parse_weekday("friday"), Some(Weekday::Fri));
    assert_eq!(parse_weekday("Fri"), None);
}
