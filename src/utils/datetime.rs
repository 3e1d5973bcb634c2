//! Date and time utility functions
//!
//! This module provides parsing for the form inputs (dates, times, weekdays)
//! and human-readable formatting for deadlines shown in lists.

use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use std::fmt::Write;

/// Storage format for deadlines
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for class times
pub const TIME_FORMAT: &str = "%H:%M";

/// Weekdays in the order they are offered by the class form
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
}

/// Parse a time string in HH:MM format to NaiveTime
pub fn parse_time(time_str: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(time_str.trim(), TIME_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format a NaiveTime to HH:MM string
pub fn format_hm(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Format a date with a user-supplied pattern, falling back to YYYY-MM-DD when
/// the pattern asks for fields a date does not have
pub fn format_date_with(d: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", d.format(pattern)) {
        Ok(()) => out,
        Err(_) => format_ymd(d),
    }
}

/// Format a time with a user-supplied pattern, falling back to HH:MM
pub fn format_time_with(t: NaiveTime, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", t.format(pattern)) {
        Ok(()) => out,
        Err(_) => format_hm(t),
    }
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Describe a deadline relative to `today` ("today", "tomorrow", "in 3 days", "2 days ago")
pub fn format_relative(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        diff if diff > 1 => format!("in {} days", diff),
        diff => format!("{} days ago", -diff),
    }
}

/// Get a human-readable weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full weekday name ("Monday") case-insensitively
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|day| weekday_name(*day).eq_ignore_ascii_case(name))
}

/// Serde adapter storing a weekday as its full English name
pub mod weekday_serde {
    use super::{parse_weekday, weekday_name};
    use chrono::Weekday;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_weekday(&raw).ok_or_else(|| D::Error::custom(format!("unknown weekday '{}'", raw)))
    }
}

/// Serde adapter storing a time of day as HH:MM
pub mod time_serde {
    use super::{format_hm, parse_time};
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_hm(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(|e| D::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}
