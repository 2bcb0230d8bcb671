//! Time utilities: parsing HH:MM, minutes since midnight, formatting slots.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse `HH:MM` into minutes since midnight, tagging errors with the field name.
pub fn to_minutes(value: &str, field: &'static str) -> AppResult<u32> {
    let t = parse_time(value).ok_or_else(|| AppError::MalformedTime {
        field,
        value: value.to_string(),
    })?;
    Ok(t.hour() * 60 + t.minute())
}

/// Minutes since midnight → zero-padded `HH:MM`.
pub fn format_hhmm(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
