//! Small utility helpers for config parsing and time formatting.

pub mod config;

use chrono::{DateTime, TimeZone};

/// What: Format a timestamp the way log lines carry it.
///
/// Inputs:
/// - `t`: Point in time, in any zone.
///
/// Output:
/// - `YYYY-MM-DD-T HH:MM:SS` in the timestamp's own zone.
#[must_use]
pub fn log_timestamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%Y-%m-%d-T %H:%M:%S").to_string()
}
