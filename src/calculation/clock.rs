//! Clock-time parsing and minute arithmetic.
//!
//! Times of day are handled as minutes since midnight (`0..1440`).

use chrono::{NaiveTime, Timelike};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parses a `HH:MM` clock value into minutes since midnight.
///
/// Returns `None` for anything outside `00:00..=23:59`.
///
/// # Examples
///
/// ```
/// use ponto_engine::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("08:30"), Some(510));
/// assert_eq!(parse_clock_time("23:59"), Some(1439));
/// assert_eq!(parse_clock_time("24:00"), None);
/// ```
pub fn parse_clock_time(raw: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

/// Minutes from `start` to `end`, wrapping past midnight when `end < start`.
///
/// Equal endpoints give zero.
pub fn minutes_between(start: u32, end: u32) -> u32 {
    if end >= start {
        end - start
    } else {
        end + MINUTES_PER_DAY - start
    }
}

/// Formats a minute count as `Hh Mm`, the style used in timesheet totals.
///
/// # Examples
///
/// ```
/// use ponto_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(540), "9h 0m");
/// assert_eq!(format_minutes(10_125), "168h 45m");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Formats a minute count as zero-padded `HH:MM`.
pub fn format_minutes_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
