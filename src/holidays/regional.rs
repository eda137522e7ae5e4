//! Parser for the regional holiday text configuration.
//!
//! Users type one holiday per line:
//!
//! ```text
//! 2025-01-20 - São Sebastião
//! 20/01 - São Sebastião
//! 20/01/2025 - São Sebastião
//! ```
//!
//! `DD/MM` lines repeat every year. A line without a name gets
//! [`DEFAULT_REGIONAL_NAME`].

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{HolidayDate, HolidayEntry};

/// Name given to a regional holiday line that carries only a date.
pub const DEFAULT_REGIONAL_NAME: &str = "Feriado Local";

/// Parses the date part of a holiday line.
///
/// Accepts `YYYY-MM-DD`, `DD/MM/YYYY` and `DD/MM`. A recurring `29/02` is
/// accepted.
pub fn parse_holiday_date(raw: &str) -> Option<HolidayDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(HolidayDate::Exact(date));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        return Some(HolidayDate::Exact(date));
    }

    let (day, month) = raw.split_once('/')?;
    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    // validate against a leap year so 29/02 is allowed
    NaiveDate::from_ymd_opt(2000, month, day)?;
    Some(HolidayDate::Recurring { day, month })
}

/// Parses one line into a regional holiday entry.
///
/// Returns `None` for blank lines and lines whose date part cannot be read.
pub fn parse_regional_line(line: &str) -> Option<HolidayEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (date_part, name_part) = match line.split_once(" - ") {
        Some((date, name)) => (date, name),
        None => match line.split_once(char::is_whitespace) {
            Some((date, name)) => (date, name.trim_start().trim_start_matches('-')),
            None => (line, ""),
        },
    };

    let date = parse_holiday_date(date_part)?;
    let name = match name_part.trim() {
        "" => DEFAULT_REGIONAL_NAME,
        name => name,
    };
    Some(HolidayEntry::regional(date, name))
}

/// Parses the regional holiday configuration text.
///
/// Blank lines are ignored. Lines that cannot be parsed are logged and
/// skipped.
///
/// # Examples
///
/// ```
/// use ponto_engine::holidays::parse_regional_holidays;
/// use ponto_engine::models::HolidayDate;
///
/// let entries = parse_regional_holidays("20/01 - São Sebastião\n2025-07-09");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].date, HolidayDate::Recurring { day: 20, month: 1 });
/// assert_eq!(entries[1].name, "Feriado Local");
/// ```
pub fn parse_regional_holidays(text: &str) -> Vec<HolidayEntry> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let entry = parse_regional_line(line);
            if entry.is_none() {
                warn!(line = index + 1, content = %line.trim(), "Skipping unparsable holiday line");
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidaySource;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_line() {
        let entry = parse_regional_line("2025-01-20 - São Sebastião").unwrap();
        assert_eq!(entry.date, HolidayDate::Exact(make_date(2025, 1, 20)));
        assert_eq!(entry.name, "São Sebastião");
        assert_eq!(entry.source, HolidaySource::Regional);
    }

    #[test]
    fn test_day_month_line_recurs() {
        let entry = parse_regional_line("20/01 - São Sebastião").unwrap();
        assert_eq!(entry.date, HolidayDate::Recurring { day: 20, month: 1 });
    }

    #[test]
    fn test_full_brazilian_date_line() {
        let entry = parse_regional_line("09/07/2025 - Revolução Constitucionalista").unwrap();
        assert_eq!(entry.date, HolidayDate::Exact(make_date(2025, 7, 9)));
        assert_eq!(entry.name, "Revolução Constitucionalista");
    }

    #[test]
    fn test_name_with_hyphen_is_kept() {
        let entry = parse_regional_line("2025-06-24 - São João - Padroeiro").unwrap();
        assert_eq!(entry.name, "São João - Padroeiro");
    }

    #[test]
    fn test_whitespace_separator() {
        let entry = parse_regional_line("2025-06-24   -São João").unwrap();
        assert_eq!(entry.name, "São João");

        let entry = parse_regional_line("24/06 Festa Junina").unwrap();
        assert_eq!(entry.name, "Festa Junina");
    }

    #[test]
    fn test_missing_name_defaults() {
        assert_eq!(parse_regional_line("24/06").unwrap().name, DEFAULT_REGIONAL_NAME);
        assert_eq!(parse_regional_line("24/06 - ").unwrap().name, DEFAULT_REGIONAL_NAME);
    }

    #[test]
    fn test_leap_day_recurring() {
        assert_eq!(
            parse_holiday_date("29/02"),
            Some(HolidayDate::Recurring { day: 29, month: 2 })
        );
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert_eq!(parse_holiday_date("32/01"), None);
        assert_eq!(parse_holiday_date("01/13"), None);
        assert_eq!(parse_holiday_date("2025-02-30"), None);
        assert_eq!(parse_holiday_date("amanhã"), None);
    }

    #[test]
    fn test_unparsable_lines_skipped() {
        let text = "\n20/01 - São Sebastião\nnot a date\n\n15/08 - Assunção\n";
        let entries = parse_regional_holidays(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].date, HolidayDate::Recurring { day: 15, month: 8 });
    }
}
