//! Holiday calendar.
//!
//! The calendar merges the national holidays of a year with the regional
//! holidays configured by users. A national entry is never replaced by a
//! regional one for the same date key, and replaces a regional one on
//! conflict.

mod national;
mod regional;

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{HolidayDate, HolidayEntry};

pub use national::{easter_sunday, national_holidays};
pub use regional::{
    DEFAULT_REGIONAL_NAME, parse_holiday_date, parse_regional_holidays, parse_regional_line,
};

/// Holidays keyed by exact date or by recurring day/month.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::holidays::HolidayCalendar;
/// use ponto_engine::models::{HolidayDate, HolidayEntry};
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
/// let mut calendar = HolidayCalendar::default();
/// calendar.insert(HolidayEntry::regional(
///     HolidayDate::Recurring { day: 20, month: 1 },
///     "São Sebastião",
/// ));
/// assert!(calendar.is_holiday(date));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayCalendar {
    entries: HashMap<HolidayDate, HolidayEntry>,
}

impl HolidayCalendar {
    /// Builds the calendar for a year: its national holidays plus the
    /// given regional entries.
    pub fn for_year(year: i32, regional: impl IntoIterator<Item = HolidayEntry>) -> Self {
        let mut calendar = Self::default();
        calendar.extend(national_holidays(year));
        calendar.extend(regional);
        debug!(year, holidays = calendar.len(), "Built holiday calendar");
        calendar
    }

    /// Adds an entry under its date key.
    ///
    /// Returns false when a national entry already holds the key and the
    /// new entry is regional; the existing entry is kept.
    pub fn insert(&mut self, entry: HolidayEntry) -> bool {
        if let Some(existing) = self.entries.get(&entry.date) {
            if existing.is_national() && !entry.is_national() {
                return false;
            }
        }
        self.entries.insert(entry.date, entry);
        true
    }

    /// Inserts every entry in turn.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = HolidayEntry>) {
        for entry in entries {
            self.insert(entry);
        }
    }

    /// Finds the holiday on a date: the exact-date key first, then the
    /// recurring day/month key.
    pub fn lookup(&self, date: NaiveDate) -> Option<&HolidayEntry> {
        self.entries.get(&HolidayDate::Exact(date)).or_else(|| {
            self.entries.get(&HolidayDate::Recurring {
                day: date.day(),
                month: date.month(),
            })
        })
    }

    /// Returns true if the date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.lookup(date).is_some()
    }

    /// Every holiday falling in a month, sorted by day.
    ///
    /// An invalid month yields an empty list.
    pub fn holidays_in_month(&self, year: i32, month: u32) -> Vec<(NaiveDate, &HolidayEntry)> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|date| date.month() == month)
            .filter_map(|date| self.lookup(date).map(|entry| (date, entry)))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the calendar has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &HolidayEntry> {
        self.entries.values()
    }
}

impl FromIterator<HolidayEntry> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = HolidayEntry>>(iter: I) -> Self {
        let mut calendar = Self::default();
        calendar.extend(iter);
        calendar
    }
}
