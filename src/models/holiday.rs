//! Holiday entry model.
//!
//! This module contains the [`HolidayEntry`] type and its date forms. The
//! calendar that merges and looks up entries lives in
//! [`crate::holidays`].

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Where a holiday entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidaySource {
    /// Country-wide holiday from the national feed.
    National,
    /// Municipal, state or store-specific holiday configured by a user.
    Regional,
}

impl HolidaySource {
    /// The label printed next to the holiday on timesheets.
    pub fn label(self) -> &'static str {
        match self {
            HolidaySource::National => "Nacional",
            HolidaySource::Regional => "Regional",
        }
    }
}

/// The date of a holiday: one exact day, or a day/month repeating yearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayDate {
    /// A specific calendar date.
    Exact(NaiveDate),
    /// The same day and month every year.
    Recurring {
        /// Day of month (1-31).
        day: u32,
        /// Month (1-12).
        month: u32,
    },
}

impl HolidayDate {
    /// The day/month pair, regardless of form.
    pub fn day_month(&self) -> (u32, u32) {
        match *self {
            HolidayDate::Exact(date) => (date.day(), date.month()),
            HolidayDate::Recurring { day, month } => (day, month),
        }
    }

    /// Returns true if the holiday falls on the given date.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            HolidayDate::Exact(d) => d == date,
            HolidayDate::Recurring { day, month } => date.day() == day && date.month() == month,
        }
    }
}

impl fmt::Display for HolidayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayDate::Exact(date) => write!(f, "{}", date.format("%d/%m/%Y")),
            HolidayDate::Recurring { day, month } => write!(f, "{:02}/{:02}", day, month),
        }
    }
}

/// A named date that marks a day as a paid holiday.
///
/// # Example
///
/// ```
/// use ponto_engine::models::{HolidayDate, HolidayEntry, HolidaySource};
/// use chrono::NaiveDate;
///
/// let christmas = HolidayEntry {
///     date: HolidayDate::Recurring { day: 25, month: 12 },
///     name: "Natal".to_string(),
///     source: HolidaySource::Regional,
/// };
/// assert!(christmas.date.matches(NaiveDate::from_ymd_opt(2031, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// When the holiday happens.
    pub date: HolidayDate,
    /// The holiday name.
    pub name: String,
    /// Where the entry came from.
    pub source: HolidaySource,
}

impl HolidayEntry {
    /// Creates a national holiday on an exact date.
    pub fn national(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date: HolidayDate::Exact(date),
            name: name.into(),
            source: HolidaySource::National,
        }
    }

    /// Creates a regional holiday.
    pub fn regional(date: HolidayDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            source: HolidaySource::Regional,
        }
    }

    /// Returns true for national entries.
    pub fn is_national(&self) -> bool {
        self.source == HolidaySource::National
    }
}
