//! Attendance bookkeeping around the daily punch records.
//!
//! This module covers what happens to records outside the payroll
//! calculation: clocking in, grouping a history by month for display, and
//! the automatic day-off stamp for days nobody clocked.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculation::{IncompletePairPolicy, parse_punches, work_segments};
use crate::error::EngineResult;
use crate::models::{DailyPunchRecord, PunchField, Status};

/// Hour of day after which days without punches are stamped as day off.
pub const DEFAULT_DAY_OFF_CUTOFF_HOUR: u32 = 16;

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Portuguese name of a month (1-12), lowercase.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Records a punch at `at`, creating the day's record on the first punch.
///
/// Returns the updated record and the slot that was filled.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::DayAlreadyComplete`] when the day
/// already holds four punches.
pub fn punch_in(
    existing: Option<DailyPunchRecord>,
    at: NaiveDateTime,
) -> EngineResult<(DailyPunchRecord, PunchField)> {
    let mut record = existing.unwrap_or_else(|| DailyPunchRecord::new(at.date()));
    let slot = record.record_punch(at.time())?;
    info!(date = %record.date, slot = %slot, "Punch recorded");
    Ok((record, slot))
}

/// One month of a punch history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    /// `YYYY-MM`.
    pub key: String,
    /// Display label such as `outubro de 2025`.
    pub label: String,
    /// The month's records, sorted by date.
    pub days: Vec<DailyPunchRecord>,
    /// Worked minutes over the month's records.
    pub total_minutes: u32,
}

fn worked_minutes(record: &DailyPunchRecord) -> u32 {
    match parse_punches(record) {
        Ok(punches) => work_segments(&punches, IncompletePairPolicy::default())
            .iter()
            .map(|s| s.length)
            .sum(),
        Err(err) => {
            warn!(date = %record.date, error = %err, "Counting day with bad punch as zero");
            0
        }
    }
}

/// Groups records by calendar month, newest month first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::attendance::group_by_month;
/// use ponto_engine::models::DailyPunchRecord;
///
/// let records = vec![
///     DailyPunchRecord::new(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()),
///     DailyPunchRecord::new(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()),
/// ];
/// let months = group_by_month(&records);
/// assert_eq!(months[0].key, "2025-10");
/// assert_eq!(months[0].label, "outubro de 2025");
/// assert_eq!(months[1].key, "2025-09");
/// ```
pub fn group_by_month(records: &[DailyPunchRecord]) -> Vec<MonthGroup> {
    let mut months: BTreeMap<(i32, u32), Vec<&DailyPunchRecord>> = BTreeMap::new();
    for record in records {
        months
            .entry((record.date.year(), record.date.month()))
            .or_default()
            .push(record);
    }

    months
        .into_iter()
        .rev()
        .map(|((year, month), mut days)| {
            days.sort_by_key(|r| r.date);
            MonthGroup {
                key: format!("{}-{:02}", year, month),
                label: format!("{} de {}", month_name(month).unwrap_or_default(), year),
                total_minutes: days.iter().map(|r| worked_minutes(r)).sum(),
                days: days.into_iter().cloned().collect(),
            }
        })
        .collect()
}

/// Returns true once the day-off sweep may run on `now`'s day.
pub fn day_off_sweep_due(now: NaiveDateTime, cutoff_hour: u32) -> bool {
    now.hour() >= cutoff_hour
}

/// The record to write for a day with no punches: status FOLGA, marked as
/// created automatically.
///
/// Fields already on `existing` are kept. Returns `None` when the day has
/// at least one punch.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::attendance::stamp_day_off;
/// use ponto_engine::models::Status;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
/// let stamped = stamp_day_off(None, date).unwrap();
/// assert_eq!(stamped.status, Status::Folga);
/// assert!(stamped.criado_automaticamente);
/// ```
pub fn stamp_day_off(existing: Option<&DailyPunchRecord>, date: NaiveDate) -> Option<DailyPunchRecord> {
    if existing.is_some_and(DailyPunchRecord::has_any_punch) {
        debug!(%date, "Day has punches, no day-off stamp");
        return None;
    }

    let mut record = existing
        .cloned()
        .unwrap_or_else(|| DailyPunchRecord::new(date));
    record.status = Status::Folga;
    record.criado_automaticamente = true;
    Some(record)
}
