//! Payroll result models.
//!
//! This module contains [`PayrollResult`] and its parts: the per-day minute
//! breakdown, the monthly minute totals, the six-way pay split and the rate
//! table the amounts were computed with.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Status;

/// Minutes and pay for one day.
///
/// `normal_minutes + extra50_minutes + extra100_minutes == worked_minutes`
/// and `night_minutes` is the sum of the three `night_in_*` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// The day.
    pub date: NaiveDate,
    /// Attendance status recorded for the day.
    pub status: Status,
    /// Whether the day was treated as a paid holiday.
    pub is_holiday: bool,
    /// Name of the matching holiday, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Total worked minutes.
    pub worked_minutes: u32,
    /// Minutes paid at the plain rate.
    pub normal_minutes: u32,
    /// Overtime minutes paid at 50%.
    pub extra50_minutes: u32,
    /// Overtime minutes paid at 100%.
    pub extra100_minutes: u32,
    /// Minutes inside the night window.
    pub night_minutes: u32,
    /// Night minutes that fell in the normal bucket.
    pub night_in_normal: u32,
    /// Night minutes that fell in the 50% bucket.
    pub night_in_extra50: u32,
    /// Night minutes that fell in the 100% bucket.
    pub night_in_extra100: u32,
    /// Gross amount for the day.
    pub gross: Decimal,
}

/// Monthly minute totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteTotals {
    /// Total worked minutes.
    pub worked: u32,
    /// Total normal minutes.
    pub normal: u32,
    /// Total 50% overtime minutes.
    pub extra50: u32,
    /// Total 100% overtime minutes.
    pub extra100: u32,
    /// Total night minutes across all buckets.
    pub night: u32,
    /// Night minutes inside the normal bucket.
    pub night_in_normal: u32,
    /// Night minutes inside the 50% bucket.
    pub night_in_extra50: u32,
    /// Night minutes inside the 100% bucket.
    pub night_in_extra100: u32,
}

impl MinuteTotals {
    /// Adds one day to the totals.
    pub fn add_day(&mut self, day: &DayBreakdown) {
        self.worked += day.worked_minutes;
        self.normal += day.normal_minutes;
        self.extra50 += day.extra50_minutes;
        self.extra100 += day.extra100_minutes;
        self.night += day.night_minutes;
        self.night_in_normal += day.night_in_normal;
        self.night_in_extra50 += day.night_in_extra50;
        self.night_in_extra100 += day.night_in_extra100;
    }
}

/// Pay per bucket, each split into the non-night and night portions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Normal minutes outside the night window.
    pub normal_non_night: Decimal,
    /// Normal minutes inside the night window.
    pub normal_night: Decimal,
    /// 50% overtime outside the night window.
    pub extra50_non_night: Decimal,
    /// 50% overtime inside the night window.
    pub extra50_night: Decimal,
    /// 100% overtime outside the night window.
    pub extra100_non_night: Decimal,
    /// 100% overtime inside the night window.
    pub extra100_night: Decimal,
    /// Sum of the six amounts above.
    pub total_gross: Decimal,
}

impl PayBreakdown {
    /// Returns a copy with every amount rounded to cents.
    pub fn rounded(&self) -> Self {
        Self {
            normal_non_night: self.normal_non_night.round_dp(2),
            normal_night: self.normal_night.round_dp(2),
            extra50_non_night: self.extra50_non_night.round_dp(2),
            extra50_night: self.extra50_night.round_dp(2),
            extra100_non_night: self.extra100_non_night.round_dp(2),
            extra100_night: self.extra100_night.round_dp(2),
            total_gross: self.total_gross.round_dp(2),
        }
    }
}

/// The rates a payroll was computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base salary divided by the monthly hours divisor.
    pub hourly: Decimal,
    /// Hourly rate divided by 60.
    pub per_minute: Decimal,
    /// Per-minute rate for 50% overtime.
    pub extra50: Decimal,
    /// Per-minute rate for 100% overtime.
    pub extra100: Decimal,
    /// Factor applied on top of any rate for night minutes.
    pub night_multiplier: Decimal,
}

/// The complete result of one monthly calculation.
///
/// Pure derived data: totals always equal the sums over `per_day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Aggregated minutes.
    pub totals: MinuteTotals,
    /// Monetary amounts.
    pub pays: PayBreakdown,
    /// Rates used for the conversion.
    pub rates: RateTable,
    /// Per-day detail, sorted by date.
    pub per_day: Vec<DayBreakdown>,
}

/// A payroll result as returned by the API, with request metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEnvelope {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The calculated payroll.
    pub payroll: PayrollResult,
    /// Calculation duration in microseconds.
    pub duration_us: u64,
}
