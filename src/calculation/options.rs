//! Policy parameters for the payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holidays::HolidayCalendar;

use super::buckets::{DEFAULT_OVERTIME50_CAP, DEFAULT_STANDARD_DAILY_MINUTES};
use super::window::TimeWindow;

/// What to do when only one punch of a pair is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompletePairPolicy {
    /// The incomplete segment contributes nothing.
    #[default]
    DropSegment,
    /// If a pair is incomplete but both `entrada` and `saida` exist, the
    /// whole day is counted as one segment from `entrada` to `saida`.
    SpanEntradaToSaida,
}

/// How night minutes are attributed to the pay buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightAllocation {
    /// Each bucket gets exactly the night minutes inside the stretch of
    /// time it consumed.
    #[default]
    Chronological,
    /// Each bucket gets a rounded share of a piece's night minutes in
    /// proportion to how much of the piece it consumed; the rounding
    /// residual goes to the last bucket consuming from that piece.
    Proportional,
}

/// Monetary conversion constants.
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateMultipliers {
    /// Hours in a contractual month; the salary is divided by this.
    pub monthly_hours_divisor: Decimal,
    /// Multiplier for overtime paid at 50%.
    pub extra50: Decimal,
    /// Multiplier for overtime paid at 100%.
    pub extra100: Decimal,
    /// Night premium numerator (1.2 for a 20% premium).
    pub night_premium: Decimal,
    /// Length of a legal night hour in clock hours (52m30s = 0.875).
    pub night_hour_factor: Decimal,
}

impl Default for RateMultipliers {
    fn default() -> Self {
        Self {
            monthly_hours_divisor: Decimal::from(220),
            extra50: Decimal::new(15, 1),
            extra100: Decimal::new(20, 1),
            night_premium: Decimal::new(12, 1),
            night_hour_factor: Decimal::new(875, 3),
        }
    }
}

/// All inputs to a payroll calculation besides the punches and salary.
///
/// # Example
///
/// ```
/// use ponto_engine::calculation::{IncompletePairPolicy, PayrollOptions};
///
/// let options = PayrollOptions {
///     incomplete_pair: IncompletePairPolicy::SpanEntradaToSaida,
///     ..PayrollOptions::default()
/// };
/// assert_eq!(options.standard_daily_minutes, 440);
/// assert_eq!(options.night_window.start, 22 * 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollOptions {
    /// Minutes in a standard working day.
    pub standard_daily_minutes: u32,
    /// The night-differential window.
    pub night_window: TimeWindow,
    /// Daily overtime minutes paid at 50% before the 100% tier.
    pub overtime50_cap: u32,
    /// Holidays that trigger the 100% override.
    pub holidays: HolidayCalendar,
    /// Handling of lone punches.
    pub incomplete_pair: IncompletePairPolicy,
    /// Night-minute attribution mode.
    pub night_allocation: NightAllocation,
    /// When set, days whose status is not OK count zero minutes.
    pub ignore_times_when_not_ok: bool,
    /// Monetary conversion constants.
    pub rates: RateMultipliers,
}

/// The default night window, 22:00 through 04:59.
pub const DEFAULT_NIGHT_WINDOW: TimeWindow = TimeWindow {
    start: 22 * 60,
    end_inclusive: 4 * 60 + 59,
};

impl Default for PayrollOptions {
    fn default() -> Self {
        Self {
            standard_daily_minutes: DEFAULT_STANDARD_DAILY_MINUTES,
            night_window: DEFAULT_NIGHT_WINDOW,
            overtime50_cap: DEFAULT_OVERTIME50_CAP,
            holidays: HolidayCalendar::default(),
            incomplete_pair: IncompletePairPolicy::default(),
            night_allocation: NightAllocation::default(),
            ignore_times_when_not_ok: false,
            rates: RateMultipliers::default(),
        }
    }
}

impl PayrollOptions {
    /// Returns these options with a different holiday calendar.
    pub fn with_holidays(mut self, holidays: HolidayCalendar) -> Self {
        self.holidays = holidays;
        self
    }
}
