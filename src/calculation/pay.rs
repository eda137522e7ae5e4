//! Monetary conversion of classified minutes.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{MinuteTotals, PayBreakdown, RateTable};

use super::options::RateMultipliers;

/// Derives the per-minute rates from a monthly salary.
///
/// `hourly = salary / divisor`, `per_minute = hourly / 60`, and the two
/// overtime rates and the night multiplier follow from `multipliers`.
/// Amounts keep full decimal precision.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] when the salary is not positive
/// or when the divisor or night-hour factor is not positive. A salary whose
/// derived rates do not fit in a `Decimal` is rejected the same way.
///
/// # Examples
///
/// ```
/// use ponto_engine::calculation::{rate_table, RateMultipliers};
/// use rust_decimal::Decimal;
///
/// let rates = rate_table(Decimal::from(2200), &RateMultipliers::default()).unwrap();
/// assert_eq!(rates.hourly, Decimal::from(10));
/// assert_eq!(rates.extra100, rates.per_minute * Decimal::from(2));
/// ```
pub fn rate_table(base_salary: Decimal, multipliers: &RateMultipliers) -> EngineResult<RateTable> {
    if base_salary <= Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "base_salary",
            format!("must be positive, got {}", base_salary),
        ));
    }
    if multipliers.monthly_hours_divisor <= Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "monthly_hours_divisor",
            format!("must be positive, got {}", multipliers.monthly_hours_divisor),
        ));
    }
    if multipliers.night_hour_factor <= Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "night_hour_factor",
            format!("must be positive, got {}", multipliers.night_hour_factor),
        ));
    }

    let hourly = base_salary
        .checked_div(multipliers.monthly_hours_divisor)
        .ok_or_else(out_of_range)?;
    let per_minute = hourly
        .checked_div(Decimal::from(60))
        .ok_or_else(out_of_range)?;
    let extra50 = per_minute
        .checked_mul(multipliers.extra50)
        .ok_or_else(out_of_range)?;
    let extra100 = per_minute
        .checked_mul(multipliers.extra100)
        .ok_or_else(out_of_range)?;
    let night_multiplier = multipliers
        .night_premium
        .checked_div(multipliers.night_hour_factor)
        .ok_or_else(|| {
            EngineError::invalid_argument("night_premium", "night multiplier out of range")
        })?;

    Ok(RateTable {
        hourly,
        per_minute,
        extra50,
        extra100,
        night_multiplier,
    })
}

/// Overflowing amounts are reported against the salary, the only unbounded
/// monetary input.
fn out_of_range() -> EngineError {
    EngineError::invalid_argument("base_salary", "produces amounts out of range")
}

/// Pay for one bucket, split into the non-night and night portions.
///
/// `night_minutes` must not exceed `minutes`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] naming `base_salary` when an
/// amount overflows.
pub fn bucket_pay(
    minutes: u32,
    night_minutes: u32,
    rate: Decimal,
    night_multiplier: Decimal,
) -> EngineResult<(Decimal, Decimal)> {
    let day = Decimal::from(minutes.saturating_sub(night_minutes))
        .checked_mul(rate)
        .ok_or_else(out_of_range)?;
    let night = Decimal::from(night_minutes)
        .checked_mul(rate)
        .and_then(|amount| amount.checked_mul(night_multiplier))
        .ok_or_else(out_of_range)?;
    Ok((day, night))
}

/// Converts minute totals into the six-way pay split.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] naming `base_salary` when an
/// amount or the total overflows.
pub fn pay_breakdown(totals: &MinuteTotals, rates: &RateTable) -> EngineResult<PayBreakdown> {
    let (normal_non_night, normal_night) = bucket_pay(
        totals.normal,
        totals.night_in_normal,
        rates.per_minute,
        rates.night_multiplier,
    )?;
    let (extra50_non_night, extra50_night) = bucket_pay(
        totals.extra50,
        totals.night_in_extra50,
        rates.extra50,
        rates.night_multiplier,
    )?;
    let (extra100_non_night, extra100_night) = bucket_pay(
        totals.extra100,
        totals.night_in_extra100,
        rates.extra100,
        rates.night_multiplier,
    )?;

    let total_gross = [
        normal_non_night,
        normal_night,
        extra50_non_night,
        extra50_night,
        extra100_non_night,
        extra100_night,
    ]
    .into_iter()
    .try_fold(Decimal::ZERO, Decimal::checked_add)
    .ok_or_else(out_of_range)?;

    Ok(PayBreakdown {
        normal_non_night,
        normal_night,
        extra50_non_night,
        extra50_night,
        extra100_non_night,
        extra100_night,
        total_gross,
    })
}
