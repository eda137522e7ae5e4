//! Day and month payroll computation.
//!
//! Each day is computed independently: segments, buckets, night split and
//! the day's gross. The month is the sum of its days, converted to money
//! once with the month's rate table.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{DailyPunchRecord, DayBreakdown, MinuteTotals, PayrollResult, RateTable};

use super::buckets::{MinuteBuckets, classify_minutes};
use super::night::{NightSplit, allocate_night_minutes};
use super::options::PayrollOptions;
use super::pay::{pay_breakdown, rate_table};
use super::segments::{parse_punches, work_segments};

/// Computes the minute breakdown of a single day.
///
/// The returned breakdown carries a zero `gross`; [`compute_monthly_payroll`]
/// fills it in once the rate table is known.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedTimeValue`] if any present
/// punch is not a valid `HH:MM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::calculation::{compute_day, PayrollOptions};
/// use ponto_engine::models::DailyPunchRecord;
///
/// let mut record = DailyPunchRecord::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
/// record.entrada = Some("08:00".to_string());
/// record.intervalo_saida = Some("12:00".to_string());
/// record.intervalo_volta = Some("13:00".to_string());
/// record.saida = Some("18:00".to_string());
///
/// let day = compute_day(&record, &PayrollOptions::default()).unwrap();
/// assert_eq!(day.worked_minutes, 540);
/// assert_eq!(day.normal_minutes, 440);
/// assert_eq!(day.extra50_minutes, 100);
/// assert_eq!(day.night_minutes, 0);
/// ```
pub fn compute_day(record: &DailyPunchRecord, options: &PayrollOptions) -> EngineResult<DayBreakdown> {
    let holiday = options.holidays.lookup(record.date);
    let is_holiday = holiday.is_some();

    let skip_times = options.ignore_times_when_not_ok && !record.status.is_ok();
    let segments = if skip_times {
        debug!(date = %record.date, status = %record.status, "Ignoring punches on non-OK day");
        Vec::new()
    } else {
        let punches = parse_punches(record)?;
        work_segments(&punches, options.incomplete_pair)
    };

    let worked: u32 = segments.iter().map(|s| s.length).sum();
    let buckets = classify_minutes(
        worked,
        options.standard_daily_minutes,
        options.overtime50_cap,
        is_holiday,
    );
    let night = allocate_night_minutes(
        &segments,
        &buckets,
        &options.night_window,
        options.night_allocation,
    );

    debug!(
        date = %record.date,
        worked,
        normal = buckets.normal,
        extra50 = buckets.extra50,
        extra100 = buckets.extra100,
        night = night.total,
        is_holiday,
        "Computed day"
    );

    Ok(breakdown(record, holiday.map(|h| h.name.clone()), buckets, night))
}

fn breakdown(
    record: &DailyPunchRecord,
    holiday_name: Option<String>,
    buckets: MinuteBuckets,
    night: NightSplit,
) -> DayBreakdown {
    DayBreakdown {
        date: record.date,
        status: record.status,
        is_holiday: holiday_name.is_some(),
        holiday_name,
        worked_minutes: buckets.total(),
        normal_minutes: buckets.normal,
        extra50_minutes: buckets.extra50,
        extra100_minutes: buckets.extra100,
        night_minutes: night.total,
        night_in_normal: night.in_normal,
        night_in_extra50: night.in_extra50,
        night_in_extra100: night.in_extra100,
        gross: Decimal::ZERO,
    }
}

fn day_gross(day: &DayBreakdown, rates: &RateTable) -> EngineResult<Decimal> {
    let mut totals = MinuteTotals::default();
    totals.add_day(day);
    Ok(pay_breakdown(&totals, rates)?.total_gross)
}

/// Computes a month of payroll from daily punch records.
///
/// `days` may be sparse and in any order; the per-day detail in the result
/// is sorted by date. When the same date appears twice, both records are
/// computed and kept.
///
/// # Arguments
///
/// * `days` - The month's punch records
/// * `base_salary` - Monthly base salary, must be positive
/// * `options` - Policy parameters and the holiday calendar
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidArgument`] for a non-positive
/// salary, a salary whose amounts overflow, or an invalid rate policy, and
/// [`crate::error::EngineError::MalformedTimeValue`] for a bad punch.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::calculation::{compute_monthly_payroll, PayrollOptions};
/// use ponto_engine::models::DailyPunchRecord;
/// use rust_decimal::Decimal;
///
/// let mut record = DailyPunchRecord::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
/// record.entrada = Some("22:00".to_string());
/// record.saida = Some("06:00".to_string());
///
/// let result = compute_monthly_payroll(&[record], Decimal::from(2200), &PayrollOptions::default())
///     .unwrap();
/// assert_eq!(result.totals.worked, 480);
/// assert_eq!(result.totals.night, 420);
/// ```
pub fn compute_monthly_payroll(
    days: &[DailyPunchRecord],
    base_salary: Decimal,
    options: &PayrollOptions,
) -> EngineResult<PayrollResult> {
    let rates = rate_table(base_salary, &options.rates)?;

    let mut sorted: Vec<&DailyPunchRecord> = days.iter().collect();
    sorted.sort_by_key(|record| record.date);
    if sorted.windows(2).any(|pair| pair[0].date == pair[1].date) {
        warn!(days = days.len(), "Duplicate dates in punch records");
    }

    let mut totals = MinuteTotals::default();
    let mut per_day = Vec::with_capacity(sorted.len());
    for record in sorted {
        let mut day = compute_day(record, options)?;
        day.gross = day_gross(&day, &rates)?;
        totals.add_day(&day);
        per_day.push(day);
    }

    let pays = pay_breakdown(&totals, &rates)?;

    debug!(
        days = per_day.len(),
        worked = totals.worked,
        night = totals.night,
        total_gross = %pays.total_gross,
        "Computed monthly payroll"
    );

    Ok(PayrollResult {
        totals,
        pays,
        rates,
        per_day,
    })
}
