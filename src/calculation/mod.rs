//! Calculation logic for the Ponto Engine.
//!
//! This module turns daily punch records into classified minutes and pay:
//! clock parsing and wrap-aware ranges, work segmentation, the daily
//! overtime buckets with the holiday override, night-differential
//! allocation, and the monetary conversion.

mod buckets;
mod clock;
mod engine;
mod night;
mod options;
mod pay;
mod segments;
mod window;

pub use buckets::{
    DEFAULT_OVERTIME50_CAP, DEFAULT_STANDARD_DAILY_MINUTES, MinuteBuckets, classify_minutes,
};
pub use clock::{MINUTES_PER_DAY, format_minutes, format_minutes_hhmm, minutes_between, parse_clock_time};
pub use engine::{compute_day, compute_monthly_payroll};
pub use night::{NightSplit, allocate_night_minutes};
pub use options::{
    DEFAULT_NIGHT_WINDOW, IncompletePairPolicy, NightAllocation, PayrollOptions, RateMultipliers,
};
pub use pay::{bucket_pay, pay_breakdown, rate_table};
pub use segments::{ParsedPunches, parse_punches, work_segments};
pub use window::{MinuteRange, TimeWindow, WorkSegment};
