//! Core data models for the time-clock engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod payroll_result;
mod punch;

pub use employee::Employee;
pub use holiday::{HolidayDate, HolidayEntry, HolidaySource};
pub use payroll_result::{
    DayBreakdown, MinuteTotals, PayBreakdown, PayrollEnvelope, PayrollResult, RateTable,
};
pub use punch::{DailyPunchRecord, PunchEdit, PunchField, Status};
