//! HTTP API module for the Ponto Engine.
//!
//! This module exposes the payroll calculation and the monthly timesheet
//! report over REST:
//!
//! - `POST /payroll`: punch records in, payroll envelope out.
//! - `POST /report`: the same plus a year and month, timesheet out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, PolicyOverrides, RegionalHolidayRequest, ReportRequest};
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
