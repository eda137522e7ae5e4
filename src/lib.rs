//! Time-clock (ponto) accounting engine.
//!
//! This crate turns a month of daily clock punches into categorized worked
//! minutes (normal, overtime 50%, overtime 100%, night differential) and the
//! matching monetary amounts, with holiday and cross-midnight handling. It
//! also carries the holiday calendar, attendance helpers, the monthly
//! timesheet report model and an HTTP API over all of it.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
pub mod report;
