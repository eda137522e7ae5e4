//! Error types for the time-clock engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few conditions the engine refuses to absorb as policy: bad
//! arguments, malformed clock values and configuration failures.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the time-clock engine.
///
/// Missing punches, unordered punches and incomplete pairs are never errors;
/// they degrade to zero minutes. Only the variants below are surfaced.
///
/// # Example
///
/// ```
/// use ponto_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     argument: "base_salary".to_string(),
///     message: "must be positive".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'base_salary': must be positive");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An argument or policy parameter was outside its valid range.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// A punch field did not parse as a `HH:MM` time in `[00:00, 23:59]`.
    #[error("Malformed time value '{value}' in field '{field}' on {date}")]
    MalformedTimeValue {
        /// The day the record belongs to.
        date: NaiveDate,
        /// The punch field holding the bad value.
        field: String,
        /// The raw value as received.
        value: String,
    },

    /// All four punch slots of the day are already filled.
    #[error("All punches already recorded on {date}")]
    DayAlreadyComplete {
        /// The day that has no free slot left.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}
