//! Core error types for the incentive planner.
//!
//! Duration input never produces an error (it is clamped instead). Errors
//! here come from rejected form input and from calendar arithmetic that
//! leaves chrono's representable range.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::incentives::FormStep;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the incentive planner.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Schedule calculation failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid market: {0}")]
    InvalidMarket(String),

    #[error("Reward amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Start date {date} is not allowed; earliest start is {earliest}")]
    StartDateNotAllowed { date: String, earliest: String },

    #[error("Cannot {action} while the form is at step {step:?}")]
    InvalidTransition { action: String, step: FormStep },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Failed to parse date: {0}")]
    DateTimeParse(#[from] ChronoParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by calendar arithmetic.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Date arithmetic out of range: {0}")]
    OutOfRange(String),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
