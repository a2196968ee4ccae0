//! Error types for the Salary Breakdown Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation itself is a total function and never fails; these errors
//! exist for the input boundary, where a caller-supplied pay structure can
//! be rejected before it reaches the calculator.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Salary Breakdown Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidCtc {
///     value: Decimal::ZERO,
///     message: "annual CTC must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid annual CTC '0': annual CTC must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The annual CTC figure was not a usable salary amount.
    #[error("Invalid annual CTC '{value}': {message}")]
    InvalidCtc {
        /// The CTC value that was rejected.
        value: Decimal,
        /// A description of why the value was rejected.
        message: String,
    },

    /// A split percentage was outside the 0-100 range.
    #[error("Invalid percentage for '{field}': {value} is not between 0 and 100")]
    InvalidPercent {
        /// The field that carried the out-of-range percentage.
        field: String,
        /// The percentage value that was rejected.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
