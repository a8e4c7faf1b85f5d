//! Error types for the Appraise core library.
//!
//! This module defines the domain errors shared by the calculators,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core domain violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A cash-flow series must contain at least the initial period.
    #[error("Invalid cash flow series: the series is empty")]
    EmptySeries,

    /// Cash-flow amounts must be finite numbers.
    #[error("Invalid cash flow at period {period}: {value} is not a finite amount")]
    NonFiniteAmount {
        /// Period index of the offending entry.
        period: usize,
        /// The non-finite value.
        value: f64,
    },

    /// Discounting at a rate of exactly -100% divides by zero.
    #[error("Invalid discount rate: {value} makes the discount factor undefined")]
    DegenerateRate {
        /// The rejected rate.
        value: f64,
    },

    /// Scenario input violated a caller-boundary constraint.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the constraint violation.
        reason: String,
    },
}

impl CoreError {
    /// Creates a non-finite amount error.
    #[must_use]
    pub fn non_finite_amount(period: usize, value: f64) -> Self {
        Self::NonFiniteAmount { period, value }
    }

    /// Creates a degenerate rate error.
    #[must_use]
    pub fn degenerate_rate(value: f64) -> Self {
        Self::DegenerateRate { value }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
