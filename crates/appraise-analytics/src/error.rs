//! Error types for the appraisal calculators.
//!
//! Absent-value outcomes (an IRR that does not converge, a payback that is
//! never reached) are NOT errors - they are the tagged arms of
//! [`crate::irr::Irr`] and [`crate::payback::Payback`]. This module covers
//! the genuinely fatal cases: domain violations and numeric overflow.

use thiserror::Error;

use appraise_core::error::CoreError;

/// A specialized Result type for appraisal calculations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during appraisal calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A domain violation detected by the core types.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Discounting produced a non-finite intermediate or final value.
    #[error("Numeric overflow in {operation}")]
    NumericOverflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl AnalyticsError {
    /// Creates a numeric overflow error.
    #[must_use]
    pub fn numeric_overflow(operation: impl Into<String>) -> Self {
        Self::NumericOverflow {
            operation: operation.into(),
        }
    }
}
