//! CLI error types.

use thiserror::Error;

use appraise_analytics::AnalyticsError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unparseable cash-flow list.
    #[error("Invalid cash flows: {0}. Use a comma-separated list, e.g. \"-1000,400,400\".")]
    InvalidCashFlows(String),

    /// Invalid rate argument.
    #[error("Invalid rate: {0}%. 1 + rate must be nonzero.")]
    InvalidRate(f64),

    /// Calculation error from the analytics layer.
    #[error("Calculation error: {0}")]
    Calculation(#[from] AnalyticsError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
