//! Error types for root-finding operations.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root-finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The iteration budget was exhausted before the residual fell
    /// below tolerance.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// The derivative vanished at the current iterate, so no Newton
    /// step exists.
    #[error("Singular derivative: {value:.2e} at x = {at}")]
    SingularDerivative {
        /// The near-zero derivative value.
        value: f64,
        /// The iterate where the derivative vanished.
        at: f64,
    },

    /// The objective evaluated to NaN or infinity at the current iterate.
    #[error("Objective is not finite at x = {at}")]
    NonFiniteEvaluation {
        /// The iterate where evaluation failed.
        at: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a singular derivative error.
    #[must_use]
    pub fn singular_derivative(value: f64, at: f64) -> Self {
        Self::SingularDerivative { value, at }
    }
}
