//! Root-finding algorithms.
//!
//! This module provides the bounded Newton-Raphson iteration used by the
//! IRR calculator:
//!
//! - [`newton_raphson`]: quadratic convergence when a derivative is available
//! - [`newton_raphson_numerical`]: central-difference derivative estimate
//!
//! Both variants run inside an explicit iteration budget and return a
//! typed error on exhaustion, so a flat derivative or an oscillating
//! objective can never hang the caller.
//!
//! # Example: rate that zeroes a present value
//!
//! ```rust
//! use appraise_math::solvers::{newton_raphson_numerical, SolverConfig};
//!
//! // Outlay of 1000 followed by four inflows of 400
//! let f = |r: f64| {
//!     -1000.0 + (1..=4).map(|t| 400.0 / (1.0 + r).powi(t)).sum::<f64>()
//! };
//!
//! let result = newton_raphson_numerical(f, 0.1, &SolverConfig::default()).unwrap();
//! assert!(f(result.root).abs() < 1e-9);
//! ```

mod newton;

pub use newton::{newton_raphson, newton_raphson_numerical};

/// Default residual tolerance for root-finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Default maximum iterations for root-finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
}
