//! Internal rate of return calculation.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use appraise_core::types::CashFlowSeries;
use appraise_math::solvers::{newton_raphson_numerical, SolverConfig};

use crate::util::round_2dp;

/// Fixed starting guess for the IRR search (10%).
pub const IRR_INITIAL_GUESS: f64 = 0.10;

/// Outcome of an IRR calculation.
///
/// Non-convergence is an expected, recoverable outcome - a series with no
/// real root, a flat derivative, or an oscillating iteration all land
/// here - so it is an enum arm rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Irr {
    /// The solver found the rate that zeroes the NPV.
    Converged {
        /// The rate as a percentage, rounded to 2 decimal places.
        rate_pct: f64,
        /// Iterations the solver used.
        iterations: u32,
    },
    /// The solver exhausted its budget or the series admits no rate.
    NotConverged,
}

impl Irr {
    /// Returns true if a rate was found.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Irr::Converged { .. })
    }

    /// Returns the rate as a percentage, if one was found.
    #[must_use]
    pub fn rate_pct(&self) -> Option<f64> {
        match self {
            Irr::Converged { rate_pct, .. } => Some(*rate_pct),
            Irr::NotConverged => None,
        }
    }
}

impl fmt::Display for Irr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Irr::Converged { rate_pct, .. } => write!(f, "{rate_pct:.2}%"),
            Irr::NotConverged => write!(f, "could not be calculated"),
        }
    }
}

/// Calculates the internal rate of return of a cash-flow series.
///
/// Runs Newton-Raphson iteration on `f(r) = sum(cashflow[i] / (1+r)^i)`
/// from a fixed 10% starting guess with the default iteration budget.
/// Zero-valued entries are skipped when evaluating the objective; a zero
/// term contributes nothing to the sum, so the roots are unchanged, but
/// the convention is part of the established contract and is preserved.
///
/// A series whose entries never change sign admits no finite rate, so
/// the solver is not run at all and [`Irr::NotConverged`] is returned
/// directly.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::irr::{irr, Irr};
/// use appraise_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-1000.0, 1100.0]).unwrap();
/// assert_eq!(irr(&series).rate_pct(), Some(10.0));
///
/// let all_positive = CashFlowSeries::new(vec![100.0, 50.0, 50.0]).unwrap();
/// assert_eq!(irr(&all_positive), Irr::NotConverged);
/// ```
pub fn irr(series: &CashFlowSeries) -> Irr {
    irr_with_config(series, &SolverConfig::default())
}

/// Calculates the IRR with an explicit solver configuration.
///
/// The result is deterministic for a fixed configuration: identical
/// inputs produce identical outcomes.
pub fn irr_with_config(series: &CashFlowSeries, config: &SolverConfig) -> Irr {
    if series.sign_changes() == 0 {
        debug!("irr: series has no sign change, no finite rate exists");
        return Irr::NotConverged;
    }

    // Zero entries are skipped by convention; see the function docs
    let objective = |rate: f64| {
        series
            .iter()
            .filter(|&(_, amount)| amount != 0.0)
            .map(|(period, amount)| amount / (1.0 + rate).powi(period as i32))
            .sum::<f64>()
    };

    match newton_raphson_numerical(objective, IRR_INITIAL_GUESS, config) {
        Ok(result) => Irr::Converged {
            rate_pct: round_2dp(result.root * 100.0),
            iterations: result.iterations,
        },
        Err(err) => {
            debug!("irr: solver failed: {err}");
            Irr::NotConverged
        }
    }
}
