//! Payback period calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

use appraise_core::types::CashFlowSeries;

use crate::util::round_2dp;

/// Divisor substituted when the crossing period's cash flow is zero.
///
/// Edge-case policy inherited from the established contract: when the
/// cumulative total first turns non-negative at a period whose own cash
/// flow is zero, the fractional interpolation divides by 1 instead. This
/// is a compatibility rule, not a numerically principled interpolation,
/// and must be preserved exactly.
pub const ZERO_DIVISOR_SUBSTITUTE: f64 = 1.0;

/// Outcome of a payback period calculation.
///
/// A series whose cumulative total never turns non-negative has no
/// payback; that is an expected outcome, not an error, and it is never
/// silently reported as zero periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Payback {
    /// Cumulative cash flow reached zero within the series.
    Recovered {
        /// Fractional period count, rounded to 2 decimal places.
        periods: f64,
    },
    /// Cumulative cash flow stayed negative across the whole series.
    NeverRecovered,
}

impl Payback {
    /// Returns true if the investment is recovered within the series.
    #[must_use]
    pub fn is_recovered(&self) -> bool {
        matches!(self, Payback::Recovered { .. })
    }

    /// Returns the fractional period count, if recovery happens.
    #[must_use]
    pub fn periods(&self) -> Option<f64> {
        match self {
            Payback::Recovered { periods } => Some(*periods),
            Payback::NeverRecovered => None,
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Recovered { periods } => write!(f, "{periods:.2} years"),
            Payback::NeverRecovered => write!(f, "not recovered within the forecast horizon"),
        }
    }
}

/// Calculates the payback period of a cash-flow series.
///
/// Scans periods in order, accumulating undiscounted cash flow. At the
/// first period `i` where the running total reaches zero or above, the
/// fractional payback is `i + (cumulative - cashflow[i]) / cashflow[i]`,
/// rounded to 2 decimal places, with [`ZERO_DIVISOR_SUBSTITUTE`] standing
/// in for a zero divisor.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::payback::{payback, Payback};
/// use appraise_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-1000.0, 400.0, 400.0, 400.0, 400.0]).unwrap();
/// assert_eq!(payback(&series).periods(), Some(2.5));
///
/// let sunk = CashFlowSeries::new(vec![-1000.0, 100.0, 100.0]).unwrap();
/// assert_eq!(payback(&sunk), Payback::NeverRecovered);
/// ```
pub fn payback(series: &CashFlowSeries) -> Payback {
    let mut cumulative = 0.0;

    for (period, amount) in series.iter() {
        cumulative += amount;
        if cumulative >= 0.0 {
            let divisor = if amount == 0.0 {
                ZERO_DIVISOR_SUBSTITUTE
            } else {
                amount
            };
            let fractional = period as f64 + (cumulative - amount) / divisor;
            return Payback::Recovered {
                periods: round_2dp(fractional),
            };
        }
    }

    Payback::NeverRecovered
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn series(amounts: &[f64]) -> CashFlowSeries {
        CashFlowSeries::new(amounts.to_vec()).unwrap()
    }

    #[test]
    fn test_worked_example() {
        // Cumulative: -1000, -600, -200, +200 -> crossing at period 3,
        // fractional = 3 + (200 - 400) / 400 = 2.50
        let result = payback(&series(&[-1000.0, 400.0, 400.0, 400.0, 400.0]));
        assert_eq!(result.periods(), Some(2.5));
    }

    #[test]
    fn test_never_recovered() {
        let result = payback(&series(&[-1000.0, 100.0, 100.0]));
        assert_eq!(result, Payback::NeverRecovered);
        assert_eq!(result.periods(), None);
    }

    #[test]
    fn test_non_negative_outlay_recovers_immediately() {
        // Period 0 already at or above zero
        let result = payback(&series(&[100.0, 50.0]));
        assert_eq!(result.periods(), Some(0.0));
    }

    #[test]
    fn test_zero_divisor_policy() {
        // A lone zero entry crosses at period 0 with a zero cash flow;
        // the substitute divisor keeps the interpolation defined
        let result = payback(&series(&[0.0]));
        assert_eq!(result.periods(), Some(0.0));
    }

    #[test]
    fn test_exact_recovery_at_period_boundary() {
        // Cumulative hits exactly zero at period 2:
        // fractional = 2 + (0 - 500) / 500 = 1.00
        let result = payback(&series(&[-1000.0, 500.0, 500.0]));
        assert_eq!(result.periods(), Some(1.0));
    }

    #[test]
    fn test_display() {
        let recovered = Payback::Recovered { periods: 2.5 };
        assert_eq!(recovered.to_string(), "2.50 years");
        assert_eq!(
            Payback::NeverRecovered.to_string(),
            "not recovered within the forecast horizon"
        );
    }

    #[test]
    fn test_idempotent() {
        let s = series(&[-1000.0, 400.0, 400.0, 400.0, 400.0]);
        assert_eq!(payback(&s), payback(&s));
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Payback::NeverRecovered).unwrap();
        assert_eq!(json, r#"{"status":"never_recovered"}"#);
    }

    proptest! {
        #[test]
        fn prop_recovered_periods_bounded(
            amounts in proptest::collection::vec(-1e6f64..1e6, 1..16)
        ) {
            let s = CashFlowSeries::new(amounts.clone()).unwrap();
            if let Payback::Recovered { periods } = payback(&s) {
                // Fractional interpolation backs off at most one period
                // from the crossing index
                prop_assert!(periods >= -1.0);
                prop_assert!(periods <= (amounts.len() - 1) as f64);
            }
        }

        #[test]
        fn prop_all_negative_never_recovers(
            amounts in proptest::collection::vec(-1e6f64..-1.0, 1..16)
        ) {
            let s = CashFlowSeries::new(amounts.clone()).unwrap();
            prop_assert_eq!(payback(&s), Payback::NeverRecovered);
        }
    }
}
