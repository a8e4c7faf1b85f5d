//! Cash flow series type for investment appraisal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// An ordered series of per-period net cash flows.
///
/// Index 0 conventionally holds the initial outlay (zero or negative);
/// indices 1..N hold the subsequent-period net flows. Insertion order is
/// chronological period order. The series is guaranteed non-empty and
/// finite by construction.
///
/// # Example
///
/// ```rust
/// use appraise_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-1000.0, 500.0, 500.0, 500.0]).unwrap();
/// assert_eq!(series.initial_outlay(), -1000.0);
/// assert_eq!(series.total(), 500.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowSeries {
    /// Per-period amounts, index = period
    amounts: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a new cash flow series.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySeries`] for an empty vector and
    /// [`CoreError::NonFiniteAmount`] if any entry is NaN or infinite.
    pub fn new(amounts: Vec<f64>) -> CoreResult<Self> {
        if amounts.is_empty() {
            return Err(CoreError::EmptySeries);
        }
        for (period, &value) in amounts.iter().enumerate() {
            if !value.is_finite() {
                return Err(CoreError::non_finite_amount(period, value));
            }
        }
        Ok(Self { amounts })
    }

    /// Returns the amounts as a slice, indexed by period.
    #[must_use]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Returns the number of periods, including period 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Always false: the constructor rejects empty series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the period-0 entry (the initial outlay).
    #[must_use]
    pub fn initial_outlay(&self) -> f64 {
        self.amounts[0]
    }

    /// Returns an iterator over `(period, amount)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.amounts.iter().copied().enumerate()
    }

    /// Returns the undiscounted sum of all entries.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Counts sign changes between consecutive nonzero entries.
    ///
    /// An IRR only exists when the series changes sign at least once;
    /// zero entries carry no sign and are skipped.
    #[must_use]
    pub fn sign_changes(&self) -> usize {
        let mut changes = 0;
        let mut prev_sign: Option<bool> = None;
        for &amount in &self.amounts {
            if amount == 0.0 {
                continue;
            }
            let positive = amount > 0.0;
            if let Some(prev) = prev_sign {
                if prev != positive {
                    changes += 1;
                }
            }
            prev_sign = Some(positive);
        }
        changes
    }
}

impl TryFrom<Vec<f64>> for CashFlowSeries {
    type Error = CoreError;

    fn try_from(amounts: Vec<f64>) -> CoreResult<Self> {
        Self::new(amounts)
    }
}

impl From<CashFlowSeries> for Vec<f64> {
    fn from(series: CashFlowSeries) -> Self {
        series.amounts
    }
}

impl fmt::Display for CashFlowSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, amount) in self.amounts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{amount:.2}")?;
        }
        write!(f, "]")
    }
}
