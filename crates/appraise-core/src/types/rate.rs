//! Discount rate type for present-value calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A validated per-period discount rate.
///
/// Rates are expressed as decimals (0.12 = 12%). A rate of exactly -100%
/// makes the discount factor undefined at any exponent >= 1, so `1 + r`
/// must be nonzero; NaN and infinities are rejected for the same reason.
///
/// # Example
///
/// ```rust
/// use appraise_core::types::DiscountRate;
///
/// let rate = DiscountRate::new(0.12).unwrap();
/// assert_eq!(rate.value(), 0.12);
/// assert_eq!(rate.as_percent(), 12.0);
///
/// assert!(DiscountRate::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate {
    /// Rate as a decimal (0.12 = 12%)
    value: f64,
}

impl DiscountRate {
    /// Creates a new discount rate from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DegenerateRate`] if the rate is not finite
    /// or `1 + rate` is zero.
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() || 1.0 + value == 0.0 {
            return Err(CoreError::degenerate_rate(value));
        }
        Ok(Self { value })
    }

    /// Creates a discount rate from a percentage value (12.0 = 12%).
    pub fn from_percent(percent: f64) -> CoreResult<Self> {
        Self::new(percent / 100.0)
    }

    /// Returns the rate as a decimal (0.12 = 12%).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.value * 100.0
    }

    /// Returns the discount factor `1 / (1 + r)^period`.
    ///
    /// The result may overflow to infinity for extreme rates combined
    /// with large periods; callers surface that as a domain error rather
    /// than propagating a non-finite value.
    #[must_use]
    pub fn discount_factor(&self, period: usize) -> f64 {
        (1.0 + self.value).powi(-(period as i32))
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = CoreError;

    fn try_from(value: f64) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> Self {
        rate.value
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percent())
    }
}
