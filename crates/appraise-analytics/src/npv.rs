//! Net present value calculation.

use appraise_core::types::{CashFlowSeries, DiscountRate};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Calculates the net present value of a cash-flow series.
///
/// Discounts each period's cash flow at the given per-period rate and
/// sums: `NPV = sum(cashflow[i] / (1 + r)^i)`. Period 0 is undiscounted,
/// so a single-entry series returns that entry unchanged.
///
/// The rate is validated at construction (`1 + r != 0`), so the only
/// failure mode left is numeric overflow - a rate close to -100%
/// combined with a long series can push a discount factor to infinity.
/// That case surfaces as [`AnalyticsError::NumericOverflow`] rather than
/// leaking `inf` or NaN into downstream formatting.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::npv;
/// use appraise_core::types::{CashFlowSeries, DiscountRate};
///
/// let series = CashFlowSeries::new(vec![-1000.0, 500.0, 500.0, 500.0]).unwrap();
/// let rate = DiscountRate::new(0.10).unwrap();
///
/// let value = npv(rate, &series).unwrap();
/// assert!((value - 243.4260).abs() < 1e-4);
/// ```
pub fn npv(rate: DiscountRate, series: &CashFlowSeries) -> AnalyticsResult<f64> {
    let mut sum = 0.0;
    for (period, amount) in series.iter() {
        let term = amount * rate.discount_factor(period);
        if !term.is_finite() {
            return Err(AnalyticsError::numeric_overflow(format!(
                "npv discounting at period {period}"
            )));
        }
        sum += term;
    }
    Ok(sum)
}
