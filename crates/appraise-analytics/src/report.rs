//! Combined appraisal report - all three metrics over one series.

use serde::{Deserialize, Serialize};

use appraise_core::types::{CashFlowSeries, DiscountRate};

use crate::error::AnalyticsResult;
use crate::irr::{irr, Irr};
use crate::npv::npv;
use crate::payback::{payback, Payback};
use crate::scenario::CashFlowScenario;

/// The three appraisal metrics for one cash-flow series.
///
/// NPV always carries a value; IRR and payback keep their tagged
/// no-value arms, which the presentation layer turns into user-facing
/// messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    /// The series the metrics were computed over.
    pub series: CashFlowSeries,
    /// The discount rate used for the NPV.
    pub discount_rate: DiscountRate,
    /// Net present value at the discount rate.
    pub npv: f64,
    /// Internal rate of return outcome.
    pub irr: Irr,
    /// Payback period outcome.
    pub payback: Payback,
}

/// Appraises an explicit cash-flow series at the given discount rate.
pub fn appraise_series(
    rate: DiscountRate,
    series: &CashFlowSeries,
) -> AnalyticsResult<Appraisal> {
    Ok(Appraisal {
        npv: npv(rate, series)?,
        irr: irr(series),
        payback: payback(series),
        discount_rate: rate,
        series: series.clone(),
    })
}

/// Builds a scenario's cash-flow series and appraises it at the
/// scenario's own discount rate.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::prelude::*;
///
/// let scenario = CashFlowScenario::new(1000.0, 500.0).unwrap();
/// let report = appraise(&scenario).unwrap();
///
/// assert!(report.npv > 0.0);
/// assert!(report.irr.is_converged());
/// assert!(report.payback.is_recovered());
/// ```
pub fn appraise(scenario: &CashFlowScenario) -> AnalyticsResult<Appraisal> {
    let series = scenario.build()?;
    appraise_series(scenario.discount_rate()?, &series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scenario_appraisal() {
        let scenario = CashFlowScenario::new(1000.0, 500.0).unwrap();
        let report = appraise(&scenario).unwrap();

        // NPV against the direct summation at 12%
        let reference: f64 = report
            .series
            .amounts()
            .iter()
            .enumerate()
            .map(|(i, cf)| cf / 1.12f64.powi(i as i32))
            .sum();
        assert_relative_eq!(report.npv, reference, epsilon = 1e-9);
        assert!(report.npv > 0.0);

        // Cumulative: -1000, -500, +35 -> crossing at period 2,
        // fractional = 2 + (35 - 535) / 535
        assert_eq!(report.payback.periods(), Some(1.07));

        assert!(report.irr.is_converged());
    }

    #[test]
    fn test_series_appraisal_metrics_agree_with_calculators() {
        let series = CashFlowSeries::new(vec![-1000.0, 400.0, 400.0, 400.0, 400.0]).unwrap();
        let rate = DiscountRate::new(0.12).unwrap();

        let report = appraise_series(rate, &series).unwrap();

        assert_relative_eq!(report.npv, npv(rate, &series).unwrap(), epsilon = 1e-12);
        assert_eq!(report.irr, irr(&series));
        assert_eq!(report.payback, payback(&series));
    }

    #[test]
    fn test_no_value_outcomes_survive_into_report() {
        let series = CashFlowSeries::new(vec![-1000.0, 100.0, 100.0]).unwrap();
        let rate = DiscountRate::new(0.12).unwrap();

        let report = appraise_series(rate, &series).unwrap();

        assert_eq!(report.payback, Payback::NeverRecovered);
        // One sign change exists, but with this shape the metrics may
        // still legitimately converge; only payback is pinned here
        assert!(report.npv < 0.0);
    }

    #[test]
    fn test_json_output_shape() {
        let series = CashFlowSeries::new(vec![-1000.0, 1100.0]).unwrap();
        let rate = DiscountRate::new(0.12).unwrap();

        let report = appraise_series(rate, &series).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["series"][0], -1000.0);
        assert_eq!(json["discount_rate"], 0.12);
        assert_eq!(json["irr"]["status"], "converged");
        assert_eq!(json["irr"]["rate_pct"], 10.0);
    }
}
