//! Scenario construction - turning two scalar inputs into a forecast
//! cash-flow series.
//!
//! This is the only place user input becomes a [`CashFlowSeries`]. The
//! output shape (leading negative outlay, fixed forecast horizon) is a
//! hard contract the three calculators depend on.

use log::debug;
use serde::{Deserialize, Serialize};

use appraise_core::error::CoreError;
use appraise_core::types::{CashFlowSeries, DiscountRate};

use crate::error::AnalyticsResult;

/// Default per-period discount rate (12%).
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.12;

/// Default per-period inflation rate applied to the forecast (7%).
pub const DEFAULT_INFLATION_RATE: f64 = 0.07;

/// Default forecast horizon in periods.
pub const DEFAULT_HORIZON: usize = 5;

/// Economic assumptions behind a scenario.
///
/// These are scenario-construction constants, not values derived from
/// cash-flow data. The defaults carry the fixed assumptions of the
/// single-scenario use case; callers may supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumptions {
    /// Per-period discount rate as a decimal (0.12 = 12%).
    pub discount_rate: f64,
    /// Per-period inflation rate applied to the base-year cash flow.
    pub inflation_rate: f64,
    /// Number of forecast periods after the initial outlay.
    pub horizon: usize,
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            inflation_rate: DEFAULT_INFLATION_RATE,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl ScenarioAssumptions {
    /// Creates assumptions with explicit values.
    #[must_use]
    pub fn new(discount_rate: f64, inflation_rate: f64, horizon: usize) -> Self {
        Self {
            discount_rate,
            inflation_rate,
            horizon,
        }
    }

    /// Validates the assumption values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DegenerateRate`] for a discount rate of
    /// exactly -100% and [`CoreError::InvalidInput`] for a non-finite
    /// inflation rate.
    pub fn validate(&self) -> AnalyticsResult<()> {
        DiscountRate::new(self.discount_rate)?;
        if !self.inflation_rate.is_finite() {
            return Err(CoreError::invalid_input(format!(
                "inflation rate {} is not finite",
                self.inflation_rate
            ))
            .into());
        }
        Ok(())
    }
}

/// A single investment scenario: one upfront outlay followed by an
/// inflation-grown forecast of inflows.
///
/// # Example
///
/// ```rust
/// use appraise_analytics::scenario::CashFlowScenario;
///
/// let scenario = CashFlowScenario::new(1000.0, 500.0).unwrap();
/// let series = scenario.build().unwrap();
///
/// assert_eq!(series.len(), 6);
/// assert_eq!(series.initial_outlay(), -1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowScenario {
    /// Upfront capital investment (non-negative; becomes period 0 as an
    /// outlay).
    capital_investment: f64,
    /// Net cash flow of the first forecast period, before inflation
    /// adjustment.
    base_year_cashflow: f64,
    /// Economic assumptions.
    assumptions: ScenarioAssumptions,
}

impl CashFlowScenario {
    /// Creates a scenario with the default assumptions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if either scalar is negative
    /// or not finite. Non-negativity is the caller-boundary contract and
    /// is enforced before a series can be constructed.
    pub fn new(capital_investment: f64, base_year_cashflow: f64) -> AnalyticsResult<Self> {
        if !capital_investment.is_finite() || capital_investment < 0.0 {
            return Err(CoreError::invalid_input(format!(
                "capital investment must be non-negative, got {capital_investment}"
            ))
            .into());
        }
        if !base_year_cashflow.is_finite() || base_year_cashflow < 0.0 {
            return Err(CoreError::invalid_input(format!(
                "base year cash flow must be non-negative, got {base_year_cashflow}"
            ))
            .into());
        }
        Ok(Self {
            capital_investment,
            base_year_cashflow,
            assumptions: ScenarioAssumptions::default(),
        })
    }

    /// Replaces the default assumptions.
    #[must_use]
    pub fn with_assumptions(mut self, assumptions: ScenarioAssumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    /// Returns the capital investment.
    #[must_use]
    pub fn capital_investment(&self) -> f64 {
        self.capital_investment
    }

    /// Returns the base-year cash flow.
    #[must_use]
    pub fn base_year_cashflow(&self) -> f64 {
        self.base_year_cashflow
    }

    /// Returns the scenario assumptions.
    #[must_use]
    pub fn assumptions(&self) -> ScenarioAssumptions {
        self.assumptions
    }

    /// Returns the validated discount rate for this scenario.
    pub fn discount_rate(&self) -> AnalyticsResult<DiscountRate> {
        Ok(DiscountRate::new(self.assumptions.discount_rate)?)
    }

    /// Builds the cash-flow series:
    /// `[-investment, base, base*(1+infl), ..., base*(1+infl)^(horizon-1)]`.
    pub fn build(&self) -> AnalyticsResult<CashFlowSeries> {
        self.assumptions.validate()?;

        let mut amounts = Vec::with_capacity(self.assumptions.horizon + 1);
        amounts.push(-self.capital_investment);
        for i in 0..self.assumptions.horizon {
            amounts.push(
                self.base_year_cashflow * (1.0 + self.assumptions.inflation_rate).powi(i as i32),
            );
        }

        debug!(
            "built scenario series: outlay {}, {} forecast periods",
            self.capital_investment, self.assumptions.horizon
        );
        Ok(CashFlowSeries::new(amounts)?)
    }
}
