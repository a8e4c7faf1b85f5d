//! Domain types for capital budgeting analytics.
//!
//! This module provides type-safe representations of the appraisal inputs:
//!
//! - [`CashFlowSeries`]: ordered per-period net cash amounts
//! - [`DiscountRate`]: validated per-period discount rate

mod cashflow;
mod rate;

pub use cashflow::CashFlowSeries;
pub use rate::DiscountRate;
