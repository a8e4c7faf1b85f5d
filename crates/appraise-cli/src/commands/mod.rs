//! CLI command implementations.

pub mod evaluate;
pub mod irr;
pub mod npv;
pub mod payback;

// Re-export argument structs for convenience
pub use evaluate::EvaluateArgs;
pub use irr::IrrArgs;
pub use npv::NpvArgs;
pub use payback::PaybackArgs;

use appraise_core::types::{CashFlowSeries, DiscountRate};

use crate::error::{CliError, CliResult};

/// Parses a comma-separated cash-flow list into a series.
pub fn parse_series(input: &str) -> CliResult<CashFlowSeries> {
    let amounts = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidCashFlows(input.to_string()))
        })
        .collect::<CliResult<Vec<f64>>>()?;

    CashFlowSeries::new(amounts).map_err(|_| CliError::InvalidCashFlows(input.to_string()))
}

/// Parses a percentage rate argument into a validated discount rate.
pub fn parse_rate(percent: f64) -> CliResult<DiscountRate> {
    DiscountRate::from_percent(percent).map_err(|_| CliError::InvalidRate(percent))
}
