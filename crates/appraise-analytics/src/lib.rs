//! # Appraise Analytics
//!
//! Capital budgeting calculators for the Appraise library - NPV, IRR, and
//! payback period over a periodic cash-flow series.
//!
//! This crate provides:
//!
//! - **NPV**: discounted sum of a cash-flow series at a fixed rate
//! - **IRR**: Newton-Raphson search for the rate that zeroes the NPV,
//!   with non-convergence as a first-class outcome
//! - **Payback**: fractional period at which cumulative undiscounted
//!   cash flow first turns non-negative
//! - **Scenario**: derives a forecast series from an investment amount
//!   and an inflation-grown base-year cash flow
//!
//! All calculators are pure, synchronous functions over immutable inputs;
//! repeated calls with identical inputs return identical results.
//!
//! ## Example
//!
//! ```rust
//! use appraise_analytics::prelude::*;
//!
//! let series = CashFlowSeries::new(vec![-1000.0, 500.0, 500.0, 500.0]).unwrap();
//! let rate = DiscountRate::new(0.10).unwrap();
//!
//! let value = npv(rate, &series).unwrap();
//! assert!((value - 243.43).abs() < 0.01);
//!
//! match irr(&series) {
//!     Irr::Converged { rate_pct, .. } => assert!(rate_pct > 0.0),
//!     Irr::NotConverged => unreachable!("series has a sign change"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod irr;
pub mod npv;
pub mod payback;
pub mod report;
pub mod scenario;
mod util;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::irr::{irr, irr_with_config, Irr};
    pub use crate::npv::npv;
    pub use crate::payback::{payback, Payback};
    pub use crate::report::{appraise, appraise_series, Appraisal};
    pub use crate::scenario::{CashFlowScenario, ScenarioAssumptions};
    pub use appraise_core::types::{CashFlowSeries, DiscountRate};
}

pub use error::{AnalyticsError, AnalyticsResult};
pub use irr::{irr, irr_with_config, Irr};
pub use npv::npv;
pub use payback::{payback, Payback};
pub use report::{appraise, appraise_series, Appraisal};
pub use scenario::{CashFlowScenario, ScenarioAssumptions};
