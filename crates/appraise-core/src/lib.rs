//! # Appraise Core
//!
//! Core types and error taxonomy for the Appraise capital budgeting library.
//!
//! This crate provides the foundational building blocks used throughout Appraise:
//!
//! - **Types**: Domain-specific types like [`CashFlowSeries`] and [`DiscountRate`]
//! - **Errors**: The shared [`CoreError`] taxonomy for domain violations
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent invalid values from entering the calculators
//! - **Explicit Over Implicit**: invalid input fails at construction, never mid-calculation
//! - **Value Semantics**: all types are immutable values with no shared state
//!
//! ## Example
//!
//! ```rust
//! use appraise_core::prelude::*;
//!
//! let series = CashFlowSeries::new(vec![-1000.0, 400.0, 400.0, 400.0, 400.0]).unwrap();
//! let rate = DiscountRate::new(0.12).unwrap();
//!
//! assert_eq!(series.len(), 5);
//! assert_eq!(rate.as_percent(), 12.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlowSeries, DiscountRate};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlowSeries, DiscountRate};
