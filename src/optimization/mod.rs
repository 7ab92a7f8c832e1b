//! optimization — exhaustive parameter search and its error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer behind every cost estimator: a bounded,
//! exhaustive search over named attack parameters ([`parameter_search`]) and
//! a single error/result surface ([`errors::OptError`], [`errors::OptResult`])
//! for defects found while searching.
//!
//! Key behaviors
//! -------------
//! - Minimize a log2-space time cost over every admissible assignment,
//!   breaking ties on memory and then on scan order.
//! - Report infeasible parameter choices as values
//!   ([`parameter_search::CostResult::Infeasible`]) rather than errors.
//! - Normalize search-space defects, evaluator failures and nested estimator
//!   errors into [`errors::OptError`].
//!
//! Conventions
//! -----------
//! - Public entry points that can fail return `OptResult<T>`.
//! - The layer installs no logging subscriber; it emits `tracing` events at
//!   `trace`/`debug` level that callers may collect.
//!
//! Downstream usage
//! ----------------
//! - Estimators import the curated surface via `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - Unit and property tests live next to the code in [`parameter_search`];
//!   [`errors`] checks the conversions from estimator errors.

pub mod errors;
pub mod parameter_search;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use crypto_estimators::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::parameter_search::prelude::*;
}
