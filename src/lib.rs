//! crypto_estimators — parameter-optimizing cost estimators for attacks on
//! hard combinatorial problems.
//!
//! Purpose
//! -------
//! Serve as the crate root for estimating the time and memory (as base-2
//! logarithms) of cryptanalytic algorithms against syndrome decoding over
//! `F_q`, permutation/linear code equivalence and multivariate quadratic
//! systems. Each attack is a cost function over a handful of named tuning
//! parameters; the crate finds the assignment minimizing time (ties broken by
//! memory) and reports time, memory and a breakdown of cost contributors.
//!
//! Key behaviors
//! -------------
//! - [`optimization`]: the generic exhaustive parameter search, its
//!   cost-model contract and its error surface.
//! - [`estimators`]: problem instances, attack cost models, memoizing
//!   facades, estimator options and parallel suites.
//! - [`utils`]: log2-space combinatorics shared by the cost formulas.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infeasible parameter choices are values (`+inf`), never errors.
//! - Construction validates problems, options and applicability
//!   preconditions; every later query works on validated data.
//! - The library installs no logging subscriber; it emits `tracing` events
//!   (`trace` per rejected candidate, `debug` per finished search) that a
//!   caller may collect.
//!
//! Downstream usage
//! ----------------
//! - Import `estimators::prelude::*`, build a problem, wrap it in an
//!   algorithm facade and query `time_complexity()` / `memory_complexity()`.
//! - Implement `optimization::parameter_search::CostModel` to plug a new
//!   attack into the same search.
//!
//! Testing notes
//! -------------
//! - Unit and property tests live next to the code; `tests/` holds the
//!   end-to-end estimator scenarios.

pub mod estimators;
pub mod optimization;
pub mod utils;
