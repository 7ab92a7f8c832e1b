//! parameter_search — exhaustive minimization of log2-space attack costs.
//!
//! Purpose
//! -------
//! Provide the generic optimizer shared by every cost estimator. An attack
//! describes its tunable parameters as a bounded [`ParameterSpace`] and its
//! cost as a [`CostModel`]; [`minimize`] visits every admissible assignment
//! and returns the one with the lowest time, breaking ties on memory.
//!
//! Key behaviors
//! -------------
//! - Declare integer or step-discretized continuous ranges per parameter via
//!   [`ParameterSpace::set_range`] / [`ParameterSpace::set_continuous_range`].
//! - Scan the full Cartesian product in declaration order ([`scan`]); inner
//!   ranges may be narrowed by [`CostModel::narrow_range`] from the values of
//!   outer parameters.
//! - Apply the cheap validity predicate [`CostModel::is_invalid`] before every
//!   evaluation; rejected candidates become [`CostResult::Infeasible`].
//! - Score a single assignment outside a search with [`evaluate_at`], e.g. to
//!   collect a [`Breakdown`] at a cached optimum.
//!
//! Invariants & assumptions
//! ------------------------
//! - Costs are base-2 logarithms; `+inf` means infeasible and is represented
//!   as [`CostResult::Infeasible`]. `NaN` and `-inf` are defects.
//! - Cost models are pure: the same assignment always yields the same cost.
//! - The search is deterministic: ties resolve to the first candidate in scan
//!   order, so repeated runs return identical results.
//! - Infeasibility is a value; only malformed search spaces and evaluator
//!   failures produce an [`OptError`](crate::optimization::errors::OptError).
//!
//! Conventions
//! -----------
//! - Parameter names are `'static` strings owned by the model; declaration
//!   order is scan order and dependency order.
//! - Declared ranges are validated once per search ([`validation`]); ranges
//!   narrowed during the scan may be empty, which prunes that branch.
//! - Breakdown keys come from the closed [`CostLabel`] vocabulary.
//!
//! Downstream usage
//! ----------------
//! - Estimators implement [`CostModel`] for their attack-specific model and
//!   call [`minimize`] once, memoizing the [`OptimizationResult`].
//! - Verbose reporting re-evaluates the optimum through [`evaluate_at`] with a
//!   breakdown sink.
//!
//! Testing notes
//! -------------
//! - Unit tests cover range enumeration and narrowing ([`space`]), typed
//!   assignment access ([`assignment`]), space/cost validation
//!   ([`validation`]) and dependent scans ([`scan`]).
//! - Property tests in [`api`] cross-check [`minimize`] against brute force
//!   on random cost tables and check that knocking out non-optimal
//!   candidates never moves the optimum.

pub mod api;
pub mod assignment;
pub mod scan;
pub mod space;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{evaluate_at, minimize};
pub use self::assignment::ParameterAssignment;
pub use self::space::{DomainKind, ParameterRange, ParameterSpace};
pub use self::traits::{CostModel, CostResult, OptimizationResult, SearchStats};
pub use self::types::{Breakdown, CostLabel, Log2Cost, ParameterName};

pub mod prelude {
    pub use super::api::{evaluate_at, minimize};
    pub use super::assignment::ParameterAssignment;
    pub use super::space::{ParameterRange, ParameterSpace};
    pub use super::traits::{CostModel, CostResult, OptimizationResult, SearchStats};
    pub use super::types::{Breakdown, CostLabel, Log2Cost, ParameterName};
}
