//! estimators — problem instances, attack cost models and their facades.
//!
//! Purpose
//! -------
//! Turn a concrete hard-problem instance into time and memory estimates for
//! each applicable attack. Every attack is a [`CostModel`](crate::optimization::parameter_search::CostModel)
//! over a few named parameters; its facade ([`core::Estimator`]) runs the
//! exhaustive parameter search on first use and memoizes the optimum.
//!
//! Key behaviors
//! -------------
//! - Problems ([`problems`]) validate their parameters at construction:
//!   syndrome decoding over `F_q`, permutation and linear code equivalence,
//!   multivariate quadratic systems.
//! - Algorithms ([`algorithms`]) validate their applicability preconditions
//!   at construction and expose `time_complexity`, `memory_complexity`,
//!   `optimal_parameters`, per-parameter getters and `verbose_information`.
//! - Options ([`core::EstimatorOptions`]) select the complexity type, the
//!   linear-algebra exponent, the memory-access penalty, bit-complexity
//!   conversion, the parameter-domain width and an optional memory bound.
//! - Suites ([`core::EstimatorSuite`]) compare several algorithms on one
//!   problem in parallel.
//!
//! Invariants & assumptions
//! ------------------------
//! - All costs are base-2 logarithms of operation counts or bits.
//! - Infeasible attacks report `+inf` time and memory; construction problems
//!   and search-space defects are [`errors::EstimatorError`] values.
//! - Facades are `Send + Sync`; the memoized optimum is written once.
//!
//! Conventions
//! -----------
//! - `Estimate` is the default complexity type; under `TildeO` models with no
//!   asymptotic formula report a neutral zero.
//! - Nested syndrome-decoding calls (Beullens, Leon) run under their own
//!   options, which by default omit the bit-complexity conversion.
//!
//! Downstream usage
//! ----------------
//! ```
//! use crypto_estimators::estimators::prelude::*;
//!
//! let problem = SDFqProblem::new(100, 50, 10, 5)?;
//! let lb = LeeBrickell::new(problem, EstimatorOptions::default())?;
//! assert_eq!(lb.p()?, 2);
//! assert!(lb.time_complexity()? > 25.0);
//! # Ok::<(), EstimatorError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Each algorithm module checks reference values, the verbose
//!   reconstruction rule and its edge cases.
//! - `tests/integration_estimators.rs` exercises facades, suites and
//!   concurrency end to end.

pub mod algorithms;
pub mod core;
pub mod errors;
pub mod problems;

pub mod prelude {
    pub use super::algorithms::{
        Beullens, Kpg, LeeBrickell, Leon, LeonOptions, Stern, sdfq_suite,
    };
    pub use super::core::{
        Algorithm, AlgorithmEstimate, ComplexityType, Estimator, EstimatorOptions, EstimatorSuite,
        MemoryAccess,
    };
    pub use super::errors::{EstimatorError, EstimatorResult};
    pub use super::problems::{LEProblem, MQProblem, PEProblem, SDFqProblem};
}
