//! Attack cost models and their facades.
//!
//! - Syndrome decoding over `F_q`: [`LeeBrickell`], [`Stern`].
//! - Permutation / linear equivalence: [`Beullens`], [`Leon`].
//! - Multivariate quadratic: [`Kpg`].
//!
//! [`sdfq_suite`] bundles every syndrome-decoding algorithm for one problem;
//! the equivalence attacks use its fastest member as their ISD subroutine.

pub mod beullens;
pub mod kpg;
pub mod lee_brickell;
pub mod leon;
pub mod stern;

pub use self::beullens::{Beullens, BeullensCost};
pub use self::kpg::{Kpg, KpgCost};
pub use self::lee_brickell::{LeeBrickell, LeeBrickellCost};
pub use self::leon::{EquivalenceProblem, Leon, LeonCost, LeonOptions};
pub use self::stern::{Stern, SternCost};

use crate::{
    estimators::{
        core::{options::EstimatorOptions, suite::EstimatorSuite},
        errors::EstimatorResult,
        problems::SDFqProblem,
    },
    optimization::{errors::OptResult, parameter_search::CostResult},
};

/// Every syndrome-decoding estimator for `problem`, in a fixed order.
///
/// # Errors
/// Construction errors of the member estimators.
pub fn sdfq_suite(
    problem: &SDFqProblem, options: &EstimatorOptions,
) -> EstimatorResult<EstimatorSuite> {
    Ok(EstimatorSuite::new()
        .with(LeeBrickell::new(problem.clone(), options.clone())?)
        .with(Stern::new(problem.clone(), options.clone())?))
}

/// Cost of the fastest syndrome-decoding attack on a nested `[n, k]`
/// instance with error weight `w` and no extra solutions.
pub(crate) fn isd_subroutine(
    n: usize, k: usize, w: usize, q: usize, options: &EstimatorOptions,
) -> OptResult<CostResult> {
    let problem = SDFqProblem::new(n, k, w, q)?.with_nsolutions(0.0)?;
    let fastest = sdfq_suite(&problem, options)?.fastest()?;
    Ok(fastest.map_or(CostResult::Infeasible, |best| CostResult::feasible(best.time, best.memory)))
}
