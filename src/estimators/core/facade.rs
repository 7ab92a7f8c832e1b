//! Algorithm facade — lazy, memoized access to an attack's optimal cost.
//!
//! Purpose
//! -------
//! Wrap an attack-specific cost model in [`Estimator`], the object users
//! query for time, memory, optimal parameters and a verbose cost breakdown.
//! The first query runs the exhaustive parameter search; its result is
//! stored once and every later query reads from it.
//!
//! Key behaviors
//! -------------
//! - [`Estimator::optimize`] returns the cached [`OptimizationResult`],
//!   running [`minimize`] only if nothing is cached yet.
//! - [`Estimator::time_complexity`] / [`Estimator::memory_complexity`] project
//!   the optimum; infeasible optima read as `+inf`.
//! - [`Estimator::verbose_information`] re-evaluates the optimum with a
//!   breakdown sink.
//! - [`Estimator::reset`] discards the cached optimum.
//!
//! Invariants & assumptions
//! ------------------------
//! - The cache is write-once ([`OnceLock`]): concurrent first queries may
//!   both search, but exactly one result is kept and every reader sees it.
//!   Cost models are pure, so the discarded duplicate is identical.
//! - Models are immutable after construction; applicability preconditions
//!   are checked by their constructors.
//!
//! Downstream usage
//! ----------------
//! - Each algorithm module defines a model type implementing [`AttackModel`]
//!   and a facade alias (`pub type LeeBrickell = Estimator<LeeBrickellCost>`)
//!   with a validating `new` and per-parameter getters.
use crate::{
    estimators::{core::options::EstimatorOptions, errors::EstimatorResult},
    optimization::parameter_search::{
        Breakdown, CostModel, CostResult, Log2Cost, OptimizationResult, ParameterAssignment,
        SearchStats, evaluate_at, minimize,
    },
};
use std::{fmt, sync::OnceLock};
use tracing::debug;

/// A cost model bound to a concrete problem instance and option set.
pub trait AttackModel: CostModel + Send + Sync {
    type Problem: fmt::Display;

    fn problem(&self) -> &Self::Problem;
    fn options(&self) -> &EstimatorOptions;
}

/// Memoizing facade over an [`AttackModel`].
pub struct Estimator<M: AttackModel> {
    model: M,
    optimum: OnceLock<OptimizationResult>,
}

impl<M: AttackModel> Estimator<M> {
    pub fn from_model(model: M) -> Self {
        Self { model, optimum: OnceLock::new() }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn problem(&self) -> &M::Problem {
        self.model.problem()
    }

    pub fn options(&self) -> &EstimatorOptions {
        self.model.options()
    }

    /// Optimal result, computed on first use.
    ///
    /// # Errors
    /// [`EstimatorError::Search`](crate::estimators::errors::EstimatorError::Search)
    /// if the model's search space is malformed or an evaluation fails.
    pub fn optimize(&self) -> EstimatorResult<&OptimizationResult> {
        if let Some(result) = self.optimum.get() {
            return Ok(result);
        }
        let result = minimize(&self.model)?;
        if reports_placeholder(self.model.options(), &result) {
            debug!(
                algorithm = self.model.name(),
                complexity_type = %self.model.options().complexity_type,
                "optimum is the neutral placeholder"
            );
        }
        debug!(
            algorithm = self.model.name(),
            optimum = %result.assignment,
            time = result.time(),
            memory = result.memory(),
            "memoized optimum"
        );
        Ok(self.optimum.get_or_init(|| result))
    }

    /// Log2 time of the optimal parameter choice (`+inf` if infeasible).
    pub fn time_complexity(&self) -> EstimatorResult<Log2Cost> {
        Ok(self.optimize()?.time())
    }

    /// Log2 memory of the optimal parameter choice (`+inf` if infeasible).
    pub fn memory_complexity(&self) -> EstimatorResult<Log2Cost> {
        Ok(self.optimize()?.memory())
    }

    pub fn optimal_parameters(&self) -> EstimatorResult<&ParameterAssignment> {
        Ok(&self.optimize()?.assignment)
    }

    pub fn optimal_parameter(&self, name: &str) -> EstimatorResult<Option<f64>> {
        Ok(self.optimize()?.assignment.get(name))
    }

    /// Optimal value of an integer parameter.
    ///
    /// # Errors
    /// Search errors, or a wrapped missing/non-integer assignment.
    pub fn optimal_integer(&self, name: &str) -> EstimatorResult<i64> {
        Ok(self.optimize()?.assignment.require_int(name)?)
    }

    pub fn search_stats(&self) -> EstimatorResult<SearchStats> {
        Ok(self.optimize()?.stats)
    }

    /// Cost breakdown at the optimum.
    ///
    /// Empty when the optimum is infeasible, since nothing was computed.
    pub fn verbose_information(&self) -> EstimatorResult<Breakdown> {
        let optimum = self.optimize()?;
        let mut breakdown = Breakdown::new();
        if optimum.is_feasible() {
            evaluate_at(&self.model, &optimum.assignment, Some(&mut breakdown))?;
        }
        Ok(breakdown)
    }

    /// Drop the cached optimum; the next query searches again.
    pub fn reset(&mut self) {
        self.optimum.take();
    }
}

// A non-estimate search whose optimum is the neutral zero placeholder.
fn reports_placeholder(options: &EstimatorOptions, result: &OptimizationResult) -> bool {
    !options.is_estimate() && result.cost == CostResult::placeholder()
}

impl<M: AttackModel> fmt::Display for Estimator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} estimator for {}", self.model.name(), self.model.problem())
    }
}

impl<M: AttackModel + fmt::Debug> fmt::Debug for Estimator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Estimator")
            .field("model", &self.model)
            .field("optimum", &self.optimum.get())
            .finish()
    }
}
