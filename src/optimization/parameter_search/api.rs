//! High-level entry points of the parameter search.
//!
//! [`minimize`] validates a model's declared space and runs the exhaustive
//! scan; [`evaluate_at`] scores a single assignment exactly the way the scan
//! does, optionally collecting a cost breakdown.
use crate::optimization::{
    errors::OptResult,
    parameter_search::{
        assignment::ParameterAssignment,
        scan::{run_scan, score},
        traits::{CostModel, CostResult, OptimizationResult},
        types::Breakdown,
        validation::validate_space,
    },
};

/// Find the assignment of `model`'s parameters minimizing time.
///
/// # Behavior
/// - Validates the declared space via
///   [`validate_space`](crate::optimization::parameter_search::validation::validate_space).
/// - Visits every value of every declared range (after dependent narrowing),
///   in declaration order.
/// - Keeps the minimum time; ties go to the lower memory, then to the
///   candidate scanned first.
/// - Candidates rejected by [`CostModel::is_invalid`] count as infeasible.
///
/// Infeasibility is never an error: if nothing is feasible the result holds
/// the first scanned assignment with [`CostResult::Infeasible`].
///
/// # Errors
/// - Search-space defects from validation.
/// - Errors returned by [`CostModel::evaluate`].
/// - [`OptError::NonFiniteCost`](crate::optimization::errors::OptError::NonFiniteCost)
///   if the evaluator produced `NaN` or `-inf`.
///
/// # Example
/// ```
/// use crypto_estimators::optimization::prelude::*;
///
/// struct Parabola(ParameterSpace);
///
/// impl CostModel for Parabola {
///     fn name(&self) -> &'static str { "parabola" }
///     fn parameter_space(&self) -> &ParameterSpace { &self.0 }
///     fn required_parameters(&self) -> &[ParameterName] { &["x"] }
///     fn evaluate(
///         &self, a: &ParameterAssignment, _: Option<&mut Breakdown>,
///     ) -> OptResult<CostResult> {
///         let x = a.require_int("x")? as f64;
///         Ok(CostResult::feasible((x - 4.0).powi(2), 0.0))
///     }
/// }
///
/// let mut space = ParameterSpace::new();
/// space.set_range("x", 0, 10);
/// let result = minimize(&Parabola(space))?;
/// assert_eq!(result.assignment.integer("x"), Some(4));
/// assert_eq!(result.time(), 0.0);
/// # Ok::<(), OptError>(())
/// ```
pub fn minimize<M: CostModel + ?Sized>(model: &M) -> OptResult<OptimizationResult> {
    validate_space(model)?;
    run_scan(model)
}

/// Score one assignment: [`CostModel::is_invalid`] first (→ `Infeasible`),
/// then [`CostModel::evaluate`] with the optional breakdown sink.
///
/// A rejected assignment leaves `breakdown` untouched.
///
/// # Errors
/// Evaluator errors and non-finite costs, as for [`minimize`].
pub fn evaluate_at<M: CostModel + ?Sized>(
    model: &M, assignment: &ParameterAssignment, breakdown: Option<&mut Breakdown>,
) -> OptResult<CostResult> {
    Ok(score(model, assignment, breakdown)?.cost())
}
