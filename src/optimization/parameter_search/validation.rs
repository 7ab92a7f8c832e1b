//! Validation helpers for the parameter search.
//!
//! This module centralizes the checks run before and during a scan:
//!
//! - **Search space**: [`validate_space`] ensures every parameter the cost
//!   model reads is declared and that each declared range is well formed.
//! - **Ranges**: [`validate_range`] enforces finite, ordered bounds and a
//!   finite, strictly positive step for continuous parameters.
//! - **Cost values**: [`validate_cost`] rejects `NaN` and `-inf` coming out of
//!   an evaluator.
//!
//! Ranges narrowed by a model during the scan are *not* validated here: an
//! empty dependent range is a dead branch, not a defect.
use crate::optimization::{
    errors::{OptError, OptResult},
    parameter_search::{
        space::{DomainKind, ParameterRange},
        traits::{CostModel, CostResult},
    },
};

/// Validate a model's declared search space.
///
/// Checks, in order:
/// - a model that requires parameters declares at least one;
/// - every required parameter is declared;
/// - every declared range passes [`validate_range`].
///
/// # Errors
/// - [`OptError::EmptyParameterSpace`]
/// - [`OptError::UndeclaredParameter`]
/// - any error from [`validate_range`].
pub fn validate_space<M: CostModel + ?Sized>(model: &M) -> OptResult<()> {
    let space = model.parameter_space();
    let required = model.required_parameters();
    if space.is_empty() && !required.is_empty() {
        return Err(OptError::EmptyParameterSpace { required: required.len() });
    }
    for name in required {
        if !space.contains(name) {
            return Err(OptError::UndeclaredParameter { name: name.to_string() });
        }
    }
    for (name, range) in space.iter() {
        validate_range(name, range)?;
    }
    Ok(())
}

/// Validate one declared range.
///
/// # Errors
/// - [`OptError::NonFiniteBound`] if either bound is `NaN` or infinite.
/// - [`OptError::InvertedRange`] if `lower > upper`.
/// - [`OptError::InvalidStep`] if a continuous step is non-finite or ≤ 0.
pub fn validate_range(name: &str, range: &ParameterRange) -> OptResult<()> {
    for value in [range.lower, range.upper] {
        if !value.is_finite() {
            return Err(OptError::NonFiniteBound { name: name.to_string(), value });
        }
    }
    if range.lower > range.upper {
        return Err(OptError::InvertedRange {
            name: name.to_string(),
            lower: range.lower,
            upper: range.upper,
        });
    }
    if let DomainKind::Continuous { step } = range.kind {
        if !step.is_finite() {
            return Err(OptError::InvalidStep {
                name: name.to_string(),
                step,
                reason: "Step must be finite.",
            });
        }
        if step <= 0.0 {
            return Err(OptError::InvalidStep {
                name: name.to_string(),
                step,
                reason: "Step must be positive.",
            });
        }
    }
    Ok(())
}

/// Validate a cost returned by an evaluator.
///
/// `Infeasible` and finite feasible results pass through. `+inf` never
/// reaches this point because [`CostResult::feasible`] normalizes it.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] for a `NaN` or `-inf` component.
pub fn validate_cost(cost: CostResult) -> OptResult<CostResult> {
    if let CostResult::Feasible { time, memory } = cost {
        for value in [time, memory] {
            if value.is_nan() || value == f64::NEG_INFINITY {
                return Err(OptError::NonFiniteCost { value });
            }
        }
    }
    Ok(cost)
}
