//! Construction-time checks shared by problems, options and algorithms.
//!
//! Every helper returns the matching [`EstimatorError`] variant; none of them
//! clamps or repairs its input.
use crate::{
    estimators::errors::{EstimatorError, EstimatorResult},
    utils::{is_power_of_two, is_prime_power},
};

/// Validate the shape of an `[n, k]` code: `n >= 1` and `1 <= k < n`.
///
/// # Errors
/// [`EstimatorError::InvalidCodeLength`], [`EstimatorError::ZeroDimension`]
/// or [`EstimatorError::DimensionTooLarge`].
pub fn validate_code(n: usize, k: usize) -> EstimatorResult<()> {
    if n == 0 {
        return Err(EstimatorError::InvalidCodeLength { n });
    }
    if k == 0 {
        return Err(EstimatorError::ZeroDimension);
    }
    if k >= n {
        return Err(EstimatorError::DimensionTooLarge { n, k });
    }
    Ok(())
}

/// Validate an error weight against the code length.
///
/// # Errors
/// [`EstimatorError::WeightTooLarge`] if `w > n`.
pub fn validate_weight(n: usize, w: usize) -> EstimatorResult<()> {
    if w > n {
        return Err(EstimatorError::WeightTooLarge { n, w });
    }
    Ok(())
}

/// Validate that `q` is the size of a finite field.
///
/// # Errors
/// [`EstimatorError::NotPrimePower`].
pub fn validate_field(q: usize) -> EstimatorResult<()> {
    if !is_prime_power(q) {
        return Err(EstimatorError::NotPrimePower { q });
    }
    Ok(())
}

/// Validate that `q` is a power of two (characteristic-2 field).
///
/// # Errors
/// [`EstimatorError::NotPowerOfTwo`].
pub fn validate_binary_field(q: usize) -> EstimatorResult<()> {
    if !is_power_of_two(q) {
        return Err(EstimatorError::NotPowerOfTwo { q });
    }
    Ok(())
}

/// Validate a count given as a base-2 logarithm.
///
/// # Errors
/// [`EstimatorError::InvalidLog2Count`] if the value is non-finite or negative.
pub fn validate_log2_count(value: f64) -> EstimatorResult<()> {
    if !value.is_finite() {
        return Err(EstimatorError::InvalidLog2Count { value, reason: "Count must be finite." });
    }
    if value < 0.0 {
        return Err(EstimatorError::InvalidLog2Count {
            value,
            reason: "Log2 count must be non-negative.",
        });
    }
    Ok(())
}

/// Validate the linear-algebra exponent ω.
///
/// # Errors
/// [`EstimatorError::InvalidLinearAlgebraConstant`] if ω is non-finite or
/// outside `[2, 3]`.
pub fn validate_linear_algebra_constant(value: f64) -> EstimatorResult<()> {
    if !value.is_finite() {
        return Err(EstimatorError::InvalidLinearAlgebraConstant {
            value,
            reason: "Constant must be finite.",
        });
    }
    if !(2.0..=3.0).contains(&value) {
        return Err(EstimatorError::InvalidLinearAlgebraConstant {
            value,
            reason: "Constant must lie in [2, 3].",
        });
    }
    Ok(())
}

/// Validate an optional log2 memory bound.
///
/// # Errors
/// [`EstimatorError::InvalidMemoryBound`] if the bound is non-finite or
/// negative.
pub fn validate_memory_bound(bound: Option<f64>) -> EstimatorResult<()> {
    if let Some(value) = bound {
        if !value.is_finite() {
            return Err(EstimatorError::InvalidMemoryBound {
                value,
                reason: "Bound must be finite; use None for no bound.",
            });
        }
        if value < 0.0 {
            return Err(EstimatorError::InvalidMemoryBound {
                value,
                reason: "Bound must be non-negative.",
            });
        }
    }
    Ok(())
}
