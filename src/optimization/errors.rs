//! Errors raised by the parameter search.
//!
//! [`OptError`] covers malformed search spaces, bad reads from an assignment,
//! non-finite costs and failures of nested estimators called from inside a
//! cost model. An infeasible candidate is a value, not one of these.
use crate::estimators::errors::EstimatorError;

/// Crate-wide result alias for parameter-search operations.
pub type OptResult<T> = Result<T, OptError>;

/// Defects raised by the parameter-search layer.
///
/// Infeasible parameter choices are *not* errors; they are reported as
/// `CostResult::Infeasible`. Every variant here points at a malformed search
/// space or a misbehaving cost model.
#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Search space ----
    /// The model reads parameters but declared none.
    EmptyParameterSpace {
        required: usize,
    },

    /// A parameter the model reads is missing from its space.
    UndeclaredParameter {
        name: String,
    },

    /// Declared bounds are inverted.
    InvertedRange {
        name: String,
        lower: f64,
        upper: f64,
    },

    /// Declared bounds must be finite.
    NonFiniteBound {
        name: String,
        value: f64,
    },

    /// Discretization step of a continuous parameter.
    InvalidStep {
        name: String,
        step: f64,
        reason: &'static str,
    },

    // ---- Assignment ----
    /// The cost model asked for a parameter the assignment does not carry.
    MissingAssignment {
        name: String,
    },

    /// An integer parameter was read from a fractional value.
    NonIntegerValue {
        name: String,
        value: f64,
    },

    // ---- Cost function ----
    /// Cost function returned NaN or -inf.
    NonFiniteCost {
        value: f64,
    },

    // ---- Nested estimators ----
    /// A subroutine estimator failed while evaluating a candidate.
    Subroutine {
        text: String,
    },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Search space ----
            OptError::EmptyParameterSpace { required } => {
                write!(f, "Empty parameter space: the cost model requires {required} parameter(s)")
            }
            OptError::UndeclaredParameter { name } => {
                write!(f, "Parameter '{name}' is required by the cost model but was never declared")
            }
            OptError::InvertedRange { name, lower, upper } => {
                write!(
                    f,
                    "Invalid range for '{name}': lower bound {lower} exceeds upper bound {upper}"
                )
            }
            OptError::NonFiniteBound { name, value } => {
                write!(f, "Invalid bound for '{name}': {value}, must be finite")
            }
            OptError::InvalidStep { name, step, reason } => {
                write!(f, "Invalid step {step} for '{name}': {reason}")
            }

            // ---- Assignment ----
            OptError::MissingAssignment { name } => {
                write!(f, "No value assigned to parameter '{name}'")
            }
            OptError::NonIntegerValue { name, value } => {
                write!(f, "Parameter '{name}' holds {value}, expected an integer")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Nested estimators ----
            OptError::Subroutine { text } => {
                write!(f, "Subroutine estimator failed: {text}")
            }
        }
    }
}

impl From<EstimatorError> for OptError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::Search(inner) => inner,
            other => OptError::Subroutine { text: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure wrapped search errors unwrap back to the original variant while
    // construction errors from a subroutine become `Subroutine`.
    //
    // Given
    // -----
    // - An `EstimatorError::Search` holding `MissingAssignment`.
    // - An `EstimatorError::DimensionTooLarge`.
    //
    // Expect
    // ------
    // - The first converts to the same `MissingAssignment`.
    // - The second converts to `Subroutine` carrying its message.
    fn estimator_errors_convert_into_opt_errors() {
        // Arrange
        let wrapped = EstimatorError::Search(OptError::MissingAssignment { name: "p".into() });
        let construction = EstimatorError::DimensionTooLarge { n: 10, k: 10 };
        let message = construction.to_string();

        // Act
        let unwrapped: OptError = wrapped.into();
        let nested: OptError = construction.into();

        // Assert
        assert_eq!(unwrapped, OptError::MissingAssignment { name: "p".into() });
        assert_eq!(nested, OptError::Subroutine { text: message });
    }
}
