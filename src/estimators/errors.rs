//! Errors for estimator construction and configuration.
//!
//! This module defines [`EstimatorError`], raised when a problem instance,
//! an option set or an algorithm's applicability preconditions are violated,
//! and when a search run behind a facade fails. Infeasible parameter choices
//! are never errors; they surface as `+inf` time and memory.
//!
//! ## Conventions
//! - Problem sizes are reported exactly as the caller passed them.
//! - Search failures are wrapped unchanged in [`EstimatorError::Search`]; a
//!   nested estimator failing inside a cost model travels the other way, as
//!   [`OptError::Subroutine`].
use crate::optimization::errors::OptError;

/// Result alias for estimator construction and queries.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Unified error type for problems, options and algorithm facades.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorError {
    // ---- Problem parameters ----
    /// Code length must be at least one.
    InvalidCodeLength { n: usize },

    /// Code dimension must satisfy 1 <= k < n.
    DimensionTooLarge { n: usize, k: usize },

    /// Code dimension must be positive.
    ZeroDimension,

    /// Error weight cannot exceed the code length.
    WeightTooLarge { n: usize, w: usize },

    /// Field size must be a prime power.
    NotPrimePower { q: usize },

    /// Field size must be a power of two.
    NotPowerOfTwo { q: usize },

    /// MQ systems need at least one variable and one polynomial.
    EmptySystem { n: usize, m: usize },

    /// Too many polynomials for the algorithm's applicability condition.
    TooManyPolynomials { n: usize, m: usize, reason: &'static str },

    /// A log2-scale count (e.g. expected number of solutions) must be finite
    /// and non-negative.
    InvalidLog2Count { value: f64, reason: &'static str },

    // ---- Options ----
    /// Linear-algebra constant must be finite and lie in [2, 3].
    InvalidLinearAlgebraConstant { value: f64, reason: &'static str },

    /// Unknown complexity type name or code.
    InvalidComplexityType { name: String, reason: &'static str },

    /// Unknown memory-access model name or code.
    InvalidMemoryAccess { name: String, reason: &'static str },

    /// Memory bound must be finite and non-negative.
    InvalidMemoryBound { value: f64, reason: &'static str },

    /// Number of low-weight codewords required for success.
    InvalidCodewordTarget { value: f64, reason: &'static str },

    // ---- Search ----
    /// The parameter search behind a facade failed.
    Search(OptError),
}

impl std::error::Error for EstimatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EstimatorError::Search(inner) => Some(inner),
            _ => None,
        }
    }
}

impl std::fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Problem parameters ----
            EstimatorError::InvalidCodeLength { n } => {
                write!(f, "Code length must be at least 1; got n = {n}.")
            }
            EstimatorError::DimensionTooLarge { n, k } => {
                write!(
                    f,
                    "Code dimension must be smaller than the code length; got k = {k}, n = {n}."
                )
            }
            EstimatorError::ZeroDimension => {
                write!(f, "Code dimension must be at least 1.")
            }
            EstimatorError::WeightTooLarge { n, w } => {
                write!(f, "Error weight must not exceed the code length; got w = {w}, n = {n}.")
            }
            EstimatorError::NotPrimePower { q } => {
                write!(f, "Field size must be a prime power; got q = {q}.")
            }
            EstimatorError::NotPowerOfTwo { q } => {
                write!(f, "The order of the finite field must be a power of 2; got q = {q}.")
            }
            EstimatorError::EmptySystem { n, m } => {
                write!(
                    f,
                    "MQ system needs at least one variable and one polynomial; got n = {n}, m = {m}."
                )
            }
            EstimatorError::TooManyPolynomials { n, m, reason } => {
                write!(f, "Too many polynomials (m = {m}) for n = {n} variables. {reason}")
            }
            EstimatorError::InvalidLog2Count { value, reason } => {
                write!(f, "Invalid log2 count: {value}. {reason}")
            }

            // ---- Options ----
            EstimatorError::InvalidLinearAlgebraConstant { value, reason } => {
                write!(f, "Invalid linear algebra constant: {value}. {reason}")
            }
            EstimatorError::InvalidComplexityType { name, reason } => {
                write!(f, "Invalid complexity type '{name}'. {reason}")
            }
            EstimatorError::InvalidMemoryAccess { name, reason } => {
                write!(f, "Invalid memory access model '{name}'. {reason}")
            }
            EstimatorError::InvalidMemoryBound { value, reason } => {
                write!(f, "Invalid memory bound: {value}. {reason}")
            }
            EstimatorError::InvalidCodewordTarget { value, reason } => {
                write!(f, "Invalid number of codewords needed for success: {value}. {reason}")
            }

            // ---- Search ----
            EstimatorError::Search(inner) => {
                write!(f, "Parameter search failed: {inner}")
            }
        }
    }
}

impl From<OptError> for EstimatorError {
    fn from(err: OptError) -> Self {
        EstimatorError::Search(err)
    }
}
