//! Code equivalence problems.
//!
//! Both problems ask for the map between two equivalent random `[n, k]`
//! codes over `F_q`: a permutation ([`PEProblem`]) or a monomial map, i.e. a
//! permutation combined with non-zero scalings ([`LEProblem`]).
use crate::estimators::{
    core::validation::{validate_code, validate_field, validate_log2_count},
    errors::EstimatorResult,
};
use std::fmt;

/// Shared `(n, k, q)` shape of an equivalence instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeShape {
    pub n: usize,
    pub k: usize,
    pub q: usize,
}

impl CodeShape {
    fn new(n: usize, k: usize, q: usize) -> EstimatorResult<Self> {
        validate_code(n, k)?;
        validate_field(q)?;
        Ok(Self { n, k, q })
    }
}

/// Permutation equivalence of two `[n, k]` codes over `F_q`.
#[derive(Debug, Clone, PartialEq)]
pub struct PEProblem {
    shape: CodeShape,
    nsolutions: f64,
}

/// Linear equivalence of two `[n, k]` codes over `F_q`.
#[derive(Debug, Clone, PartialEq)]
pub struct LEProblem {
    shape: CodeShape,
    nsolutions: f64,
}

macro_rules! equivalence_problem {
    ($ty:ident, $label:literal) => {
        impl $ty {
            /// # Errors
            /// Invalid code shape or `q` not a prime power.
            pub fn new(n: usize, k: usize, q: usize) -> EstimatorResult<Self> {
                Ok(Self { shape: CodeShape::new(n, k, q)?, nsolutions: 0.0 })
            }

            /// Override the log2 number of solutions (default 0).
            ///
            /// # Errors
            /// [`EstimatorError::InvalidLog2Count`](crate::estimators::errors::EstimatorError::InvalidLog2Count).
            pub fn with_nsolutions(mut self, nsolutions: f64) -> EstimatorResult<Self> {
                validate_log2_count(nsolutions)?;
                self.nsolutions = nsolutions;
                Ok(self)
            }

            pub fn shape(&self) -> CodeShape {
                self.shape
            }

            pub fn n(&self) -> usize {
                self.shape.n
            }

            pub fn k(&self) -> usize {
                self.shape.k
            }

            pub fn q(&self) -> usize {
                self.shape.q
            }

            pub fn nsolutions(&self) -> f64 {
                self.nsolutions
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!($label, " equivalence problem with (n,k) = ({},{}) over Finite Field of size {}"),
                    self.shape.n, self.shape.k, self.shape.q
                )
            }
        }
    };
}

equivalence_problem!(PEProblem, "permutation");
equivalence_problem!(LEProblem, "linear");
