//! Syndrome decoding over `F_q`.
use crate::{
    estimators::{
        core::validation::{validate_code, validate_field, validate_log2_count, validate_weight},
        errors::EstimatorResult,
    },
    utils::log2_binomial,
};
use std::fmt;

/// Find an error of Hamming weight `w` for a random `[n, k]` code over `F_q`.
///
/// `nsolutions` is the log2 of the expected number of solutions; by default
/// `max(0, log2 C(n, w) + w·log2(q-1) - (n-k)·log2 q)`. `is_syndrome_zero`
/// marks the homogeneous case, in which one list entry can be fixed up to a
/// scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct SDFqProblem {
    n: usize,
    k: usize,
    w: usize,
    q: usize,
    nsolutions: f64,
    is_syndrome_zero: bool,
}

impl SDFqProblem {
    /// # Errors
    /// Invalid code shape, `w > n`, or `q` not a prime power.
    pub fn new(n: usize, k: usize, w: usize, q: usize) -> EstimatorResult<Self> {
        validate_code(n, k)?;
        validate_weight(n, w)?;
        validate_field(q)?;
        Ok(Self {
            n,
            k,
            w,
            q,
            nsolutions: Self::expected_solutions(n, k, w, q),
            is_syndrome_zero: true,
        })
    }

    /// Log2 expected number of weight-`w` solutions, floored at 0.
    pub fn expected_solutions(n: usize, k: usize, w: usize, q: usize) -> f64 {
        let log_q = (q as f64).log2();
        let log_q1 = ((q - 1) as f64).log2();
        (log2_binomial(n, w) + w as f64 * log_q1 - (n - k) as f64 * log_q).max(0.0)
    }

    /// Override the log2 number of solutions.
    ///
    /// # Errors
    /// [`EstimatorError::InvalidLog2Count`](crate::estimators::errors::EstimatorError::InvalidLog2Count).
    pub fn with_nsolutions(mut self, nsolutions: f64) -> EstimatorResult<Self> {
        validate_log2_count(nsolutions)?;
        self.nsolutions = nsolutions;
        Ok(self)
    }

    pub fn with_syndrome_zero(mut self, is_syndrome_zero: bool) -> Self {
        self.is_syndrome_zero = is_syndrome_zero;
        self
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn w(&self) -> usize {
        self.w
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn nsolutions(&self) -> f64 {
        self.nsolutions
    }

    pub fn is_syndrome_zero(&self) -> bool {
        self.is_syndrome_zero
    }
}

impl fmt::Display for SDFqProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syndrome decoding problem with (n,k,w) = ({},{},{}) over Finite Field of size {}",
            self.n, self.k, self.w, self.q
        )
    }
}
