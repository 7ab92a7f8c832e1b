//! Multivariate quadratic systems.
use crate::estimators::{
    core::validation::validate_field,
    errors::{EstimatorError, EstimatorResult},
};
use std::fmt;

/// Solve `m` random quadratic polynomials in `n` variables over `F_q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MQProblem {
    n: usize,
    m: usize,
    q: usize,
}

impl MQProblem {
    /// # Errors
    /// [`EstimatorError::EmptySystem`] for `n = 0` or `m = 0`, or `q` not a
    /// prime power.
    pub fn new(n: usize, m: usize, q: usize) -> EstimatorResult<Self> {
        if n == 0 || m == 0 {
            return Err(EstimatorError::EmptySystem { n, m });
        }
        validate_field(q)?;
        Ok(Self { n, m, q })
    }

    /// Number of variables.
    pub fn nvariables(&self) -> usize {
        self.n
    }

    /// Number of polynomials.
    pub fn npolynomials(&self) -> usize {
        self.m
    }

    pub fn q(&self) -> usize {
        self.q
    }
}

impl fmt::Display for MQProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the MQ problem with {} variables and {} polynomials over Finite Field of size {}",
            self.n, self.m, self.q
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_display() {
        let problem = MQProblem::new(183, 12, 4).unwrap();
        assert_eq!(
            problem.to_string(),
            "the MQ problem with 183 variables and 12 polynomials over Finite Field of size 4"
        );
        assert_eq!(MQProblem::new(0, 3, 4), Err(EstimatorError::EmptySystem { n: 0, m: 3 }));
        assert_eq!(MQProblem::new(10, 3, 12), Err(EstimatorError::NotPrimePower { q: 12 }));
    }
}
