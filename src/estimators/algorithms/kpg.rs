//! Kipnis–Patarin–Goubin algorithm for underdetermined MQ systems over
//! fields of characteristic 2.
//!
//! Applies when `q` is a power of two and `m(m+1) < n`: the system is then
//! reduced to a linear one whose solution costs `m·n^ω` field operations.
//! There is nothing to optimize; the model has no parameters and the search
//! evaluates the empty assignment once.
use crate::{
    estimators::{
        core::{
            facade::{AttackModel, Estimator},
            options::EstimatorOptions,
            validation::validate_binary_field,
        },
        errors::{EstimatorError, EstimatorResult},
        problems::MQProblem,
    },
    optimization::{
        errors::OptResult,
        parameter_search::{
            Breakdown, CostLabel, CostModel, CostResult, ParameterAssignment, ParameterSpace,
        },
    },
};

#[derive(Debug, Clone)]
pub struct KpgCost {
    problem: MQProblem,
    options: EstimatorOptions,
    space: ParameterSpace,
}

impl KpgCost {
    /// # Errors
    /// - [`EstimatorError::NotPowerOfTwo`] if `q` is not a power of two.
    /// - [`EstimatorError::TooManyPolynomials`] unless `m(m+1) < n`.
    pub fn new(problem: MQProblem, options: EstimatorOptions) -> EstimatorResult<Self> {
        validate_binary_field(problem.q())?;
        let (n, m) = (problem.nvariables(), problem.npolynomials());
        if m.saturating_mul(m + 1) >= n {
            return Err(EstimatorError::TooManyPolynomials {
                n,
                m,
                reason: "The condition m(m + 1) < n must be satisfied.",
            });
        }
        Ok(Self { problem, options, space: ParameterSpace::new() })
    }
}

impl CostModel for KpgCost {
    fn name(&self) -> &'static str {
        "KPG"
    }

    fn parameter_space(&self) -> &ParameterSpace {
        &self.space
    }

    fn evaluate(
        &self, _: &ParameterAssignment, mut breakdown: Option<&mut Breakdown>,
    ) -> OptResult<CostResult> {
        if !self.options.is_estimate() {
            return Ok(CostResult::placeholder());
        }
        let n = self.problem.nvariables() as f64;
        let m = self.problem.npolynomials() as f64;
        let time = m.log2() + self.options.linear_algebra_constant * n.log2();
        let memory = m.log2() + 2.0 * n.log2();

        if let Some(sink) = breakdown.as_deref_mut() {
            sink.insert(CostLabel::GaussianElimination, time);
        }
        Ok(self.options.finalize(time, memory, breakdown))
    }
}

impl AttackModel for KpgCost {
    type Problem = MQProblem;

    fn problem(&self) -> &MQProblem {
        &self.problem
    }

    fn options(&self) -> &EstimatorOptions {
        &self.options
    }
}

/// KPG estimator facade.
pub type Kpg = Estimator<KpgCost>;

impl Estimator<KpgCost> {
    /// # Errors
    /// As for [`KpgCost::new`].
    pub fn new(problem: MQProblem, options: EstimatorOptions) -> EstimatorResult<Self> {
        Ok(Estimator::from_model(KpgCost::new(problem, options)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::core::{ComplexityType, MemoryAccess};
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Reference instance with ω = 2.8.
    //
    // Given
    // -----
    // - n = 183 variables, m = 12 polynomials over F_4.
    //
    // Expect
    // ------
    // - time log2(12·183^2.8), memory log2(12·183²), one candidate, no
    //   parameters.
    fn reference_instance() {
        // Arrange
        let options = EstimatorOptions::default().with_linear_algebra_constant(2.8).unwrap();
        let kpg = Kpg::new(MQProblem::new(183, 12, 4).unwrap(), options).unwrap();

        // Act
        let time = kpg.time_complexity().unwrap();
        let memory = kpg.memory_complexity().unwrap();

        // Assert
        assert_relative_eq!(time, 24.628922047916475, epsilon = 1e-9);
        assert_relative_eq!(memory, 18.61636217728924, epsilon = 1e-9);
        assert!(kpg.optimal_parameters().unwrap().is_empty());
        assert_eq!(kpg.search_stats().unwrap().candidates, 1);
        assert_eq!(
            kpg.to_string(),
            "KPG estimator for the MQ problem with 183 variables and 12 polynomials \
             over Finite Field of size 4"
        );
    }

    #[test]
    // Purpose
    // -------
    // The verbose breakdown reconstructs time under a non-constant
    // memory-access model.
    //
    // Given
    // -----
    // - The reference instance with ω = 2.8 and logarithmic memory access.
    //
    // Expect
    // ------
    // - gaussian-elimination + memory-access == time;
    // - the penalty is log2 of the reported memory and is added to the
    //   constant-access time.
    fn verbose_breakdown_reconstructs_time_with_memory_access() {
        // Arrange
        let options = EstimatorOptions::default()
            .with_linear_algebra_constant(2.8)
            .unwrap()
            .with_memory_access(MemoryAccess::Logarithmic);
        let kpg = Kpg::new(MQProblem::new(183, 12, 4).unwrap(), options).unwrap();

        // Act
        let b = kpg.verbose_information().unwrap();
        let time = kpg.time_complexity().unwrap();
        let memory = kpg.memory_complexity().unwrap();

        // Assert
        assert_eq!(b.len(), 2);
        assert_relative_eq!(
            b[&CostLabel::GaussianElimination] + b[&CostLabel::MemoryAccess],
            time,
            epsilon = 1e-12
        );
        assert_relative_eq!(b[&CostLabel::MemoryAccess], memory.log2(), epsilon = 1e-12);
        assert_relative_eq!(time, 24.628922047916475 + memory.log2(), epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Applicability preconditions and the tilde-O switch.
    fn preconditions_and_tilde_o() {
        assert_eq!(
            Kpg::new(MQProblem::new(183, 12, 3).unwrap(), EstimatorOptions::default()).err(),
            Some(EstimatorError::NotPowerOfTwo { q: 3 })
        );
        assert!(matches!(
            Kpg::new(MQProblem::new(156, 12, 4).unwrap(), EstimatorOptions::default()),
            Err(EstimatorError::TooManyPolynomials { n: 156, m: 12, .. })
        ));

        let tilde = Kpg::new(
            MQProblem::new(183, 12, 4).unwrap(),
            EstimatorOptions::default().with_complexity_type(ComplexityType::TildeO),
        )
        .unwrap();
        assert_eq!(tilde.time_complexity().unwrap(), 0.0);
        assert_eq!(tilde.memory_complexity().unwrap(), 0.0);
        assert!(tilde.verbose_information().unwrap().is_empty());
    }
}
