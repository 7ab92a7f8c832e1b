//! Lee–Brickell information-set decoding over `F_q`.
//!
//! Purpose
//! -------
//! Estimate the cost of solving an [`SDFqProblem`] by repeatedly guessing an
//! information set and enumerating every weight-`p` combination of its
//! columns. The single tunable parameter is `p`.
//!
//! Key behaviors
//! -------------
//! - Search range `p ∈ [0, min(w/2, 20)]` (`max` when `full_domain` is set).
//! - A candidate is invalid when `p > w`, `p > k` or `w - p > n - k`.
//! - Time (log2) is
//!   `permutations + log2(2^gauss + 2^lists) + log2 n + bit + access`, with
//!   - `permutations = max(0, log2 C(n,w) - log2 C(n-k,w-p) - log2 C(k,p) - nsolutions)`,
//!   - `gauss = log2 k²`,
//!   - `lists = log2 C(k,p) + max(0, p - z)·log2(q-1)`, `z = 1` for a zero
//!     syndrome,
//!   - `bit = log2 log2 q` when bit complexities are on,
//!   - `access` the memory-access penalty.
//! - Memory is `log2(k·n)`.
//!
//! Verbose breakdown
//! -----------------
//! Records every term above under [`CostLabel::Permutations`],
//! [`CostLabel::GaussianElimination`], [`CostLabel::ListConstruction`],
//! [`CostLabel::BitComplexity`] and [`CostLabel::MemoryAccess`]; the time
//! combination rule above reconstructs the reported time exactly.
use crate::{
    estimators::{
        core::{
            facade::{AttackModel, Estimator},
            options::EstimatorOptions,
        },
        errors::EstimatorResult,
        problems::SDFqProblem,
    },
    optimization::{
        errors::OptResult,
        parameter_search::{
            Breakdown, CostLabel, CostModel, CostResult, ParameterAssignment, ParameterName,
            ParameterSpace,
        },
    },
    utils::{log2_binomial, log2_sum_exp2, min_max},
};

const P_CAP: usize = 20;

/// Cost model of the Lee–Brickell attack.
#[derive(Debug, Clone)]
pub struct LeeBrickellCost {
    problem: SDFqProblem,
    options: EstimatorOptions,
    space: ParameterSpace,
}

impl LeeBrickellCost {
    pub fn new(problem: SDFqProblem, options: EstimatorOptions) -> Self {
        let mut space = ParameterSpace::new();
        space.set_range("p", 0, min_max(problem.w() / 2, P_CAP, options.full_domain) as i64);
        Self { problem, options, space }
    }
}

impl CostModel for LeeBrickellCost {
    fn name(&self) -> &'static str {
        "Lee-Brickell"
    }

    fn parameter_space(&self) -> &ParameterSpace {
        &self.space
    }

    fn required_parameters(&self) -> &[ParameterName] {
        &["p"]
    }

    fn is_invalid(&self, a: &ParameterAssignment) -> bool {
        let Some(p) = a.integer("p") else {
            return true;
        };
        let (n, k, w) = (self.problem.n() as i64, self.problem.k() as i64, self.problem.w() as i64);
        p < 0 || p > w || k < p || n - k < w - p
    }

    fn evaluate(
        &self, a: &ParameterAssignment, mut breakdown: Option<&mut Breakdown>,
    ) -> OptResult<CostResult> {
        let p = a.require_int("p")?;
        if self.is_invalid(a) {
            return Ok(CostResult::Infeasible);
        }
        if !self.options.is_estimate() {
            return Ok(CostResult::placeholder());
        }
        let p = p as usize;
        let (n, k, w, q) = (self.problem.n(), self.problem.k(), self.problem.w(), self.problem.q());
        let z = usize::from(self.problem.is_syndrome_zero());

        let permutations = (log2_binomial(n, w)
            - log2_binomial(n - k, w - p)
            - log2_binomial(k, p)
            - self.problem.nsolutions())
        .max(0.0);
        let gauss = ((k * k) as f64).log2();
        let lists = log2_binomial(k, p) + p.saturating_sub(z) as f64 * ((q - 1) as f64).log2();
        let bit = self.options.bit_conversion(q);

        let time = permutations + log2_sum_exp2(&[gauss, lists]) + (n as f64).log2() + bit;
        let memory = ((k * n) as f64).log2();

        if let Some(sink) = breakdown.as_deref_mut() {
            sink.insert(CostLabel::Permutations, permutations);
            sink.insert(CostLabel::GaussianElimination, gauss);
            sink.insert(CostLabel::ListConstruction, lists);
            sink.insert(CostLabel::BitComplexity, bit);
        }
        Ok(self.options.finalize(time, memory, breakdown))
    }
}

impl AttackModel for LeeBrickellCost {
    type Problem = SDFqProblem;

    fn problem(&self) -> &SDFqProblem {
        &self.problem
    }

    fn options(&self) -> &EstimatorOptions {
        &self.options
    }
}

/// Lee–Brickell estimator facade.
pub type LeeBrickell = Estimator<LeeBrickellCost>;

impl Estimator<LeeBrickellCost> {
    /// Build the estimator. Lee–Brickell applies to every valid
    /// [`SDFqProblem`], so this never fails today; the `Result` keeps the
    /// constructor uniform with the other algorithms.
    pub fn new(problem: SDFqProblem, options: EstimatorOptions) -> EstimatorResult<Self> {
        Ok(Estimator::from_model(LeeBrickellCost::new(problem, options)))
    }

    /// Optimal number of error positions inside the information set.
    pub fn p(&self) -> EstimatorResult<i64> {
        self.optimal_integer("p")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        estimators::core::ComplexityType, optimization::parameter_search::evaluate_at,
    };
    use approx::assert_relative_eq;

    fn estimator(n: usize, k: usize, w: usize, q: usize) -> LeeBrickell {
        let problem = SDFqProblem::new(n, k, w, q).unwrap();
        LeeBrickell::new(problem, EstimatorOptions::default()).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Reference scenario: the optimum is p = 2 and a direct evaluation at the
    // optimum reproduces the reported time and memory.
    //
    // Given
    // -----
    // - (n, k, w, q) = (100, 50, 10, 5), default options, p ∈ [0, 5].
    //
    // Expect
    // ------
    // - p = 2, time ≈ 25.4306, memory = log2 5000.
    fn reference_scenario_selects_p_two() {
        // Arrange
        let lb = estimator(100, 50, 10, 5);

        // Act
        let p = lb.p().unwrap();
        let time = lb.time_complexity().unwrap();
        let memory = lb.memory_complexity().unwrap();
        let direct = evaluate_at(lb.model(), lb.optimal_parameters().unwrap(), None).unwrap();

        // Assert
        assert_eq!(p, 2);
        assert_relative_eq!(time, 25.430598962930787, epsilon = 1e-9);
        assert_relative_eq!(memory, 12.287712379549449, epsilon = 1e-9);
        assert_relative_eq!(direct.time(), time, epsilon = 1e-6);
        assert_relative_eq!(direct.memory(), memory, epsilon = 1e-6);
        assert_eq!(lb.search_stats().unwrap().candidates, 6);
    }

    #[test]
    // Purpose
    // -------
    // Larger instance with a non-trivial field matches the reference value.
    fn large_instance_time() {
        let lb = estimator(961, 771, 48, 31);
        assert_relative_eq!(lb.time_complexity().unwrap(), 140.31928490910389, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // The verbose breakdown reconstructs the reported time.
    fn verbose_breakdown_reconstructs_time() {
        // Arrange
        let lb = estimator(100, 50, 10, 5);

        // Act
        let b = lb.verbose_information().unwrap();

        // Assert
        let rebuilt = b[&CostLabel::Permutations]
            + log2_sum_exp2(&[b[&CostLabel::GaussianElimination], b[&CostLabel::ListConstruction]])
            + 100f64.log2()
            + b[&CostLabel::BitComplexity]
            + b[&CostLabel::MemoryAccess];
        assert_relative_eq!(rebuilt, lb.time_complexity().unwrap(), epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Weight 0 leaves only p = 0; tilde-O reports the neutral placeholder;
    // a full domain widens the range past w/2.
    fn edge_cases_and_switches() {
        let trivial = estimator(20, 10, 0, 2);
        assert_eq!(trivial.p().unwrap(), 0);
        assert!(trivial.time_complexity().unwrap().is_finite());

        let tilde = LeeBrickell::new(
            SDFqProblem::new(100, 50, 10, 5).unwrap(),
            EstimatorOptions::default().with_complexity_type(ComplexityType::TildeO),
        )
        .unwrap();
        assert_eq!(tilde.time_complexity().unwrap(), 0.0);
        assert_eq!(tilde.memory_complexity().unwrap(), 0.0);

        let wide = LeeBrickell::new(
            SDFqProblem::new(100, 50, 10, 5).unwrap(),
            EstimatorOptions::default().with_full_domain(true),
        )
        .unwrap();
        assert_eq!(wide.model().parameter_space().range("p").map(|r| r.upper), Some(20.0));
        assert_eq!(wide.search_stats().unwrap().rejected, 10);
    }

    #[test]
    // Purpose
    // -------
    // Display names the algorithm and the problem.
    fn display() {
        assert_eq!(
            estimator(100, 50, 10, 5).to_string(),
            "Lee-Brickell estimator for syndrome decoding problem with (n,k,w) = (100,50,10) \
             over Finite Field of size 5"
        );
    }
}
