//! Beullens' list-collision attack on permutation equivalence.
//!
//! Purpose
//! -------
//! Estimate the cost of recovering the permutation between two equivalent
//! codes by building lists of low-weight codewords in each code and looking
//! for a pair with matching invariants. The only tunable parameter is the
//! codeword weight `w ∈ [0, n]`.
//!
//! Key behaviors
//! -------------
//! - `S = log2 |B(n, q, w)| - (n-k)·log2 q - log2(q-1)` is the log2 number of
//!   weight-`≤ w` codewords up to scalars; candidates with `S < 1` are
//!   invalid.
//! - Candidates whose median orbit size under permutations exceeds
//!   `(n-k)·log2 q - log2 ceil(4·log2 n)` are invalid: invariants would no
//!   longer identify a unique match.
//! - `list = (S + log2(2·log2 n)) / 2`; filling a list costs
//!   `isd - S + list + 1` where `isd` is the fastest syndrome-decoding attack
//!   on `(n, k, w, q)`; bringing its entries into normal form costs
//!   `1 + list`.
//! - Time is `max(lists, normal form) + log2 n + access`, memory is
//!   `list + log2 n`.
//!
//! Conventions
//! -----------
//! - The nested syndrome-decoding suite runs under its own options
//!   (`sd_options`, by default [`EstimatorOptions::subroutine`]) and counts
//!   field operations.
//! - The `isd` term is the nested attack's time; its memory is not charged.
use crate::{
    estimators::{
        algorithms::isd_subroutine,
        core::{
            facade::{AttackModel, Estimator},
            options::EstimatorOptions,
        },
        errors::EstimatorResult,
        problems::PEProblem,
    },
    optimization::{
        errors::OptResult,
        parameter_search::{
            Breakdown, CostLabel, CostModel, CostResult, ParameterAssignment, ParameterName,
            ParameterSpace,
        },
    },
    utils::{hamming_ball_log2, log2_binomial, log2_factorial, log2_gamma},
};

#[derive(Debug, Clone)]
pub struct BeullensCost {
    problem: PEProblem,
    options: EstimatorOptions,
    sd_options: EstimatorOptions,
    space: ParameterSpace,
}

impl BeullensCost {
    pub fn new(
        problem: PEProblem, options: EstimatorOptions, sd_options: EstimatorOptions,
    ) -> Self {
        let mut space = ParameterSpace::new();
        space.set_range("w", 0, problem.n() as i64);
        Self { problem, options, sd_options, space }
    }

    pub fn sd_options(&self) -> &EstimatorOptions {
        &self.sd_options
    }

    fn search_space_size(&self, w: usize) -> f64 {
        let (n, k, q) = (self.problem.n(), self.problem.k(), self.problem.q());
        hamming_ball_log2(n, q, w) - (n - k) as f64 * (q as f64).log2() - ((q - 1) as f64).log2()
    }

    fn orbit_threshold(&self) -> f64 {
        let (n, k, q) = (self.problem.n(), self.problem.k(), self.problem.q());
        (n - k) as f64 * (q as f64).log2() - (4.0 * (n as f64).log2()).ceil().log2()
    }
}

/// Log2 median size of the orbit of a random weight-`w` vector of length
/// `n` over `F_q` under coordinate permutations.
///
/// The non-zero entries split into `q - 1` value classes of expected size
/// `w / (q - 1)`; permuting inside a class fixes the vector.
pub fn median_orbit_size(n: usize, w: usize, q: usize) -> f64 {
    let classes = (q - 1) as f64;
    let stabilizer = classes * log2_gamma(w as f64 / classes + 1.0);
    log2_binomial(n, w) + log2_factorial(w) - stabilizer.max(0.0)
}

impl CostModel for BeullensCost {
    fn name(&self) -> &'static str {
        "Beullens"
    }

    fn parameter_space(&self) -> &ParameterSpace {
        &self.space
    }

    fn required_parameters(&self) -> &[ParameterName] {
        &["w"]
    }

    fn is_invalid(&self, a: &ParameterAssignment) -> bool {
        let w = match a.integer("w") {
            Some(w) if (0..=self.problem.n() as i64).contains(&w) => w as usize,
            _ => return true,
        };
        self.search_space_size(w) < 1.0
            || median_orbit_size(self.problem.n(), w, self.problem.q()) > self.orbit_threshold()
    }

    fn evaluate(
        &self, a: &ParameterAssignment, mut breakdown: Option<&mut Breakdown>,
    ) -> OptResult<CostResult> {
        let w = a.require_int("w")?;
        if self.is_invalid(a) {
            return Ok(CostResult::Infeasible);
        }
        if !self.options.is_estimate() {
            return Ok(CostResult::placeholder());
        }
        let w = w as usize;
        let (n, k, q) = (self.problem.n(), self.problem.k(), self.problem.q());
        let log_n = (n as f64).log2();

        let isd = isd_subroutine(n, k, w, q, &self.sd_options)?;
        if !isd.is_feasible() {
            return Ok(CostResult::Infeasible);
        }
        let search_space = self.search_space_size(w);
        let list = (search_space + (2.0 * log_n).log2()) / 2.0;
        let lists = isd.time() - search_space + list + 1.0;
        let normal_form = 1.0 + list;

        if let Some(sink) = breakdown.as_deref_mut() {
            sink.insert(CostLabel::Isd, isd.time());
            sink.insert(CostLabel::ListSize, list);
            sink.insert(CostLabel::ListConstruction, lists);
            sink.insert(CostLabel::NormalForm, normal_form);
        }
        Ok(self.options.finalize(lists.max(normal_form) + log_n, list + log_n, breakdown))
    }
}

impl AttackModel for BeullensCost {
    type Problem = PEProblem;

    fn problem(&self) -> &PEProblem {
        &self.problem
    }

    fn options(&self) -> &EstimatorOptions {
        &self.options
    }
}

/// Beullens estimator facade.
pub type Beullens = Estimator<BeullensCost>;

impl Estimator<BeullensCost> {
    /// Build with the default subroutine options.
    pub fn new(problem: PEProblem, options: EstimatorOptions) -> EstimatorResult<Self> {
        Self::with_sd_options(problem, options, EstimatorOptions::subroutine())
    }

    /// Build with explicit options for the nested syndrome-decoding suite.
    pub fn with_sd_options(
        problem: PEProblem, options: EstimatorOptions, sd_options: EstimatorOptions,
    ) -> EstimatorResult<Self> {
        Ok(Estimator::from_model(BeullensCost::new(problem, options, sd_options)))
    }

    /// Optimal codeword weight.
    pub fn w(&self) -> EstimatorResult<i64> {
        self.optimal_integer("w")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::core::ComplexityType;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Large-field instance: an interior weight is optimal.
    //
    // Given
    // -----
    // - PE(60, 30, 31), w ∈ [0, 60].
    //
    // Expect
    // ------
    // - 61 candidates, w = 25, reference time and memory.
    fn large_field_instance() {
        // Arrange
        let beullens =
            Beullens::new(PEProblem::new(60, 30, 31).unwrap(), EstimatorOptions::default())
                .unwrap();

        // Act
        let w = beullens.w().unwrap();

        // Assert
        assert_eq!(w, 25);
        assert_eq!(beullens.search_stats().unwrap().candidates, 61);
        assert_relative_eq!(beullens.time_complexity().unwrap(), 41.67558517179677, epsilon = 1e-8);
        assert_relative_eq!(
            beullens.memory_complexity().unwrap(),
            20.038206659349818,
            epsilon = 1e-8
        );
    }

    #[test]
    // Purpose
    // -------
    // Ternary half-rate instance: every weight either yields too few
    // codewords or orbits too large to identify a match.
    //
    // Expect
    // ------
    // - All 101 candidates rejected; time and memory +inf; empty breakdown.
    fn ternary_instance_is_infeasible() {
        let beullens =
            Beullens::new(PEProblem::new(100, 50, 3).unwrap(), EstimatorOptions::default())
                .unwrap();

        assert_eq!(beullens.time_complexity().unwrap(), f64::INFINITY);
        assert_eq!(beullens.memory_complexity().unwrap(), f64::INFINITY);
        assert_eq!(beullens.search_stats().unwrap().rejected, 101);
        assert!(beullens.verbose_information().unwrap().is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verbose information reconstructs time.
    fn verbose_breakdown_reconstructs_time() {
        let beullens =
            Beullens::new(PEProblem::new(60, 30, 31).unwrap(), EstimatorOptions::default())
                .unwrap();
        let b = beullens.verbose_information().unwrap();

        let rebuilt = b[&CostLabel::ListConstruction].max(b[&CostLabel::NormalForm])
            + 60f64.log2()
            + b[&CostLabel::MemoryAccess];
        assert_relative_eq!(rebuilt, beullens.time_complexity().unwrap(), epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Under tilde-O the nested syndrome-decoding suite is never consulted:
    // valid weights report the neutral placeholder, rejected ones stay
    // infeasible.
    //
    // Given
    // -----
    // - PE(60, 30, 31) and PE(100, 50, 3) with `ComplexityType::TildeO`.
    //
    // Expect
    // ------
    // - The first: time and memory 0, the first valid weight (<= 25) wins,
    //   no evaluator-reported infeasibility, empty breakdown.
    // - The second: still +inf, all 101 candidates rejected.
    fn tilde_o_reports_placeholder_without_nested_isd() {
        // Arrange
        let options = EstimatorOptions::default().with_complexity_type(ComplexityType::TildeO);
        let solvable = Beullens::new(PEProblem::new(60, 30, 31).unwrap(), options.clone()).unwrap();
        let unsolvable = Beullens::new(PEProblem::new(100, 50, 3).unwrap(), options).unwrap();

        // Act
        let stats = solvable.search_stats().unwrap();

        // Assert
        assert_eq!(solvable.time_complexity().unwrap(), 0.0);
        assert_eq!(solvable.memory_complexity().unwrap(), 0.0);
        assert!(solvable.w().unwrap() <= 25);
        assert_eq!(stats.candidates, 61);
        assert_eq!(stats.infeasible, 0);
        assert!(solvable.verbose_information().unwrap().is_empty());
        assert_eq!(unsolvable.time_complexity().unwrap(), f64::INFINITY);
        assert_eq!(unsolvable.search_stats().unwrap().rejected, 101);
    }

    #[test]
    // Purpose
    // -------
    // Over F_2 the orbit is the full C(n, w)·w!/w! = C(n, w).
    fn binary_orbit_is_binomial() {
        assert_relative_eq!(median_orbit_size(20, 6, 2), log2_binomial(20, 6), epsilon = 1e-9);
    }
}
