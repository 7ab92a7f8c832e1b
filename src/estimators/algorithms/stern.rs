//! Stern's collision-based information-set decoding over `F_q`.
//!
//! Splits an extended information set of size `k + l` into halves
//! `k1 = (k+l)/2`, `k2 = k + l - k1`, enumerates weight-`p` vectors on each
//! half and keeps the pairs whose syndromes collide on `l` coordinates.
//! Parameters are `p ∈ [0, min(w/2, 20)]` and `l ∈ [0, min(n-k, 400)]`, with
//! `l` narrowed to `n - k - (w - 2p)` once `p` is fixed.
//!
//! Time (log2) is `permutations + log2(2^gauss + 2^L1 + 2^L2 + 2^merge)
//! + log2 n + bit + access`, where
//! - `L1 = log2 C(k1,p) + max(0, p-z)·log2(q-1)`, `L2 = log2 C(k2,p) + p·log2(q-1)`,
//! - `merge = L1 + L2 - l·log2 q`,
//! - `permutations = max(0, log2 C(n,w) - log2 C(n-k-l, w-2p) - log2 C(k1,p)
//!   - log2 C(k2,p) - nsolutions)`.
//!
//! Memory is `log2(k·n + 2^L1 + 2^L2)`.
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
            ParameterRange, ParameterSpace,
        },
    },
    utils::{log2_binomial, log2_sum_exp2, min_max},
};

const P_CAP: usize = 20;
const L_CAP: usize = 400;

#[derive(Debug, Clone)]
pub struct SternCost {
    problem: SDFqProblem,
    options: EstimatorOptions,
    space: ParameterSpace,
}

impl SternCost {
    pub fn new(problem: SDFqProblem, options: EstimatorOptions) -> Self {
        let redundancy = problem.n() - problem.k();
        let mut space = ParameterSpace::new();
        space.set_range("p", 0, min_max(problem.w() / 2, P_CAP, options.full_domain) as i64);
        space.set_range("l", 0, min_max(redundancy, L_CAP, options.full_domain) as i64);
        Self { problem, options, space }
    }

    fn split(&self, l: i64) -> (i64, i64) {
        let k = self.problem.k() as i64;
        let k1 = (k + l) / 2;
        (k1, k + l - k1)
    }
}

impl CostModel for SternCost {
    fn name(&self) -> &'static str {
        "Stern"
    }

    fn parameter_space(&self) -> &ParameterSpace {
        &self.space
    }

    fn required_parameters(&self) -> &[ParameterName] {
        &["p", "l"]
    }

    fn narrow_range(
        &self, name: ParameterName, declared: &ParameterRange, outer: &ParameterAssignment,
    ) -> Option<ParameterRange> {
        if name != "l" {
            return Some(*declared);
        }
        let p = outer.integer("p")?;
        let (n, k, w) = (self.problem.n() as i64, self.problem.k() as i64, self.problem.w() as i64);
        Some(declared.with_upper((n - k - (w - 2 * p)) as f64))
    }

    fn is_invalid(&self, a: &ParameterAssignment) -> bool {
        let (Some(p), Some(l)) = (a.integer("p"), a.integer("l")) else {
            return true;
        };
        let (n, k, w) = (self.problem.n() as i64, self.problem.k() as i64, self.problem.w() as i64);
        let (k1, k2) = self.split(l);
        p < 0 || l < 0 || 2 * p > w || p > k1 || p > k2 || n - k - l < w - 2 * p
    }

    fn evaluate(
        &self, a: &ParameterAssignment, mut breakdown: Option<&mut Breakdown>,
    ) -> OptResult<CostResult> {
        let p = a.require_int("p")?;
        let l = a.require_int("l")?;
        if self.is_invalid(a) {
            return Ok(CostResult::Infeasible);
        }
        if !self.options.is_estimate() {
            return Ok(CostResult::placeholder());
        }
        let (n, k, w, q) = (self.problem.n(), self.problem.k(), self.problem.w(), self.problem.q());
        let (k1, k2) = self.split(l);
        let (p, l, k1, k2) = (p as usize, l as usize, k1 as usize, k2 as usize);
        let z = usize::from(self.problem.is_syndrome_zero());
        let log_q = (q as f64).log2();
        let log_q1 = ((q - 1) as f64).log2();

        let list1 = log2_binomial(k1, p) + p.saturating_sub(z) as f64 * log_q1;
        let list2 = log2_binomial(k2, p) + p as f64 * log_q1;
        let merge = list1 + list2 - l as f64 * log_q;
        let permutations = (log2_binomial(n, w)
            - log2_binomial(n - k - l, w - 2 * p)
            - log2_binomial(k1, p)
            - log2_binomial(k2, p)
            - self.problem.nsolutions())
        .max(0.0);
        let gauss = ((k * k) as f64).log2();
        let bit = self.options.bit_conversion(q);

        let time = permutations
            + log2_sum_exp2(&[gauss, list1, list2, merge])
            + (n as f64).log2()
            + bit;
        let memory = log2_sum_exp2(&[((k * n) as f64).log2(), list1, list2]);

        if let Some(sink) = breakdown.as_deref_mut() {
            sink.insert(CostLabel::Permutations, permutations);
            sink.insert(CostLabel::GaussianElimination, gauss);
            sink.insert(CostLabel::ListConstruction, log2_sum_exp2(&[list1, list2]));
            sink.insert(CostLabel::ListSize, list1.max(list2));
            sink.insert(CostLabel::Merge, merge);
            sink.insert(CostLabel::BitComplexity, bit);
        }
        Ok(self.options.finalize(time, memory, breakdown))
    }
}

impl AttackModel for SternCost {
    type Problem = SDFqProblem;

    fn problem(&self) -> &SDFqProblem {
        &self.problem
    }

    fn options(&self) -> &EstimatorOptions {
        &self.options
    }
}

/// Stern estimator facade.
pub type Stern = Estimator<SternCost>;

impl Estimator<SternCost> {
    pub fn new(problem: SDFqProblem, options: EstimatorOptions) -> EstimatorResult<Self> {
        Ok(Estimator::from_model(SternCost::new(problem, options)))
    }

    /// Optimal weight per half of the extended information set.
    pub fn p(&self) -> EstimatorResult<i64> {
        self.optimal_integer("p")
    }

    /// Optimal number of collision coordinates.
    pub fn l(&self) -> EstimatorResult<i64> {
        self.optimal_integer("l")
    }
}
