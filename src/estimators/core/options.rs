//! Estimator options — configuration shared by every cost model.
//!
//! Purpose
//! -------
//! Collect the knobs that change how a cost is computed without changing the
//! attack itself: complexity type, linear-algebra exponent, memory-access
//! penalty, bit-complexity conversion, parameter-domain width and an optional
//! memory bound. Options are validated once at construction so cost models
//! can read them on every evaluation without re-checking.
//!
//! Key behaviors
//! -------------
//! - [`EstimatorOptions::new`] validates every numeric field;
//!   `with_*` setters return updated copies (validating where needed).
//! - [`EstimatorOptions::finalize`] turns raw `(time, memory)` into a
//!   [`CostResult`]: it enforces the memory bound and adds the
//!   memory-access penalty to time.
//! - [`EstimatorOptions::bit_conversion`] gives the `log2(log2 q)` term that
//!   converts field operations into bit operations.
//!
//! Invariants & assumptions
//! ------------------------
//! - `linear_algebra_constant ∈ [2, 3]`.
//! - `memory_bound`, when set, is finite and non-negative (log2 bits).
//!
//! Conventions
//! -----------
//! - All values are base-2 logarithms, like the costs they adjust.
//! - Nested estimators (syndrome-decoding subroutines) take their own
//!   options, by default [`EstimatorOptions::subroutine`], which skips the
//!   bit-complexity term so that the caller controls the unit.
//!
//! Testing notes
//! -------------
//! - Unit tests check defaults, validation errors and the `finalize` rules.
use crate::{
    estimators::{
        core::{
            complexity::ComplexityType,
            memory_access::MemoryAccess,
            validation::{validate_linear_algebra_constant, validate_memory_bound},
        },
        errors::EstimatorResult,
    },
    optimization::parameter_search::{Breakdown, CostLabel, CostResult, Log2Cost},
};

/// Default exponent of matrix multiplication (Strassen).
pub const DEFAULT_LINEAR_ALGEBRA_CONSTANT: f64 = 2.81;

/// Configuration read by cost models on every evaluation.
///
/// Fields:
/// - `complexity_type`: concrete estimate or asymptotic tilde-O.
/// - `memory_access`: penalty model added to time.
/// - `linear_algebra_constant`: exponent ω of linear algebra, in `[2, 3]`.
/// - `bit_complexities`: add `log2(log2 q)` to times over `F_q`.
/// - `full_domain`: widen capped parameter ranges to their full domain.
/// - `memory_bound`: log2 memory above which a candidate is infeasible.
///
/// Default: estimate, constant access, ω = 2.81, bit complexities on,
/// narrow domain, no memory bound.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorOptions {
    pub complexity_type: ComplexityType,
    pub memory_access: MemoryAccess,
    pub linear_algebra_constant: f64,
    pub bit_complexities: bool,
    pub full_domain: bool,
    pub memory_bound: Option<Log2Cost>,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            complexity_type: ComplexityType::Estimate,
            memory_access: MemoryAccess::Constant,
            linear_algebra_constant: DEFAULT_LINEAR_ALGEBRA_CONSTANT,
            bit_complexities: true,
            full_domain: false,
            memory_bound: None,
        }
    }
}

impl EstimatorOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`EstimatorError::InvalidLinearAlgebraConstant`](crate::estimators::errors::EstimatorError::InvalidLinearAlgebraConstant)
    ///   if ω is non-finite or outside `[2, 3]`.
    /// - [`EstimatorError::InvalidMemoryBound`](crate::estimators::errors::EstimatorError::InvalidMemoryBound)
    ///   for a non-finite or negative bound.
    pub fn new(
        complexity_type: ComplexityType, memory_access: MemoryAccess,
        linear_algebra_constant: f64, bit_complexities: bool, full_domain: bool,
        memory_bound: Option<Log2Cost>,
    ) -> EstimatorResult<Self> {
        validate_linear_algebra_constant(linear_algebra_constant)?;
        validate_memory_bound(memory_bound)?;
        Ok(Self {
            complexity_type,
            memory_access,
            linear_algebra_constant,
            bit_complexities,
            full_domain,
            memory_bound,
        })
    }

    /// Defaults for a nested syndrome-decoding subroutine: counts in field
    /// operations (no bit-complexity term).
    pub fn subroutine() -> Self {
        Self { bit_complexities: false, ..Self::default() }
    }

    pub fn with_complexity_type(mut self, complexity_type: ComplexityType) -> Self {
        self.complexity_type = complexity_type;
        self
    }

    pub fn with_memory_access(mut self, memory_access: MemoryAccess) -> Self {
        self.memory_access = memory_access;
        self
    }

    pub fn with_bit_complexities(mut self, bit_complexities: bool) -> Self {
        self.bit_complexities = bit_complexities;
        self
    }

    pub fn with_full_domain(mut self, full_domain: bool) -> Self {
        self.full_domain = full_domain;
        self
    }

    /// # Errors
    /// As for [`EstimatorOptions::new`].
    pub fn with_linear_algebra_constant(mut self, value: f64) -> EstimatorResult<Self> {
        validate_linear_algebra_constant(value)?;
        self.linear_algebra_constant = value;
        Ok(self)
    }

    /// # Errors
    /// As for [`EstimatorOptions::new`].
    pub fn with_memory_bound(mut self, bound: Option<Log2Cost>) -> EstimatorResult<Self> {
        validate_memory_bound(bound)?;
        self.memory_bound = bound;
        Ok(self)
    }

    pub fn is_estimate(&self) -> bool {
        self.complexity_type == ComplexityType::Estimate
    }

    /// `log2(log2 q)` when bit complexities are requested, else 0.
    pub fn bit_conversion(&self, q: usize) -> Log2Cost {
        if self.bit_complexities { (q as f64).log2().log2() } else { 0.0 }
    }

    /// Apply the memory bound and the memory-access penalty.
    ///
    /// Records [`CostLabel::MemoryAccess`] in `breakdown` when the candidate
    /// stays within the bound.
    pub fn finalize(
        &self, time: Log2Cost, memory: Log2Cost, breakdown: Option<&mut Breakdown>,
    ) -> CostResult {
        if let Some(bound) = self.memory_bound {
            if memory > bound {
                return CostResult::Infeasible;
            }
        }
        let penalty = self.memory_access.cost(memory);
        if let Some(sink) = breakdown {
            sink.insert(CostLabel::MemoryAccess, penalty);
        }
        CostResult::feasible(time + penalty, memory)
    }
}
