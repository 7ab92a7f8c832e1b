//! Public API surface of the parameter search.
//!
//! - [`CostModel`]: trait each attack implements (the cost-function adapter).
//! - [`CostResult`]: tagged outcome of one evaluation (feasible or not).
//! - [`OptimizationResult`] and [`SearchStats`]: normalized result returned
//!   by [`minimize`](crate::optimization::parameter_search::minimize).
//!
//! Convention: the search *minimizes* time in log2-space, breaking ties on
//! memory and then on scan order. Infeasibility is a value, never an error.
use crate::optimization::{
    errors::OptResult,
    parameter_search::{
        assignment::ParameterAssignment,
        space::{ParameterRange, ParameterSpace},
        types::{Breakdown, Log2Cost, ParameterName},
    },
};

/// Outcome of evaluating a cost model at one assignment.
///
/// `Infeasible` replaces the `(+inf, +inf)` sentinel pair so that the
/// infeasible path is explicit; [`time`](Self::time) and
/// [`memory`](Self::memory) still project it to `+inf` for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostResult {
    Feasible { time: Log2Cost, memory: Log2Cost },
    Infeasible,
}

impl CostResult {
    /// Build a result from raw log2 costs; `+inf` in either slot is
    /// normalized to [`CostResult::Infeasible`].
    pub fn feasible(time: Log2Cost, memory: Log2Cost) -> Self {
        if time == f64::INFINITY || memory == f64::INFINITY {
            return CostResult::Infeasible;
        }
        CostResult::Feasible { time, memory }
    }

    /// Neutral value reported by models lacking a formula for the requested
    /// complexity type.
    pub const fn placeholder() -> Self {
        CostResult::Feasible { time: 0.0, memory: 0.0 }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, CostResult::Feasible { .. })
    }

    pub fn time(&self) -> Log2Cost {
        match self {
            CostResult::Feasible { time, .. } => *time,
            CostResult::Infeasible => f64::INFINITY,
        }
    }

    pub fn memory(&self) -> Log2Cost {
        match self {
            CostResult::Feasible { memory, .. } => *memory,
            CostResult::Infeasible => f64::INFINITY,
        }
    }

    /// Strictly better than `incumbent`: lower time, or equal time and lower
    /// memory. An infeasible result never improves on anything.
    pub fn improves_on(&self, incumbent: &CostResult) -> bool {
        match (self, incumbent) {
            (CostResult::Infeasible, _) => false,
            (CostResult::Feasible { .. }, CostResult::Infeasible) => true,
            (
                CostResult::Feasible { time, memory },
                CostResult::Feasible { time: best_time, memory: best_memory },
            ) => time < best_time || (time == best_time && memory < best_memory),
        }
    }
}

/// Cost-function adapter implemented by every attack.
///
/// Implementations must be pure functions of the problem, their options and
/// the assignment: the search evaluates each candidate once and the facade
/// memoizes the optimum, both of which rely on repeat evaluations agreeing.
///
/// Required:
/// - `name()`: short algorithm identifier used in diagnostics.
/// - `parameter_space()`: declared ranges; declaration order is scan order.
/// - `evaluate(&assignment, breakdown)`: time/memory in log2-space. When
///   `breakdown` is `Some`, also record the cost components.
///
/// Optional:
/// - `required_parameters()`: names `evaluate` reads; each must be declared.
/// - `narrow_range(name, declared, outer)`: shrink an inner parameter's range
///   given the values already chosen for the outer ones.
/// - `is_invalid(&assignment)`: cheap structural rejection, checked before
///   `evaluate` is called.
pub trait CostModel {
    // Required methods
    fn name(&self) -> &'static str;
    fn parameter_space(&self) -> &ParameterSpace;
    fn evaluate(
        &self, assignment: &ParameterAssignment, breakdown: Option<&mut Breakdown>,
    ) -> OptResult<CostResult>;

    // Optional methods
    fn required_parameters(&self) -> &[ParameterName] {
        &[]
    }

    fn narrow_range(
        &self, _name: ParameterName, declared: &ParameterRange, _outer: &ParameterAssignment,
    ) -> Option<ParameterRange> {
        Some(*declared)
    }

    fn is_invalid(&self, _assignment: &ParameterAssignment) -> bool {
        false
    }
}

/// Counters collected during one search.
///
/// - `candidates`: complete assignments visited.
/// - `rejected`: candidates refused by [`CostModel::is_invalid`].
/// - `infeasible`: candidates the evaluator itself reported as infeasible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub candidates: usize,
    pub rejected: usize,
    pub infeasible: usize,
}

/// Canonical result returned by the search.
///
/// - `assignment`: winning assignment (the first one scanned when every
///   candidate is infeasible; the declared lower bounds when there was no
///   candidate at all).
/// - `cost`: its cost.
/// - `stats`: scan counters.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub assignment: ParameterAssignment,
    pub cost: CostResult,
    pub stats: SearchStats,
}

impl OptimizationResult {
    pub fn time(&self) -> Log2Cost {
        self.cost.time()
    }

    pub fn memory(&self) -> Log2Cost {
        self.cost.memory()
    }

    pub fn is_feasible(&self) -> bool {
        self.cost.is_feasible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Infinite raw costs collapse to `Infeasible`, which projects back to
    // +inf for both time and memory.
    fn feasible_constructor_normalizes_infinity() {
        assert_eq!(CostResult::feasible(f64::INFINITY, 3.0), CostResult::Infeasible);
        assert_eq!(CostResult::feasible(3.0, f64::INFINITY), CostResult::Infeasible);
        assert_eq!(CostResult::Infeasible.time(), f64::INFINITY);
        assert_eq!(CostResult::Infeasible.memory(), f64::INFINITY);
        assert!(CostResult::feasible(1.0, 2.0).is_feasible());
        assert_eq!(CostResult::placeholder(), CostResult::feasible(0.0, 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Check the ordering used by the search: time first, memory second, and
    // infeasible results never win.
    //
    // Given
    // -----
    // - a = (10, 5), b = (10, 4), c = (9, 50), Infeasible.
    //
    // Expect
    // ------
    // - b improves on a, c improves on both, equal results do not improve,
    //   anything feasible improves on Infeasible, Infeasible improves on
    //   nothing.
    fn improves_on_orders_by_time_then_memory() {
        let a = CostResult::feasible(10.0, 5.0);
        let b = CostResult::feasible(10.0, 4.0);
        let c = CostResult::feasible(9.0, 50.0);

        assert!(b.improves_on(&a));
        assert!(!a.improves_on(&b));
        assert!(c.improves_on(&a) && c.improves_on(&b));
        assert!(!a.improves_on(&a));
        assert!(a.improves_on(&CostResult::Infeasible));
        assert!(!CostResult::Infeasible.improves_on(&CostResult::Infeasible));
        assert!(!CostResult::Infeasible.improves_on(&a));
    }
}
