//! Exhaustive nested scan over a cost model's parameter space.
//!
//! The scan walks the declared parameters in declaration order, one loop
//! level per parameter. Before entering a level it asks the model to narrow
//! that parameter's range given the values already fixed by the outer
//! levels; the narrowed range is clipped to the declared one, so narrowing
//! can only ever remove candidates. Every complete assignment is scored and
//! compared with the incumbent using [`CostResult::improves_on`]; because a
//! candidate must be *strictly* better to replace it, ties resolve to the
//! first candidate in scan order.
use crate::optimization::{
    errors::OptResult,
    parameter_search::{
        assignment::ParameterAssignment,
        space::ParameterRange,
        traits::{CostModel, CostResult, OptimizationResult, SearchStats},
        types::{Breakdown, ParameterName},
        validation::validate_cost,
    },
};
use tracing::{debug, trace};

/// How a single candidate fared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scored {
    /// Refused by [`CostModel::is_invalid`]; the evaluator was not called.
    Rejected,
    /// Value returned by the evaluator (possibly `Infeasible`).
    Evaluated(CostResult),
}

impl Scored {
    pub(crate) fn cost(self) -> CostResult {
        match self {
            Scored::Rejected => CostResult::Infeasible,
            Scored::Evaluated(cost) => cost,
        }
    }
}

/// Score one complete assignment: validity predicate first, then the
/// evaluator, then a finiteness check on what it returned.
pub(crate) fn score<M: CostModel + ?Sized>(
    model: &M, assignment: &ParameterAssignment, breakdown: Option<&mut Breakdown>,
) -> OptResult<Scored> {
    if model.is_invalid(assignment) {
        return Ok(Scored::Rejected);
    }
    let cost = validate_cost(model.evaluate(assignment, breakdown)?)?;
    Ok(Scored::Evaluated(cost))
}

struct ScanState {
    current: ParameterAssignment,
    best: Option<(ParameterAssignment, CostResult)>,
    stats: SearchStats,
}

/// Run the scan on an already validated model.
///
/// A model without parameters is evaluated once on the empty assignment.
/// If no candidate is produced at all (every branch narrowed to nothing) the
/// result is the declared lower bounds with an `Infeasible` cost, so every
/// declared parameter still has a value.
///
/// # Errors
/// Propagates evaluator errors and [`OptError::NonFiniteCost`](crate::optimization::errors::OptError::NonFiniteCost).
pub(crate) fn run_scan<M: CostModel + ?Sized>(model: &M) -> OptResult<OptimizationResult> {
    let levels: Vec<(ParameterName, ParameterRange)> =
        model.parameter_space().iter().map(|(name, range)| (name, *range)).collect();
    let mut state = ScanState {
        current: ParameterAssignment::with_capacity(levels.len()),
        best: None,
        stats: SearchStats::default(),
    };

    scan_level(model, &levels, &mut state)?;

    let (assignment, cost) = match state.best {
        Some(best) => best,
        None => {
            debug!(model = model.name(), "no candidate survived narrowing");
            (lower_corner(&levels), CostResult::Infeasible)
        }
    };
    debug!(
        model = model.name(),
        candidates = state.stats.candidates,
        rejected = state.stats.rejected,
        infeasible = state.stats.infeasible,
        optimum = %assignment,
        time = cost.time(),
        memory = cost.memory(),
        "parameter search finished"
    );
    Ok(OptimizationResult { assignment, cost, stats: state.stats })
}

// Declared lower bound of every parameter, in scan order.
fn lower_corner(levels: &[(ParameterName, ParameterRange)]) -> ParameterAssignment {
    let mut corner = ParameterAssignment::with_capacity(levels.len());
    for &(name, range) in levels {
        corner.push(name, range.lower);
    }
    corner
}

fn scan_level<M: CostModel + ?Sized>(
    model: &M, levels: &[(ParameterName, ParameterRange)], state: &mut ScanState,
) -> OptResult<()> {
    let Some((&(name, declared), inner)) = levels.split_first() else {
        return visit(model, state);
    };
    let range = match model.narrow_range(name, &declared, &state.current) {
        Some(narrowed) => declared.intersect(&narrowed),
        None => return Ok(()),
    };
    if range.is_empty() {
        trace!(model = model.name(), parameter = name, outer = %state.current, "dead branch");
        return Ok(());
    }
    for value in range.values() {
        state.current.push(name, value);
        let outcome = scan_level(model, inner, state);
        state.current.pop();
        outcome?;
    }
    Ok(())
}

fn visit<M: CostModel + ?Sized>(model: &M, state: &mut ScanState) -> OptResult<()> {
    state.stats.candidates += 1;
    let scored = score(model, &state.current, None)?;
    match scored {
        Scored::Rejected => {
            state.stats.rejected += 1;
            trace!(model = model.name(), candidate = %state.current, "rejected");
        }
        Scored::Evaluated(CostResult::Infeasible) => {
            state.stats.infeasible += 1;
            trace!(model = model.name(), candidate = %state.current, "infeasible");
        }
        Scored::Evaluated(_) => {}
    }

    let cost = scored.cost();
    let replace = match &state.best {
        None => true,
        Some((_, incumbent)) => cost.improves_on(incumbent),
    };
    if replace {
        state.best = Some((state.current.clone(), cost));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::parameter_search::space::ParameterSpace;

    // time = (x - 3)^2 + y, memory = y; y narrowed to [0, x].
    struct Bowl {
        space: ParameterSpace,
    }

    impl Bowl {
        fn new() -> Self {
            let mut space = ParameterSpace::new();
            space.set_range("x", 0, 6);
            space.set_range("y", 0, 6);
            Self { space }
        }
    }

    impl CostModel for Bowl {
        fn name(&self) -> &'static str {
            "bowl"
        }
        fn parameter_space(&self) -> &ParameterSpace {
            &self.space
        }
        fn narrow_range(
            &self, name: ParameterName, declared: &ParameterRange, outer: &ParameterAssignment,
        ) -> Option<ParameterRange> {
            match name {
                "y" => outer.get("x").map(|x| declared.with_upper(x)),
                _ => Some(*declared),
            }
        }
        fn evaluate(
            &self, a: &ParameterAssignment, _: Option<&mut Breakdown>,
        ) -> OptResult<CostResult> {
            let x = a.require("x")?;
            let y = a.require("y")?;
            Ok(CostResult::feasible((x - 3.0).powi(2) + y, y))
        }
    }

    #[test]
    // Purpose
    // -------
    // Dependent narrowing removes candidates and the minimum is found.
    //
    // Given
    // -----
    // - x ∈ [0, 6], y ∈ [0, x].
    //
    // Expect
    // ------
    // - 1 + 2 + ... + 7 = 28 candidates; optimum (x, y) = (3, 0) at time 0.
    fn nested_scan_with_dependent_range() {
        // Arrange
        let model = Bowl::new();

        // Act
        let result = run_scan(&model).unwrap();

        // Assert
        assert_eq!(result.stats.candidates, 28);
        assert_eq!(result.assignment, ParameterAssignment::new().with("x", 3.0).with("y", 0.0));
        assert_eq!(result.cost, CostResult::feasible(0.0, 0.0));
    }

    #[test]
    // Purpose
    // -------
    // When every branch is pruned, the result still assigns each declared
    // parameter (its lower bound) and reports an infeasible cost.
    //
    // Given
    // -----
    // - x ∈ [2, 4], y ∈ [1, 6] narrowed to y <= x - 10 (always empty).
    //
    // Expect
    // ------
    // - 0 candidates; assignment {x: 2, y: 1}; `Infeasible`.
    fn fully_pruned_space_reports_lower_bounds() {
        // Arrange
        struct Dead(ParameterSpace);
        impl CostModel for Dead {
            fn name(&self) -> &'static str {
                "dead"
            }
            fn parameter_space(&self) -> &ParameterSpace {
                &self.0
            }
            fn narrow_range(
                &self, name: ParameterName, declared: &ParameterRange, outer: &ParameterAssignment,
            ) -> Option<ParameterRange> {
                match name {
                    "y" => outer.get("x").map(|x| declared.with_upper(x - 10.0)),
                    _ => Some(*declared),
                }
            }
            fn evaluate(
                &self, _: &ParameterAssignment, _: Option<&mut Breakdown>,
            ) -> OptResult<CostResult> {
                Ok(CostResult::feasible(1.0, 1.0))
            }
        }
        let mut space = ParameterSpace::new();
        space.set_range("x", 2, 4);
        space.set_range("y", 1, 6);

        // Act
        let result = run_scan(&Dead(space)).unwrap();

        // Assert
        assert_eq!(result.stats.candidates, 0);
        assert_eq!(result.assignment, ParameterAssignment::new().with("x", 2.0).with("y", 1.0));
        assert_eq!(result.cost, CostResult::Infeasible);
    }

    #[test]
    // Purpose
    // -------
    // A rejected candidate is never passed to the evaluator and counts as
    // infeasible in the comparison.
    fn rejected_candidates_skip_the_evaluator() {
        struct Picky(ParameterSpace);
        impl CostModel for Picky {
            fn name(&self) -> &'static str {
                "picky"
            }
            fn parameter_space(&self) -> &ParameterSpace {
                &self.0
            }
            fn is_invalid(&self, a: &ParameterAssignment) -> bool {
                a.get("p") != Some(4.0)
            }
            fn evaluate(
                &self, a: &ParameterAssignment, _: Option<&mut Breakdown>,
            ) -> OptResult<CostResult> {
                assert_eq!(a.get("p"), Some(4.0));
                Ok(CostResult::feasible(9.0, 1.0))
            }
        }
        let mut space = ParameterSpace::new();
        space.set_range("p", 0, 5);

        let result = run_scan(&Picky(space)).unwrap();

        assert_eq!(result.stats, SearchStats { candidates: 6, rejected: 5, infeasible: 0 });
        assert_eq!(result.assignment.get("p"), Some(4.0));
        assert_eq!(result.cost, CostResult::feasible(9.0, 1.0));
        assert_eq!(
            score(&Picky(ParameterSpace::new()), &ParameterAssignment::new(), None),
            Ok(Scored::Rejected)
        );
    }
}
