//! Parallel comparison of several algorithms on one problem.
//!
//! [`EstimatorSuite`] holds boxed [`Algorithm`]s, estimates all of them in
//! parallel with `rayon` and picks the fastest. Results come back in
//! registration order, and the selection rule (time, then memory, then
//! registration order) does not depend on thread scheduling.
use crate::{
    estimators::{
        core::facade::{AttackModel, Estimator},
        errors::EstimatorResult,
    },
    optimization::parameter_search::{Breakdown, CostResult, Log2Cost, ParameterAssignment},
};
use rayon::prelude::*;
use std::fmt;

/// Object-safe view of an estimator facade.
pub trait Algorithm: fmt::Display + Send + Sync {
    fn name(&self) -> &'static str;
    fn time_complexity(&self) -> EstimatorResult<Log2Cost>;
    fn memory_complexity(&self) -> EstimatorResult<Log2Cost>;
    fn optimal_parameters(&self) -> EstimatorResult<ParameterAssignment>;
    fn verbose_information(&self) -> EstimatorResult<Breakdown>;
}

impl<M: AttackModel> Algorithm for Estimator<M> {
    fn name(&self) -> &'static str {
        self.model().name()
    }

    fn time_complexity(&self) -> EstimatorResult<Log2Cost> {
        Estimator::time_complexity(self)
    }

    fn memory_complexity(&self) -> EstimatorResult<Log2Cost> {
        Estimator::memory_complexity(self)
    }

    fn optimal_parameters(&self) -> EstimatorResult<ParameterAssignment> {
        Estimator::optimal_parameters(self).cloned()
    }

    fn verbose_information(&self) -> EstimatorResult<Breakdown> {
        Estimator::verbose_information(self)
    }
}

/// One row of a suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmEstimate {
    pub name: &'static str,
    pub time: Log2Cost,
    pub memory: Log2Cost,
    pub parameters: ParameterAssignment,
}

impl AlgorithmEstimate {
    fn cost(&self) -> CostResult {
        CostResult::feasible(self.time, self.memory)
    }
}

/// Set of algorithms applicable to the same problem instance.
#[derive(Default)]
pub struct EstimatorSuite {
    algorithms: Vec<Box<dyn Algorithm>>,
}

impl EstimatorSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<A: Algorithm + 'static>(&mut self, algorithm: A) {
        self.algorithms.push(Box::new(algorithm));
    }

    pub fn with<A: Algorithm + 'static>(mut self, algorithm: A) -> Self {
        self.push(algorithm);
        self
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    pub fn algorithms(&self) -> impl Iterator<Item = &dyn Algorithm> + '_ {
        self.algorithms.iter().map(|a| a.as_ref())
    }

    /// Estimate every algorithm in parallel, in registration order.
    ///
    /// # Errors
    /// An error from a failing algorithm; the others are discarded.
    pub fn estimate_all(&self) -> EstimatorResult<Vec<AlgorithmEstimate>> {
        self.algorithms
            .par_iter()
            .map(|algorithm| -> EstimatorResult<AlgorithmEstimate> {
                Ok(AlgorithmEstimate {
                    name: algorithm.name(),
                    time: algorithm.time_complexity()?,
                    memory: algorithm.memory_complexity()?,
                    parameters: algorithm.optimal_parameters()?,
                })
            })
            .collect()
    }

    /// Fastest algorithm: minimum time, then memory, then registration order.
    ///
    /// `None` for an empty suite. Infeasible algorithms only win if every
    /// algorithm is infeasible.
    pub fn fastest(&self) -> EstimatorResult<Option<AlgorithmEstimate>> {
        let mut best: Option<AlgorithmEstimate> = None;
        for estimate in self.estimate_all()? {
            let replace = match &best {
                None => true,
                Some(incumbent) => estimate.cost().improves_on(&incumbent.cost()),
            };
            if replace {
                best = Some(estimate);
            }
        }
        Ok(best)
    }
}

impl fmt::Debug for EstimatorSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.algorithms.iter().map(|a| a.to_string())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        time: f64,
        memory: f64,
    }

    impl fmt::Display for Fixed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} estimator", self.name)
        }
    }

    impl Algorithm for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn time_complexity(&self) -> EstimatorResult<Log2Cost> {
            Ok(self.time)
        }
        fn memory_complexity(&self) -> EstimatorResult<Log2Cost> {
            Ok(self.memory)
        }
        fn optimal_parameters(&self) -> EstimatorResult<ParameterAssignment> {
            Ok(ParameterAssignment::new())
        }
        fn verbose_information(&self) -> EstimatorResult<Breakdown> {
            Ok(Breakdown::new())
        }
    }

    #[test]
    // Purpose
    // -------
    // Results keep registration order and the fastest pick follows time,
    // then memory, then order.
    //
    // Given
    // -----
    // - A (20, 5), B (18, 9), C (18, 7), D (18, 7), E (inf, inf).
    //
    // Expect
    // ------
    // - estimate_all lists A..E in order; fastest is C.
    fn fastest_uses_time_memory_then_order() {
        // Arrange
        let suite = EstimatorSuite::new()
            .with(Fixed { name: "A", time: 20.0, memory: 5.0 })
            .with(Fixed { name: "B", time: 18.0, memory: 9.0 })
            .with(Fixed { name: "C", time: 18.0, memory: 7.0 })
            .with(Fixed { name: "D", time: 18.0, memory: 7.0 })
            .with(Fixed { name: "E", time: f64::INFINITY, memory: f64::INFINITY });

        // Act
        let all = suite.estimate_all().unwrap();
        let fastest = suite.fastest().unwrap().unwrap();

        // Assert
        let names: Vec<&str> = all.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(fastest.name, "C");
    }

    #[test]
    // Purpose
    // -------
    // Edge cases: empty suite and all-infeasible suite.
    fn empty_and_infeasible_suites() {
        assert_eq!(EstimatorSuite::new().fastest().unwrap(), None);

        let suite = EstimatorSuite::new()
            .with(Fixed { name: "X", time: f64::INFINITY, memory: f64::INFINITY })
            .with(Fixed { name: "Y", time: f64::INFINITY, memory: f64::INFINITY });
        let fastest = suite.fastest().unwrap().unwrap();
        assert_eq!(fastest.name, "X");
        assert_eq!(fastest.time, f64::INFINITY);
    }
}
