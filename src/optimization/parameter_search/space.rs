//! parameter_search::space — declared ranges of the tunable parameters.
//!
//! Purpose
//! -------
//! Describe, per cost model, which named parameters exist and which values
//! each may take. The space is a passive container: it stores exactly what
//! the declaring model hands it and leaves range validation to the search
//! entry point, so that a mis-derived bound surfaces as a search-space defect
//! at optimization time instead of being silently clamped.
//!
//! Key behaviors
//! -------------
//! - [`ParameterSpace::set_range`] declares or overwrites an integer range;
//!   [`ParameterSpace::set_continuous_range`] declares a real range
//!   discretized by a fixed step.
//! - Declaration order is preserved and is the scan order: earlier
//!   parameters form the outer loops of the nested search.
//! - [`ParameterRange::values`] enumerates every admissible value exactly
//!   once, from the lower to the upper bound.
//!
//! Invariants & assumptions
//! ------------------------
//! - A range with `lower == upper` is a fixed parameter with one value.
//! - A range with `lower > upper` or a non-finite bound enumerates nothing;
//!   the search layer rejects such declared ranges before scanning.
//! - Integer ranges hold integral `f64` bounds.
use crate::optimization::parameter_search::types::ParameterName;

// Slack for float round-off when counting continuous grid points.
const GRID_EPS: f64 = 1e-9;

/// How a parameter's values are enumerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainKind {
    /// Every integer between the bounds.
    Integer,
    /// `lower, lower + step, ...` up to the upper bound.
    Continuous { step: f64 },
}

/// Inclusive bounds of one parameter plus its domain kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub lower: f64,
    pub upper: f64,
    pub kind: DomainKind,
}

impl ParameterRange {
    /// Integer range `[lower, upper]`.
    pub fn integer(lower: i64, upper: i64) -> Self {
        Self { lower: lower as f64, upper: upper as f64, kind: DomainKind::Integer }
    }

    /// Single-valued integer range.
    pub fn fixed(value: i64) -> Self {
        Self::integer(value, value)
    }

    /// Real range `[lower, upper]` sampled every `step`.
    pub fn continuous(lower: f64, upper: f64, step: f64) -> Self {
        Self { lower, upper, kind: DomainKind::Continuous { step } }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, DomainKind::Integer)
    }

    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }

    /// Grid spacing (1 for integer ranges).
    pub fn step(&self) -> f64 {
        match self.kind {
            DomainKind::Integer => 1.0,
            DomainKind::Continuous { step } => step,
        }
    }

    /// Intersection with `other`, keeping this range's domain kind.
    ///
    /// Integer bounds are rounded inwards. The result may be empty
    /// (`lower > upper`).
    pub fn intersect(&self, other: &ParameterRange) -> ParameterRange {
        let mut lower = self.lower.max(other.lower);
        let mut upper = self.upper.min(other.upper);
        if self.is_integer() {
            lower = lower.ceil();
            upper = upper.floor();
        }
        ParameterRange { lower, upper, kind: self.kind }
    }

    /// Copy of this range with a new upper bound.
    pub fn with_upper(&self, upper: f64) -> ParameterRange {
        let upper = if self.is_integer() { upper.floor() } else { upper };
        ParameterRange { upper, ..*self }
    }

    /// Number of grid points in the range (0 when empty or malformed).
    pub fn len(&self) -> usize {
        let step = self.step();
        if !self.lower.is_finite()
            || !self.upper.is_finite()
            || self.lower > self.upper
            || !(step.is_finite() && step > 0.0)
        {
            return 0;
        }
        ((self.upper - self.lower) / step + GRID_EPS).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if `value` is one of the grid points.
    pub fn contains(&self, value: f64) -> bool {
        if self.is_empty() || value < self.lower - GRID_EPS || value > self.upper + GRID_EPS {
            return false;
        }
        let offset = (value - self.lower) / self.step();
        (offset - offset.round()).abs() < GRID_EPS
    }

    /// Iterate the grid points in increasing order.
    pub fn values(&self) -> RangeValues {
        RangeValues { lower: self.lower, step: self.step(), index: 0, count: self.len() }
    }
}

/// Iterator over the grid points of a [`ParameterRange`].
#[derive(Debug, Clone)]
pub struct RangeValues {
    lower: f64,
    step: f64,
    index: usize,
    count: usize,
}

impl Iterator for RangeValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let value = self.lower + self.index as f64 * self.step;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeValues {}

/// Ordered set of named parameter ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSpace {
    entries: Vec<(ParameterName, ParameterRange)>,
}

impl ParameterSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare or overwrite the integer range of `name`.
    ///
    /// Overwriting keeps the parameter's original position in scan order.
    pub fn set_range(&mut self, name: ParameterName, lower: i64, upper: i64) {
        self.set(name, ParameterRange::integer(lower, upper));
    }

    /// Declare or overwrite a continuous range of `name` sampled every `step`.
    pub fn set_continuous_range(&mut self, name: ParameterName, lower: f64, upper: f64, step: f64) {
        self.set(name, ParameterRange::continuous(lower, upper, step));
    }

    /// Declare or overwrite `name` with an explicit range.
    pub fn set(&mut self, name: ParameterName, range: ParameterRange) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = range,
            None => self.entries.push((name, range)),
        }
    }

    pub fn range(&self, name: &str) -> Option<&ParameterRange> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, r)| r)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.range(name).is_some()
    }

    /// Parameter names in declaration (= scan) order.
    pub fn names(&self) -> impl Iterator<Item = ParameterName> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterName, &ParameterRange)> + '_ {
        self.entries.iter().map(|(n, r)| (*n, r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the full Cartesian product of the declared ranges.
    ///
    /// Dependent narrowing during the scan only ever shrinks this count.
    pub fn cardinality(&self) -> usize {
        self.entries.iter().fold(1usize, |acc, (_, r)| acc.saturating_mul(r.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Check enumeration of integer, fixed, empty and continuous ranges.
    //
    // Given
    // -----
    // - [0, 5], [3, 3], [4, 2] over the integers.
    // - [0.0, 1.0] with step 0.25.
    //
    // Expect
    // ------
    // - 6, 1, 0 and 5 grid points respectively, in increasing order.
    fn range_values_enumerate_every_grid_point() {
        let ints: Vec<f64> = ParameterRange::integer(0, 5).values().collect();
        assert_eq!(ints, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let fixed = ParameterRange::fixed(3);
        assert!(fixed.is_fixed());
        assert_eq!(fixed.values().collect::<Vec<_>>(), vec![3.0]);

        assert!(ParameterRange::integer(4, 2).is_empty());

        let reals: Vec<f64> = ParameterRange::continuous(0.0, 1.0, 0.25).values().collect();
        assert_eq!(reals, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // A continuous grid whose step does not divide the width stops at the
    // last point below the upper bound; round-off does not add or drop one.
    //
    // Given
    // -----
    // - [0.0, 1.0] with step 0.3, and [0.0, 0.3] with step 0.1.
    //
    // Expect
    // ------
    // - 4 points (0, 0.3, 0.6, 0.9) and 4 points (0, 0.1, 0.2, 0.3).
    fn continuous_grid_is_robust_to_round_off() {
        assert_eq!(ParameterRange::continuous(0.0, 1.0, 0.3).len(), 4);
        assert_eq!(ParameterRange::continuous(0.0, 0.3, 0.1).len(), 4);
        assert!(ParameterRange::continuous(0.0, 0.3, 0.1).contains(0.2));
        assert!(!ParameterRange::continuous(0.0, 0.3, 0.1).contains(0.25));
    }

    #[test]
    // Purpose
    // -------
    // Verify intersection rounds integer bounds inwards and may empty a range.
    fn intersect_narrows_and_rounds() {
        let declared = ParameterRange::integer(0, 50);
        let narrowed = declared.intersect(&ParameterRange::continuous(2.5, 40.7, 1.0));
        assert_eq!((narrowed.lower, narrowed.upper), (3.0, 40.0));
        assert!(narrowed.is_integer());

        let dead = declared.intersect(&ParameterRange::integer(60, 70));
        assert!(dead.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // `set_range` overwrites in place and keeps declaration order.
    //
    // Given
    // -----
    // - Declare p, then l, then redeclare p.
    //
    // Expect
    // ------
    // - Names stay [p, l]; p carries the new bounds; cardinality multiplies.
    fn set_range_overwrites_in_place() {
        let mut space = ParameterSpace::new();
        space.set_range("p", 0, 5);
        space.set_range("l", 0, 9);
        space.set_range("p", 1, 3);

        assert_eq!(space.names().collect::<Vec<_>>(), vec!["p", "l"]);
        assert_eq!(space.range("p"), Some(&ParameterRange::integer(1, 3)));
        assert_eq!(space.cardinality(), 30);
        assert!(space.contains("l"));
        assert!(!space.contains("w"));
    }
}
