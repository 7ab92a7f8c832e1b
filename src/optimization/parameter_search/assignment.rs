//! Concrete parameter choices handed to a cost model.
//!
//! An assignment keeps values in scan order and is built up and torn down
//! one parameter at a time by the nested search; cost models read it through
//! [`ParameterAssignment::require_int`] / [`ParameterAssignment::require`],
//! which turn a missing or mistyped value into an [`OptError`] instead of a
//! panic.
use crate::optimization::{
    errors::{OptError, OptResult},
    parameter_search::types::ParameterName,
};
use std::fmt;

/// Mapping from parameter name to value, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterAssignment {
    values: Vec<(ParameterName, f64)>,
}

impl ParameterAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity) }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: ParameterName, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Assign `value` to `name`, overwriting an existing value in place.
    pub fn set(&mut self, name: ParameterName, value: f64) {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.values.push((name, value)),
        }
    }

    // Scan-internal stack discipline: the search pushes a parameter when it
    // enters a loop level and pops it on the way out.
    pub(crate) fn push(&mut self, name: ParameterName, value: f64) {
        self.values.push((name, value));
    }

    pub(crate) fn pop(&mut self) {
        self.values.pop();
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    /// Value of `name` if present and integral.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).filter(|v| v.fract() == 0.0).map(|v| v as i64)
    }

    /// Value of `name`.
    ///
    /// # Errors
    /// [`OptError::MissingAssignment`] if `name` has no value.
    pub fn require(&self, name: &str) -> OptResult<f64> {
        self.get(name).ok_or_else(|| OptError::MissingAssignment { name: name.to_string() })
    }

    /// Integral value of `name`.
    ///
    /// # Errors
    /// - [`OptError::MissingAssignment`] if `name` has no value.
    /// - [`OptError::NonIntegerValue`] if the value has a fractional part.
    pub fn require_int(&self, name: &str) -> OptResult<i64> {
        let value = self.require(name)?;
        if value.fract() != 0.0 {
            return Err(OptError::NonIntegerValue { name: name.to_string(), value });
        }
        Ok(value as i64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterName, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ParameterAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if value.fract() == 0.0 && value.is_finite() {
                write!(f, "{name}: {}", *value as i64)?;
            } else {
                write!(f, "{name}: {value}")?;
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Check typed accessors and their error reporting.
    //
    // Given
    // -----
    // - {p: 2, r: 0.5}.
    //
    // Expect
    // ------
    // - `require_int("p") == 2`; `require_int("r")` is `NonIntegerValue`;
    //   `require("w")` is `MissingAssignment`.
    fn typed_accessors_report_missing_and_fractional_values() {
        let a = ParameterAssignment::new().with("p", 2.0).with("r", 0.5);

        assert_eq!(a.require_int("p"), Ok(2));
        assert_eq!(a.integer("r"), None);
        assert_eq!(
            a.require_int("r"),
            Err(OptError::NonIntegerValue { name: "r".into(), value: 0.5 })
        );
        assert_eq!(a.require("w"), Err(OptError::MissingAssignment { name: "w".into() }));
    }

    #[test]
    // Purpose
    // -------
    // `set` overwrites in place; display keeps order and prints integers
    // without a fractional part.
    fn set_overwrites_and_display_is_ordered() {
        let mut a = ParameterAssignment::new().with("p", 1.0).with("l", 6.0);
        a.set("p", 2.0);
        a.set("eps", 0.25);

        assert_eq!(a.len(), 3);
        assert_eq!(a.to_string(), "{p: 2, l: 6, eps: 0.25}");
        assert_eq!(ParameterAssignment::new().to_string(), "{}");
    }
}
