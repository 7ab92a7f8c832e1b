//! Complexity-type switch read by every cost model.
//!
//! [`ComplexityType::Estimate`] asks for concrete operation counts.
//! [`ComplexityType::TildeO`] asks for asymptotic exponents; models without
//! such a formula report the neutral placeholder
//! [`CostResult::placeholder`](crate::optimization::parameter_search::CostResult::placeholder)
//! for every valid assignment.
use crate::estimators::errors::EstimatorError;
use std::{fmt, str::FromStr};

/// Which kind of complexity the cost models compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComplexityType {
    #[default]
    Estimate,
    TildeO,
}

impl ComplexityType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ComplexityType::Estimate => "estimate",
            ComplexityType::TildeO => "tilde_o",
        }
    }
}

impl fmt::Display for ComplexityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityType {
    type Err = EstimatorError;

    /// Parse a complexity type (case-insensitive).
    ///
    /// Accepts `"estimate"` and `"tilde_o"` (also `"tildeo"`, `"tilde-o"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "estimate" => Ok(ComplexityType::Estimate),
            "tilde_o" | "tildeo" | "tilde-o" => Ok(ComplexityType::TildeO),
            _ => Err(EstimatorError::InvalidComplexityType {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'estimate' or 'tilde_o'.",
            }),
        }
    }
}

impl TryFrom<u8> for ComplexityType {
    type Error = EstimatorError;

    /// Legacy integer codes: `0` = estimate, `1` = tilde-O.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ComplexityType::Estimate),
            1 => Ok(ComplexityType::TildeO),
            _ => Err(EstimatorError::InvalidComplexityType {
                name: code.to_string(),
                reason: "Valid codes are 0 (estimate) and 1 (tilde_o).",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Names and legacy codes parse to the same variants; unknown input fails.
    fn parses_names_and_codes() {
        assert_eq!("Estimate".parse::<ComplexityType>(), Ok(ComplexityType::Estimate));
        assert_eq!("TILDE_O".parse::<ComplexityType>(), Ok(ComplexityType::TildeO));
        assert_eq!(ComplexityType::try_from(1u8), Ok(ComplexityType::TildeO));
        assert!("big_o".parse::<ComplexityType>().is_err());
        assert!(matches!(
            ComplexityType::try_from(2u8),
            Err(EstimatorError::InvalidComplexityType { .. })
        ));
        assert_eq!(ComplexityType::default(), ComplexityType::Estimate);
    }
}
