//! Memory-access cost models.
//!
//! Purpose
//! -------
//! Charge an additional time penalty for touching large memories. The
//! penalty is a function of the log2 memory usage `M` of the optimal
//! candidate and is added to its log2 time.
//!
//! Key behaviors
//! -------------
//! - [`MemoryAccess::Constant`]: no penalty.
//! - [`MemoryAccess::Logarithmic`]: `log2(max(M, 1))`.
//! - [`MemoryAccess::SquareRoot`]: `M / 2`.
//! - [`MemoryAccess::CubeRoot`]: `M / 3`.
//! - [`MemoryAccess::Custom`]: any caller-supplied `f(M)`.
//!
//! Conventions
//! -----------
//! - Parsed from names (`"constant"`, `"logarithmic"`, `"square_root"`,
//!   `"cube_root"`) or the legacy codes `0..=3`.
//! - Custom functions compare equal only to the very same function object.
use crate::estimators::errors::EstimatorError;
use std::{fmt, str::FromStr, sync::Arc};

/// Shared user-supplied penalty `f(log2 memory)`.
pub type MemoryAccessFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

#[derive(Clone, Default)]
pub enum MemoryAccess {
    #[default]
    Constant,
    Logarithmic,
    SquareRoot,
    CubeRoot,
    Custom(MemoryAccessFn),
}

impl MemoryAccess {
    /// Wrap a closure as a custom model.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        MemoryAccess::Custom(Arc::new(f))
    }

    /// Time penalty (log2) for a memory usage of `2^log2_memory`.
    pub fn cost(&self, log2_memory: f64) -> f64 {
        match self {
            MemoryAccess::Constant => 0.0,
            MemoryAccess::Logarithmic => log2_memory.max(1.0).log2(),
            MemoryAccess::SquareRoot => log2_memory / 2.0,
            MemoryAccess::CubeRoot => log2_memory / 3.0,
            MemoryAccess::Custom(f) => f(log2_memory),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            MemoryAccess::Constant => "constant",
            MemoryAccess::Logarithmic => "logarithmic",
            MemoryAccess::SquareRoot => "square_root",
            MemoryAccess::CubeRoot => "cube_root",
            MemoryAccess::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for MemoryAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryAccess::{}", self.as_str())
    }
}

impl fmt::Display for MemoryAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for MemoryAccess {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MemoryAccess::Custom(a), MemoryAccess::Custom(b)) => Arc::ptr_eq(a, b),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl FromStr for MemoryAccess {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "constant" => Ok(MemoryAccess::Constant),
            "logarithmic" | "log" => Ok(MemoryAccess::Logarithmic),
            "square_root" | "sqrt" => Ok(MemoryAccess::SquareRoot),
            "cube_root" | "cbrt" => Ok(MemoryAccess::CubeRoot),
            _ => Err(EstimatorError::InvalidMemoryAccess {
                name: s.to_string(),
                reason: "Valid options are 'constant', 'logarithmic', 'square_root' or 'cube_root'.",
            }),
        }
    }
}

impl TryFrom<u8> for MemoryAccess {
    type Error = EstimatorError;

    /// Legacy codes: 0 constant, 1 logarithmic, 2 square-root, 3 cube-root.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MemoryAccess::Constant),
            1 => Ok(MemoryAccess::Logarithmic),
            2 => Ok(MemoryAccess::SquareRoot),
            3 => Ok(MemoryAccess::CubeRoot),
            _ => Err(EstimatorError::InvalidMemoryAccess {
                name: code.to_string(),
                reason: "Valid codes are 0 (constant) to 3 (cube_root).",
            }),
        }
    }
}
