//! Shared estimator machinery: options, complexity/memory models, the
//! memoizing facade and parallel suites.

pub mod complexity;
pub mod facade;
pub mod memory_access;
pub mod options;
pub mod suite;
pub mod validation;

pub use self::complexity::ComplexityType;
pub use self::facade::{AttackModel, Estimator};
pub use self::memory_access::{MemoryAccess, MemoryAccessFn};
pub use self::options::{DEFAULT_LINEAR_ALGEBRA_CONSTANT, EstimatorOptions};
pub use self::suite::{Algorithm, AlgorithmEstimate, EstimatorSuite};
