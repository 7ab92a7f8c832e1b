//! Problem instances: validated parameter containers read by the cost
//! models.

pub mod equivalence;
pub mod mq;
pub mod sdfq;

pub use self::equivalence::{CodeShape, LEProblem, PEProblem};
pub use self::mq::MQProblem;
pub use self::sdfq::SDFqProblem;
