//! parameter_search::types — shared aliases and the cost-label vocabulary.
//!
//! Purpose
//! -------
//! Centralize the scalar aliases and the closed set of breakdown labels used
//! by every cost model. Keeping the vocabulary in one enum means verbose
//! breakdowns from different attacks can be compared key by key, and a typo
//! in a label is a compile error rather than a silently missing entry.
//!
//! Conventions
//! -----------
//! - Every cost is a base-2 logarithm ([`Log2Cost`]).
//! - Parameter names are `'static` identifiers chosen by the cost model
//!   (`"p"`, `"l"`, `"w"`, ...).
//! - [`Breakdown`] is ordered by label so that diagnostic output is stable.
use std::{collections::BTreeMap, fmt};

/// A cost expressed as `log2` of an operation or bit count.
pub type Log2Cost = f64;

/// Identifier of a tunable parameter, unique within one cost model.
pub type ParameterName = &'static str;

/// Diagnostic breakdown of a cost evaluation, keyed by [`CostLabel`].
pub type Breakdown = BTreeMap<CostLabel, Log2Cost>;

/// Closed vocabulary of cost components reported in verbose breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CostLabel {
    /// Expected number of information-set iterations.
    Permutations,
    /// Cost of one Gaussian elimination.
    GaussianElimination,
    /// Cost of building the enumeration lists.
    ListConstruction,
    /// Size of a single list.
    ListSize,
    /// Cost of merging lists / enumerating collisions.
    Merge,
    /// Cost of bringing candidates into normal form.
    NormalForm,
    /// Cost of a nested information-set decoding call.
    Isd,
    /// Number of repetitions of a nested call.
    Repetitions,
    /// Conversion from field operations to bit operations.
    BitComplexity,
    /// Penalty charged by the memory-access cost model.
    MemoryAccess,
}

impl CostLabel {
    /// All labels in display order.
    pub const ALL: [CostLabel; 10] = [
        CostLabel::Permutations,
        CostLabel::GaussianElimination,
        CostLabel::ListConstruction,
        CostLabel::ListSize,
        CostLabel::Merge,
        CostLabel::NormalForm,
        CostLabel::Isd,
        CostLabel::Repetitions,
        CostLabel::BitComplexity,
        CostLabel::MemoryAccess,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CostLabel::Permutations => "permutations",
            CostLabel::GaussianElimination => "gaussian-elimination",
            CostLabel::ListConstruction => "list-construction",
            CostLabel::ListSize => "list-size",
            CostLabel::Merge => "merge",
            CostLabel::NormalForm => "normal-form",
            CostLabel::Isd => "isd",
            CostLabel::Repetitions => "repetitions",
            CostLabel::BitComplexity => "bit-complexity",
            CostLabel::MemoryAccess => "memory-access",
        }
    }
}

impl fmt::Display for CostLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
