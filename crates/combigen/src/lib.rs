//! Pull-based enumeration of combinatorial structures.
//!
//! Purpose
//! - Enumerate permutations, k-combinations, integer compositions, mixed-radix
//!   tuples, and distinct cross-set tuples one structure at a time, without
//!   materializing the full result set.
//! - Each generator advances a reused buffer in place; `take_next` hands out a
//!   borrowed view and `None` signals exhaustion.
//!
//! Why this design
//! - Consumers (search drivers, symmetry reduction, exhaustive testers) pull at
//!   their own cadence; nothing is precomputed and nothing allocates per step.
//! - The borrowed-view contract makes the aliasing rule explicit in the types:
//!   a view cannot outlive the next `take_next` call. Callers that need a
//!   stable value copy it via `snapshot()`.
//!
//! Entry points
//! - `api` for factory functions and the curated re-export surface.
//! - `port::CombinatorialPort` for the shared generator contract.
//! - `gather` to map index tuples onto typed element slices.

pub mod api;
pub mod arrangements;
pub mod bits;
pub mod combinations;
pub mod compositions;
pub mod distinct;
pub mod gather;
pub mod permutations;
pub mod port;
pub mod priority;
pub mod tuples;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use port::{collect_all, CombinatorialError, CombinatorialPort, Snapshots};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arrangements::Arrangements;
    pub use crate::combinations::Combinations;
    pub use crate::compositions::Compositions;
    pub use crate::distinct::DistinctTuples;
    pub use crate::gather::{Gather, MultiGather};
    pub use crate::permutations::Permutations;
    pub use crate::port::{collect_all, CombinatorialError, CombinatorialPort, Snapshots};
    pub use crate::priority::PriorityPermutations;
    pub use crate::tuples::Tuples;
}
