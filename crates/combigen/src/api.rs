//! Curated construction surface.
//!
//! Factory functions for every generator family, mirroring the module-level
//! constructors with a uniform spelling, plus re-exports so callers can pull
//! everything from one path.

pub use crate::arrangements::Arrangements;
pub use crate::combinations::Combinations;
pub use crate::compositions::Compositions;
pub use crate::distinct::DistinctTuples;
pub use crate::gather::{combinations_of, permutations_of, tuples_of, Gather, MultiGather};
pub use crate::permutations::Permutations;
pub use crate::port::{collect_all, CombinatorialError, CombinatorialPort, Snapshots};
pub use crate::priority::PriorityPermutations;
pub use crate::tuples::Tuples;

/// All k-subsets of `{0..n}` in lexicographic order. Requires `n >= k`.
pub fn combinations(n: usize, k: usize) -> Result<Combinations, CombinatorialError> {
    Combinations::new(n, k)
}

/// All permutations of `{0..n}` in lexicographic order.
pub fn permutations(n: usize) -> Permutations {
    Permutations::new(n)
}

/// All ordered selections of `k` distinct values from `{0..n}`. Requires
/// `n >= k`; the `n == k` case degenerates internally to a pure permutation
/// sweep.
pub fn ordered_selections(n: usize, k: usize) -> Result<Arrangements, CombinatorialError> {
    Arrangements::new(n, k)
}

/// All ordered sums of `total` into `parts` non-negative parts. Requires
/// `parts >= 1`.
pub fn compositions(total: usize, parts: usize) -> Result<Compositions, CombinatorialError> {
    Compositions::new(total, parts)
}

/// The mixed-radix product over per-position bounds, rightmost digit fastest.
pub fn tuples(bounds: Vec<usize>) -> Tuples {
    Tuples::new(bounds)
}

/// All pairwise-distinct tuples drawn position-wise from the candidate sets.
pub fn distinct_tuples(sets: Vec<Vec<usize>>) -> DistinctTuples {
    DistinctTuples::new(sets)
}
