//! Map index tuples onto typed element slices.
//!
//! The generators emit indices; this layer gathers the corresponding elements
//! into a freshly allocated `Vec<T>` per call. Unlike the core ports there is
//! no buffer reuse here: downstream consumers of typed output expect value
//! semantics.

use crate::combinations::Combinations;
use crate::permutations::Permutations;
use crate::port::{CombinatorialError, CombinatorialPort};
use crate::tuples::Tuples;

/// Gather from a single source slice: each emitted index selects a position in
/// `source`. Suited to ports whose indices range over `0..source.len()`
/// (combinations, permutations, arrangements).
pub struct Gather<'a, T, P> {
    port: P,
    source: &'a [T],
}

impl<'a, T: Clone, P: CombinatorialPort> Gather<'a, T, P> {
    /// The port must only emit indices below `source.len()`; out-of-range
    /// indices panic on access.
    pub fn new(port: P, source: &'a [T]) -> Self {
        Self { port, source }
    }

    pub fn reset(&mut self) {
        self.port.reset();
    }

    pub fn take_next(&mut self) -> Option<Vec<T>> {
        let indices = self.port.take_next()?;
        Some(indices.iter().map(|&i| self.source[i].clone()).collect())
    }
}

impl<'a, T: Clone, P: CombinatorialPort> Iterator for Gather<'a, T, P> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        self.take_next()
    }
}

/// Gather position-wise from multiple source slices: the index at tuple
/// position `i` selects into `sources[i]`. Suited to tuple-family ports.
pub struct MultiGather<'a, T, P> {
    port: P,
    sources: Vec<&'a [T]>,
}

impl<'a, T: Clone, P: CombinatorialPort> MultiGather<'a, T, P> {
    pub fn new(port: P, sources: Vec<&'a [T]>) -> Self {
        Self { port, sources }
    }

    pub fn reset(&mut self) {
        self.port.reset();
    }

    pub fn take_next(&mut self) -> Option<Vec<T>> {
        let indices = self.port.take_next()?;
        Some(
            indices
                .iter()
                .zip(&self.sources)
                .map(|(&i, source)| source[i].clone())
                .collect(),
        )
    }
}

impl<'a, T: Clone, P: CombinatorialPort> Iterator for MultiGather<'a, T, P> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        self.take_next()
    }
}

/// All permutations of `source`, as owned vectors.
pub fn permutations_of<T: Clone>(source: &[T]) -> Gather<'_, T, Permutations> {
    Gather::new(Permutations::new(source.len()), source)
}

/// All k-element subsets of `source`, as owned vectors in source order.
pub fn combinations_of<T: Clone>(
    source: &[T],
    k: usize,
) -> Result<Gather<'_, T, Combinations>, CombinatorialError> {
    Ok(Gather::new(Combinations::new(source.len(), k)?, source))
}

/// The Cartesian product of the given slices, position `i` drawing from
/// `sources[i]`, in row-major order.
pub fn tuples_of<'a, T: Clone>(sources: Vec<&'a [T]>) -> MultiGather<'a, T, Tuples> {
    let bounds = sources.iter().map(|s| s.len()).collect();
    MultiGather::new(Tuples::new(bounds), sources)
}
