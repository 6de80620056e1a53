//! Lexicographic permutations of `{0..n}`.
//!
//! Successor rule is the classical next-lexicographic-permutation: find the
//! longest non-increasing suffix, swap the pivot just before it with the
//! smallest suffix element larger than it, then reverse the suffix. The
//! sequence ends at the fully descending permutation.

use crate::port::{CombinatorialError, CombinatorialPort};

/// Generator of all `n!` permutations in lexicographic order, starting from
/// the identity or from a caller-supplied permutation (mid-sequence entry).
/// `n = 0` yields exactly one empty permutation.
#[derive(Clone, Debug)]
pub struct Permutations {
    start: Vec<usize>,
    permutation: Vec<usize>,
    on_first: bool,
}

impl Permutations {
    /// Start from the identity permutation of `{0..n}`.
    pub fn new(n: usize) -> Self {
        let start: Vec<usize> = (0..n).collect();
        Self {
            permutation: start.clone(),
            start,
            on_first: true,
        }
    }

    /// Start mid-sequence from `start`, which must be a permutation of
    /// `{0..start.len()}`.
    pub fn from_permutation(start: Vec<usize>) -> Result<Self, CombinatorialError> {
        let n = start.len();
        let mut seen = vec![false; n];
        for &v in &start {
            if v >= n {
                return Err(CombinatorialError::invalid(format!(
                    "entry {v} out of range for dimension {n}"
                )));
            }
            if seen[v] {
                return Err(CombinatorialError::invalid(format!(
                    "duplicate entry {v} in starting permutation"
                )));
            }
            seen[v] = true;
        }
        Ok(Self {
            permutation: start.clone(),
            start,
            on_first: true,
        })
    }

    pub fn dimension(&self) -> usize {
        self.start.len()
    }
}

impl CombinatorialPort for Permutations {
    fn reset(&mut self) {
        self.permutation.copy_from_slice(&self.start);
        self.on_first = true;
    }

    fn current(&self) -> &[usize] {
        &self.permutation
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        if self.on_first {
            self.on_first = false;
            return Some(&self.permutation);
        }
        let n = self.permutation.len();
        if n < 2 {
            return None;
        }
        // Pivot: last position where the suffix still increases.
        let mut i = n - 1;
        while i >= 1 && self.permutation[i - 1] > self.permutation[i] {
            i -= 1;
        }
        if i == 0 {
            return None;
        }
        let mut j = n - 1;
        while self.permutation[j] < self.permutation[i - 1] {
            j -= 1;
        }
        self.permutation.swap(i - 1, j);
        self.permutation[i..].reverse();
        Some(&self.permutation)
    }
}
