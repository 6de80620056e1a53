//! Lexicographic k-subsets of `{0..n}`.
//!
//! Successor rule (combinatorial number system): scan from the right for the
//! first index whose value is below its maximum (`i + n - k`), increment it,
//! then refill everything to its right with consecutive values. O(k) worst
//! case, O(1) amortized per step.

use crate::port::{CombinatorialError, CombinatorialPort};

/// Generator of all `C(n, k)` strictly increasing k-subsets of `{0..n}`, in
/// lexicographic order. `k = 0` yields exactly one empty subset.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    combination: Vec<usize>,
    on_first: bool,
}

impl Combinations {
    /// Requires `n >= k`.
    pub fn new(n: usize, k: usize) -> Result<Self, CombinatorialError> {
        if n < k {
            return Err(CombinatorialError::invalid(format!("n < k ({n} < {k})")));
        }
        Ok(Self {
            n,
            k,
            combination: (0..k).collect(),
            on_first: true,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// The current buffer equals the maximal combination `{n-k, .., n-1}`.
    fn is_last(&self) -> bool {
        self.combination
            .iter()
            .enumerate()
            .all(|(i, &c)| c == i + self.n - self.k)
    }
}

impl CombinatorialPort for Combinations {
    fn reset(&mut self) {
        self.on_first = true;
        for (i, c) in self.combination.iter_mut().enumerate() {
            *c = i;
        }
    }

    fn current(&self) -> &[usize] {
        &self.combination
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        if self.on_first {
            self.on_first = false;
            return Some(&self.combination);
        }
        if self.is_last() {
            return None;
        }
        // is_last() was false, so k > 0 and some index is below its maximum.
        let mut i = self.k - 1;
        while self.combination[i] == i + self.n - self.k {
            i -= 1;
        }
        self.combination[i] += 1;
        let mut m = self.combination[i];
        for c in &mut self.combination[i + 1..] {
            m += 1;
            *c = m;
        }
        Some(&self.combination)
    }
}
