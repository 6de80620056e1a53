//! Ordered k-selections of distinct values from `{0..n}`.
//!
//! Composition of the two simpler generators: an outer [`Combinations`] walks
//! the unordered subsets and an inner [`Permutations`] of dimension `k` walks
//! every ordering of the current subset, so `n!/(n-k)!` selections are visited
//! exactly once. For `n == k` the subset never changes and the combination
//! step is skipped entirely.

use crate::combinations::Combinations;
use crate::permutations::Permutations;
use crate::port::{CombinatorialError, CombinatorialPort};

/// Generator of all ordered selections of `k` distinct values from `{0..n}`.
///
/// Output order groups selections by underlying subset: for `n = 3, k = 2` the
/// sequence is `[0,1], [1,0], [0,2], [2,0], [1,2], [2,1]`.
#[derive(Clone, Debug)]
pub struct Arrangements {
    /// `None` when `n == k`: the single subset is `{0..k}` and the inner
    /// permutation already is the selection.
    combinations: Option<Combinations>,
    permutations: Permutations,
    selection: Vec<usize>,
    k: usize,
}

impl Arrangements {
    /// Requires `n >= k`.
    pub fn new(n: usize, k: usize) -> Result<Self, CombinatorialError> {
        if n < k {
            return Err(CombinatorialError::invalid(format!("n < k ({n} < {k})")));
        }
        let combinations = if n == k {
            None
        } else {
            let mut c = Combinations::new(n, k)?;
            // Prime the outer generator so the first subset is current before
            // the first take_next.
            let _ = c.take_next();
            Some(c)
        };
        Ok(Self {
            combinations,
            permutations: Permutations::new(k),
            selection: vec![0; k],
            k,
        })
    }
}

impl CombinatorialPort for Arrangements {
    fn reset(&mut self) {
        self.permutations.reset();
        if let Some(c) = &mut self.combinations {
            c.reset();
            let _ = c.take_next();
        }
    }

    fn current(&self) -> &[usize] {
        &self.selection
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        if self.permutations.take_next().is_none() {
            // Inner orderings exhausted: move to the next subset (or report
            // exhaustion) and restart the inner generator.
            let combinations = self.combinations.as_mut()?;
            combinations.take_next()?;
            self.permutations.reset();
            let _ = self.permutations.take_next();
        }
        let permutation = self.permutations.current();
        match &self.combinations {
            Some(c) => {
                let combination = c.current();
                for (s, &p) in self.selection.iter_mut().zip(permutation) {
                    *s = combination[p];
                }
            }
            None => self.selection.copy_from_slice(permutation),
        }
        Some(&self.selection)
    }
}
