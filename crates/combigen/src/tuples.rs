//! Mixed-radix tuples (odometer over independent per-position bounds).
//!
//! Row-major order: the rightmost digit changes fastest, and overflow carries
//! leftward. The generator also reports which digit changed leftmost on the
//! most recent step, so callers can invalidate only a suffix of a dependent
//! cache.

use crate::port::CombinatorialPort;

/// Generator of the Cartesian product `{0..b0} x .. x {0..b(n-1)}` in
/// row-major order. The count is the product of the bounds: zero if any bound
/// is zero, one (the empty tuple) for an empty bounds list.
#[derive(Clone, Debug)]
pub struct Tuples {
    bounds: Vec<usize>,
    digits: Vec<usize>,
    before_first: bool,
    exhausted: bool,
    last_update_depth: usize,
}

impl Tuples {
    /// Bounds are per-position exclusive upper limits. Infallible: the `usize`
    /// parameter type already rules out negative bounds.
    pub fn new(bounds: Vec<usize>) -> Self {
        let digits = vec![0; bounds.len()];
        Self {
            bounds,
            digits,
            before_first: true,
            exhausted: false,
            last_update_depth: 0,
        }
    }

    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Zero-based index of the leftmost digit changed by the most recent
    /// successful `take_next`. The first tuple of a run reports depth 0 (every
    /// digit was freshly materialized); after exhaustion the value is
    /// unspecified.
    pub fn last_update_depth(&self) -> usize {
        self.last_update_depth
    }
}

impl CombinatorialPort for Tuples {
    fn reset(&mut self) {
        self.digits.fill(0);
        self.before_first = true;
        self.exhausted = false;
        self.last_update_depth = 0;
    }

    fn current(&self) -> &[usize] {
        &self.digits
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if self.before_first {
            self.before_first = false;
            self.last_update_depth = 0;
            if self.bounds.iter().any(|&b| b == 0) {
                self.exhausted = true;
                return None;
            }
            return Some(&self.digits);
        }
        let mut i = self.bounds.len();
        while i > 0 {
            i -= 1;
            self.digits[i] += 1;
            if self.digits[i] < self.bounds[i] {
                self.last_update_depth = i;
                return Some(&self.digits);
            }
            self.digits[i] = 0;
        }
        self.exhausted = true;
        None
    }
}
