//! Ordered sums of a fixed integer into a fixed number of parts.
//!
//! Stars and bars: a composition of `total` into `parts` non-negative parts
//! corresponds to choosing `parts - 1` bar positions among
//! `total + parts - 1` slots, so the generator delegates to [`Combinations`]
//! and decodes each raw combination into gap widths.

use crate::combinations::Combinations;
use crate::port::{CombinatorialError, CombinatorialPort};

/// Generator of all `C(total + parts - 1, parts - 1)` ways to write `total`
/// as an ordered sum of `parts` non-negative integers.
#[derive(Clone, Debug)]
pub struct Compositions {
    total: usize,
    parts: usize,
    combinations: Combinations,
    composition: Vec<usize>,
}

impl Compositions {
    /// Requires `parts >= 1`.
    pub fn new(total: usize, parts: usize) -> Result<Self, CombinatorialError> {
        if parts == 0 {
            return Err(CombinatorialError::invalid("need at least one part"));
        }
        Ok(Self {
            total,
            parts,
            combinations: Combinations::new(total + parts - 1, parts - 1)?,
            composition: vec![0; parts],
        })
    }
}

impl CombinatorialPort for Compositions {
    fn reset(&mut self) {
        self.combinations.reset();
    }

    fn current(&self) -> &[usize] {
        &self.composition
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        let g = self.combinations.take_next()?;
        if g.is_empty() {
            // parts == 1: the single composition is [total].
            self.composition[0] = self.total;
        } else {
            let m = g.len();
            self.composition[0] = g[0];
            self.composition[self.parts - 1] = self.total + self.parts - 2 - g[m - 1];
            for i in 1..m {
                self.composition[i] = g[i] - g[i - 1] - 1;
            }
        }
        Some(&self.composition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::collect_all;
    use std::collections::HashSet;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        let mut r = 1usize;
        for i in 0..k {
            r = r * (n - i) / (i + 1);
        }
        r
    }

    #[test]
    fn rejects_zero_parts() {
        assert!(Compositions::new(3, 0).is_err());
    }

    #[test]
    fn single_part_is_the_total_itself() {
        let mut gen = Compositions::new(2, 1).unwrap();
        assert_eq!(gen.take_next(), Some(&[2][..]));
        assert_eq!(gen.take_next(), None);
    }

    #[test]
    fn one_into_four_places_the_unit_in_each_slot() {
        let mut gen = Compositions::new(1, 4).unwrap();
        let all = collect_all(&mut gen);
        assert_eq!(all.len(), 4);
        for c in &all {
            assert_eq!(c.iter().sum::<usize>(), 1);
        }
    }

    #[test]
    fn three_into_four_has_twenty_compositions() {
        let mut gen = Compositions::new(3, 4).unwrap();
        let all = collect_all(&mut gen);
        assert_eq!(all.len(), 20);
        let distinct: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(distinct.len(), 20);
        for c in &all {
            assert_eq!(c.len(), 4);
            assert_eq!(c.iter().sum::<usize>(), 3);
        }
    }

    #[test]
    fn counts_sums_and_distinctness() {
        for total in 0..7 {
            for parts in 1..7 {
                let mut gen = Compositions::new(total, parts).unwrap();
                let all = collect_all(&mut gen);
                assert_eq!(
                    all.len(),
                    binomial(total + parts - 1, parts - 1),
                    "count for ({total},{parts})"
                );
                let distinct: HashSet<_> = all.iter().cloned().collect();
                assert_eq!(distinct.len(), all.len(), "duplicates for ({total},{parts})");
                for c in &all {
                    assert_eq!(c.len(), parts);
                    assert_eq!(c.iter().sum::<usize>(), total);
                }
            }
        }
    }

    #[test]
    fn reset_replays_identically() {
        let mut gen = Compositions::new(4, 3).unwrap();
        let first = collect_all(&mut gen);
        gen.reset();
        assert_eq!(collect_all(&mut gen), first);
    }
}
