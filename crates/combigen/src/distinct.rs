//! Distinct tuples drawn from per-position candidate sets.
//!
//! Depth-first backtracking with an explicit position cursor instead of
//! recursion. Each position carries an immutable candidate bitmask; a single
//! mutable availability mask tracks which values are still unclaimed by
//! earlier positions. The tuple buffer doubles as the per-position search
//! cursor: `next_common_bit(mask, available, tuple[i])` resumes the scan where
//! the previous attempt at that position stopped, which keeps the amortized
//! work per emitted tuple proportional to the backtracking actually done.

use crate::bits::BitSet;
use crate::port::CombinatorialPort;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchState {
    BeforeFirst,
    Running,
    Exhausted,
}

/// Generator of every tuple `(v0, .., v(n-1))` with `vi` drawn from candidate
/// set `i` and all entries pairwise distinct, in the order produced by always
/// trying the smallest available candidate first.
///
/// Duplicates within a candidate set collapse; an empty candidate set means no
/// tuple exists. Complexity is output-sensitive, bounded by the product of the
/// candidate-set sizes.
#[derive(Clone, Debug)]
pub struct DistinctTuples {
    set_masks: Vec<BitSet>,
    available: BitSet,
    tuple: Vec<usize>,
    state: SearchState,
}

impl DistinctTuples {
    pub fn new(mut sets: Vec<Vec<usize>>) -> Self {
        let mut width = 0;
        for set in &mut sets {
            set.sort_unstable();
            set.dedup();
            if let Some(&max) = set.last() {
                width = width.max(max + 1);
            }
        }
        let mut set_masks = Vec::with_capacity(sets.len());
        for set in &sets {
            let mut mask = BitSet::new(width);
            for &v in set {
                mask.insert(v);
            }
            set_masks.push(mask);
        }
        let mut available = BitSet::new(width);
        available.fill();
        let tuple = vec![0; sets.len()];
        let mut generator = Self {
            set_masks,
            available,
            tuple,
            state: SearchState::BeforeFirst,
        };
        if !generator.descend(0) {
            generator.state = SearchState::Exhausted;
        }
        generator
    }

    /// Resume the search at position `i` with the cursors currently in
    /// `tuple[i..]`. Returns true once every position holds a claimed value,
    /// false when backtracking from position 0 fails.
    fn descend(&mut self, mut i: usize) -> bool {
        while i < self.set_masks.len() {
            match self.set_masks[i].next_common_bit(&self.available, self.tuple[i]) {
                Some(value) => {
                    self.tuple[i] = value;
                    self.available.remove(value);
                    i += 1;
                }
                None => {
                    if i == 0 {
                        return false;
                    }
                    self.tuple[i] = 0;
                    i -= 1;
                    self.available.insert(self.tuple[i]);
                    self.tuple[i] += 1;
                }
            }
        }
        true
    }
}

impl CombinatorialPort for DistinctTuples {
    fn reset(&mut self) {
        self.tuple.fill(0);
        self.available.fill();
        self.state = SearchState::BeforeFirst;
        if !self.descend(0) {
            self.state = SearchState::Exhausted;
        }
    }

    fn current(&self) -> &[usize] {
        &self.tuple
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        match self.state {
            SearchState::Exhausted => None,
            SearchState::BeforeFirst => {
                // The initial descent already ran (at construction or reset).
                self.state = SearchState::Running;
                Some(&self.tuple)
            }
            SearchState::Running => {
                let Some(last) = self.set_masks.len().checked_sub(1) else {
                    // Zero positions: the single empty tuple was already emitted.
                    self.state = SearchState::Exhausted;
                    return None;
                };
                self.available.insert(self.tuple[last]);
                self.tuple[last] += 1;
                if self.descend(last) {
                    Some(&self.tuple)
                } else {
                    self.state = SearchState::Exhausted;
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::collect_all;
    use std::collections::HashSet;

    fn all_tuples(sets: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        let mut generator = DistinctTuples::new(sets);
        collect_all(&mut generator)
    }

    #[test]
    fn duplicates_collapse_and_leave_no_tuple() {
        // After collapsing, three positions compete for the single value 1.
        let all = all_tuples(vec![vec![1, 1], vec![1, 1], vec![1]]);
        assert!(all.is_empty());
    }

    #[test]
    fn three_sets_produce_exactly_the_expected_tuples() {
        let all = all_tuples(vec![vec![1, 2], vec![2, 4], vec![3, 4, 5]]);
        let produced: HashSet<Vec<usize>> = all.iter().cloned().collect();
        let expected: HashSet<Vec<usize>> = [
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 2, 5],
            vec![1, 4, 3],
            vec![1, 4, 5],
            vec![2, 4, 3],
            vec![2, 4, 5],
        ]
        .into_iter()
        .collect();
        assert_eq!(produced, expected);
        assert_eq!(all.len(), expected.len());
    }

    #[test]
    fn three_element_first_set_adds_the_tuples_led_by_three() {
        let all = all_tuples(vec![vec![1, 2, 3], vec![2, 4], vec![3, 4, 5]]);
        let produced: HashSet<Vec<usize>> = all.into_iter().collect();
        let expected: HashSet<Vec<usize>> = [
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 2, 5],
            vec![1, 4, 3],
            vec![1, 4, 5],
            vec![2, 4, 3],
            vec![2, 4, 5],
            vec![3, 2, 4],
            vec![3, 2, 5],
            vec![3, 4, 5],
        ]
        .into_iter()
        .collect();
        assert_eq!(produced, expected);
    }

    #[test]
    fn identical_sets_enumerate_all_orderings() {
        let all = all_tuples(vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]]);
        let produced: HashSet<Vec<usize>> = all.iter().cloned().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(produced.len(), 6);
        for t in &produced {
            let values: HashSet<_> = t.iter().copied().collect();
            assert_eq!(values, [1, 2, 3].into_iter().collect());
        }
    }

    #[test]
    fn forced_assignment_yields_a_single_tuple() {
        let mut generator = DistinctTuples::new(vec![vec![1], vec![3], vec![1, 2]]);
        assert_eq!(generator.take_next(), Some(&[1, 3, 2][..]));
        assert_eq!(generator.take_next(), None);
    }

    #[test]
    fn two_sets_example_from_smallest_candidate_order() {
        let all = all_tuples(vec![vec![1, 2, 3], vec![2, 3]]);
        assert_eq!(
            all,
            vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![3, 2]]
        );
    }

    #[test]
    fn single_set_walks_its_values() {
        let all = all_tuples(vec![vec![0, 1, 2, 3]]);
        assert_eq!(all, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn empty_candidate_set_means_immediate_exhaustion() {
        let mut generator = DistinctTuples::new(vec![vec![0, 1], vec![]]);
        assert_eq!(generator.take_next(), None);
    }

    #[test]
    fn zero_positions_yield_one_empty_tuple() {
        let mut generator = DistinctTuples::new(Vec::new());
        assert_eq!(generator.take_next(), Some(&[][..]));
        assert_eq!(generator.take_next(), None);
    }

    #[test]
    fn reset_replays_identically() {
        let mut generator = DistinctTuples::new(vec![vec![0, 2, 5], vec![2, 5], vec![0, 5, 7]]);
        let first = collect_all(&mut generator);
        assert!(!first.is_empty());
        generator.reset();
        assert_eq!(collect_all(&mut generator), first);
    }

    #[test]
    fn matches_brute_force_over_candidate_products() {
        // Oracle: filter the full candidate product for pairwise distinctness.
        let sets = vec![vec![0, 1, 2], vec![1, 3], vec![0, 3, 4], vec![2, 4]];
        let produced: HashSet<Vec<usize>> = all_tuples(sets.clone()).into_iter().collect();
        let mut expected = HashSet::new();
        for &a in &sets[0] {
            for &b in &sets[1] {
                for &c in &sets[2] {
                    for &d in &sets[3] {
                        let t = vec![a, b, c, d];
                        let distinct: HashSet<_> = t.iter().copied().collect();
                        if distinct.len() == 4 {
                            expected.insert(t);
                        }
                    }
                }
            }
        }
        assert_eq!(produced, expected);
    }
}
