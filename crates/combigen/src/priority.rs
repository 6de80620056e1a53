//! Permutation enumeration with a replayable, reorderable prefix.
//!
//! Wraps [`Permutations`] so a caller can retroactively promote a just-emitted
//! permutation: on later resets the promoted entries replay first, ordered by
//! non-increasing priority, before the underlying generator resumes (skipping
//! anything already promoted). The underlying state machine is never altered.
//!
//! Bookkeeping is an ordered list of promoted entries plus a map from
//! permutation contents to the entry's current list slot; the map provides
//! O(1) membership checks for the skip loop and stays consistent across the
//! priority swaps.

use std::collections::HashMap;

use crate::permutations::Permutations;
use crate::port::{CombinatorialError, CombinatorialPort};

#[derive(Clone, Debug)]
struct PriorityEntry {
    permutation: Vec<usize>,
    priority: u32,
}

/// Provenance of the most recent `take_next` result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastResult {
    None,
    /// Replayed from the promoted list (the entry at `replay_pos - 1`).
    Replayed,
    /// Pulled fresh from the underlying generator.
    Fresh,
}

/// Lexicographic permutations with caller-adjustable "niceness": promoted
/// permutations replay at the front of every subsequent run.
#[derive(Clone, Debug)]
pub struct PriorityPermutations {
    generator: Permutations,
    entries: Vec<PriorityEntry>,
    slots: HashMap<Vec<usize>, usize>,
    replay_pos: usize,
    last: LastResult,
}

impl PriorityPermutations {
    pub fn new(dimension: usize) -> Self {
        Self::wrap(Permutations::new(dimension))
    }

    /// Start the underlying enumeration mid-sequence from `start`.
    pub fn from_permutation(start: Vec<usize>) -> Result<Self, CombinatorialError> {
        Ok(Self::wrap(Permutations::from_permutation(start)?))
    }

    fn wrap(generator: Permutations) -> Self {
        Self {
            generator,
            entries: Vec::new(),
            slots: HashMap::new(),
            replay_pos: 0,
            last: LastResult::None,
        }
    }

    /// Number of promoted permutations recorded so far.
    pub fn promoted(&self) -> usize {
        self.entries.len()
    }

    /// Promote the most recent `take_next` result.
    ///
    /// A fresh value from the underlying generator is recorded with priority 1
    /// at the end of the promoted list; a replayed entry has its priority
    /// incremented and is swapped with the leftmost entry of strictly lower
    /// priority, keeping the list non-increasing by priority (equal priorities
    /// keep insertion order). A no-op when nothing has been emitted yet.
    pub fn nice(&mut self) {
        match self.last {
            LastResult::None => {}
            LastResult::Fresh => {
                let permutation = self.generator.current().to_vec();
                let slot = self.entries.len();
                self.slots.insert(permutation.clone(), slot);
                self.entries.push(PriorityEntry {
                    permutation,
                    priority: 1,
                });
                // Skip the new entry during the current run; it replays on reset.
                self.replay_pos += 1;
                self.last = LastResult::Replayed;
            }
            LastResult::Replayed => {
                let index = self.replay_pos - 1;
                self.entries[index].priority += 1;
                let priority = self.entries[index].priority;
                let mut position = index;
                while position > 0 && self.entries[position - 1].priority < priority {
                    position -= 1;
                }
                if position != index {
                    self.entries.swap(position, index);
                    self.slots
                        .insert(self.entries[position].permutation.clone(), position);
                    self.slots
                        .insert(self.entries[index].permutation.clone(), index);
                }
            }
        }
    }
}

impl CombinatorialPort for PriorityPermutations {
    /// Rewinds the replay cursor and the underlying generator. The promoted
    /// list and its priorities survive; only explicit reconstruction clears
    /// them.
    fn reset(&mut self) {
        self.generator.reset();
        self.replay_pos = 0;
        self.last = LastResult::None;
    }

    fn current(&self) -> &[usize] {
        match self.last {
            LastResult::Replayed => &self.entries[self.replay_pos - 1].permutation,
            LastResult::Fresh | LastResult::None => self.generator.current(),
        }
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        if self.replay_pos < self.entries.len() {
            let pos = self.replay_pos;
            self.replay_pos += 1;
            self.last = LastResult::Replayed;
            return Some(&self.entries[pos].permutation);
        }
        loop {
            match self.generator.take_next() {
                None => return None,
                Some(next) => {
                    if !self.slots.contains_key(next) {
                        break;
                    }
                }
            }
        }
        self.last = LastResult::Fresh;
        Some(self.generator.current())
    }
}
