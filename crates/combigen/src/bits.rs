//! Word-backed bitsets sized at construction.
//!
//! Support structure for the distinct-tuple search: one immutable mask per
//! tuple position plus one mutable availability mask, all of the same width.
//! `next_common_bit` fuses the intersect-then-scan step so the search needs no
//! scratch set.

const WORD_BITS: usize = 64;

/// Fixed-width set of small indices, one bit per value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    nbits: usize,
}

impl BitSet {
    /// Empty set able to hold values `0..nbits`.
    pub fn new(nbits: usize) -> Self {
        Self {
            words: vec![0; (nbits + WORD_BITS - 1) / WORD_BITS],
            nbits,
        }
    }

    pub fn capacity(&self) -> usize {
        self.nbits
    }

    pub fn insert(&mut self, bit: usize) {
        debug_assert!(bit < self.nbits);
        self.words[bit / WORD_BITS] |= 1u64 << (bit % WORD_BITS);
    }

    pub fn remove(&mut self, bit: usize) {
        debug_assert!(bit < self.nbits);
        self.words[bit / WORD_BITS] &= !(1u64 << (bit % WORD_BITS));
    }

    pub fn contains(&self, bit: usize) -> bool {
        bit < self.nbits && (self.words[bit / WORD_BITS] >> (bit % WORD_BITS)) & 1 != 0
    }

    /// Set every bit in `0..capacity`.
    pub fn fill(&mut self) {
        for w in &mut self.words {
            *w = u64::MAX;
        }
        let tail = self.nbits % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
    }

    pub fn clear_all(&mut self) {
        for w in &mut self.words {
            *w = 0;
        }
    }

    /// Number of set bits.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Smallest index `>= from` set in both `self` and `other`, if any.
    ///
    /// Both sets must have the same capacity.
    pub fn next_common_bit(&self, other: &BitSet, from: usize) -> Option<usize> {
        debug_assert_eq!(self.nbits, other.nbits);
        if from >= self.nbits {
            return None;
        }
        let mut word_idx = from / WORD_BITS;
        let mut word = self.words[word_idx] & other.words[word_idx] & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(word_idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            if word_idx == self.words.len() {
                return None;
            }
            word = self.words[word_idx] & other.words[word_idx];
        }
    }
}
