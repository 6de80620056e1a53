//! Shared pull contract for all generators.
//!
//! Purpose
//! - One trait (`CombinatorialPort`) covering reset, current-view access, and
//!   successor computation for every generator family in this crate.
//! - One error type for eager construction-time validation.
//!
//! Why this shape
//! - `take_next` returns `Option<&[usize]>` borrowed from `&mut self`: the
//!   exhaustion sentinel is `None` (never an error), and the borrow checker
//!   enforces that a returned view is dropped before the next step mutates the
//!   underlying buffer.
//! - Exhaustion leaves the generator inert: further `take_next` calls keep
//!   returning `None` until `reset`.

use std::fmt;

/// Error raised synchronously by fallible constructors. Iteration itself never
/// fails; exhaustion is reported as `None` from [`CombinatorialPort::take_next`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombinatorialError {
    InvalidParameters { reason: String },
}

impl CombinatorialError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CombinatorialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { reason } => write!(f, "invalid parameters: {reason}"),
        }
    }
}

impl std::error::Error for CombinatorialError {}

/// A stateful, single-threaded generator of fixed-length index tuples.
///
/// The returned slice is a view of a buffer owned by the generator and reused
/// on every step. Its contents are only meaningful between a successful
/// `take_next` and the following call; see [`CombinatorialPort::snapshot`] for
/// a stable copy. Reading `current()` before the first `take_next` or after
/// exhaustion is caller error: the contents are unspecified (no panic).
pub trait CombinatorialPort {
    /// Restart the sequence from its beginning.
    fn reset(&mut self);

    /// View of the most recently produced structure.
    fn current(&self) -> &[usize];

    /// Advance to the next structure, or `None` once the sequence is complete.
    fn take_next(&mut self) -> Option<&[usize]>;

    /// Owned copy of the current structure, safe to retain across steps.
    fn snapshot(&self) -> Vec<usize> {
        self.current().to_vec()
    }
}

impl<P: CombinatorialPort + ?Sized> CombinatorialPort for Box<P> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn current(&self) -> &[usize] {
        (**self).current()
    }

    fn take_next(&mut self) -> Option<&[usize]> {
        (**self).take_next()
    }
}

/// Drain the remainder of a port into owned snapshots.
pub fn collect_all<P: CombinatorialPort + ?Sized>(port: &mut P) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    while let Some(t) = port.take_next() {
        out.push(t.to_vec());
    }
    out
}

/// Restartable `Iterator` adapter yielding owned copies of each structure.
///
/// Owns the port; `restart` maps to the port's `reset`, so the same adapter can
/// replay the sequence any number of times.
pub struct Snapshots<P> {
    port: P,
}

impl<P: CombinatorialPort> Snapshots<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Rewind to the beginning of the sequence.
    pub fn restart(&mut self) {
        self.port.reset();
    }

    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P: CombinatorialPort> Iterator for Snapshots<P> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.port.take_next().map(|t| t.to_vec())
    }
}
