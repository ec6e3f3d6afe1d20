//! Explicit per-query memoization primitives.
//!
//! Each derived query owns one [`Memo`] cell holding the last-seen input
//! slices and the last-computed output. A query recomputes exactly when an
//! input slice changes identity; otherwise the cached output is returned
//! as a cheap clone (outputs are `Arc`s or `Copy` values). Identity means
//! `Arc::ptr_eq` for shared slices and value equality for scalar inputs,
//! mirroring how the store publishes changes: a region that changed gets a
//! new `Arc`, an untouched region keeps its old one.

use std::sync::Arc;

use coffre_store::SortMode;

/// Identity comparison for memoized query inputs.
pub trait SliceIdentity {
    /// `true` when `other` denotes the same input slice as `self`.
    fn same_slice(&self, other: &Self) -> bool;
}

impl<T> SliceIdentity for Arc<T> {
    fn same_slice(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T> SliceIdentity for Option<Arc<T>> {
    fn same_slice(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl SliceIdentity for String {
    fn same_slice(&self, other: &Self) -> bool {
        self == other
    }
}

impl SliceIdentity for Option<String> {
    fn same_slice(&self, other: &Self) -> bool {
        self == other
    }
}

impl SliceIdentity for SortMode {
    fn same_slice(&self, other: &Self) -> bool {
        self == other
    }
}

impl<A: SliceIdentity, B: SliceIdentity> SliceIdentity for (A, B) {
    fn same_slice(&self, other: &Self) -> bool {
        self.0.same_slice(&other.0) && self.1.same_slice(&other.1)
    }
}

impl<A: SliceIdentity, B: SliceIdentity, C: SliceIdentity> SliceIdentity for (A, B, C) {
    fn same_slice(&self, other: &Self) -> bool {
        self.0.same_slice(&other.0)
            && self.1.same_slice(&other.1)
            && self.2.same_slice(&other.2)
    }
}

/// One query's cache cell: the last input slices and the last output.
#[derive(Debug)]
pub struct Memo<I, O> {
    query: &'static str,
    slot: Option<(I, O)>,
}

impl<I: SliceIdentity, O: Clone> Memo<I, O> {
    /// Create an empty cell; `query` labels trace events.
    #[must_use]
    pub const fn new(query: &'static str) -> Self {
        Self { query, slot: None }
    }

    /// Return the cached output when `input` matches the last-seen slices,
    /// otherwise recompute via `compute` and cache the result.
    pub fn apply(&mut self, input: I, compute: impl FnOnce(&I) -> O) -> O {
        if let Some((last_input, last_output)) = &self.slot {
            if last_input.same_slice(&input) {
                return last_output.clone();
            }
        }
        tracing::trace!(query = self.query, "recomputing derived view");
        let output = compute(&input);
        self.slot = Some((input, output.clone()));
        output
    }
}
