// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Phased construction transaction.
//!
//! A [`Transaction`] borrows an end cursor (a logical length) while a batch of
//! elements is constructed one by one. It keeps a private committed cursor
//! that the caller advances after every successful construction, and on drop
//! it writes that cursor back to the borrowed end, whether the batch
//! finished or not.
//!
//! Paired with a [`RollbackGuard`](crate::RollbackGuard) armed *before* the
//! transaction starts, this makes partial progress visible to the guard: if
//! element 3 of 5 fails, the end already covers elements 0..3 by the time the
//! guard runs, so it destroys exactly those.

// Core imports
use core::fmt;

/// Tracks how far a batch construction got and publishes it on drop.
#[must_use = "a transaction publishes its cursor only when dropped"]
pub struct Transaction<'a> {
    end: &'a mut usize,
    original: usize,
    target: Option<usize>,
    committed: usize,
}

impl<'a> Transaction<'a> {
    /// Starts a transaction whose final count is not known up front.
    #[inline]
    pub fn new(end: &'a mut usize) -> Self {
        let original = *end;
        Self {
            end,
            original,
            target: None,
            committed: original,
        }
    }

    /// Starts a transaction that intends to construct exactly `n` elements,
    /// fixing the target end at `*end + n`.
    #[inline]
    pub fn with_count(end: &'a mut usize, n: usize) -> Self {
        let original = *end;
        Self {
            end,
            original,
            target: Some(original + n),
            committed: original,
        }
    }

    /// Records `k` more successfully constructed elements.
    #[inline]
    pub fn commit(&mut self, k: usize) {
        self.commit_to(self.committed + k);
    }

    /// Moves the committed cursor to the explicit position `pos`.
    #[inline]
    pub fn commit_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.original, "commit before the start of the batch");
        debug_assert!(
            self.target.map_or(true, |t| pos <= t),
            "commit past the target end"
        );
        self.committed = pos;
    }

    /// The next position to construct into (the committed cursor).
    #[inline]
    pub fn position(&self) -> usize {
        self.committed
    }

    /// The end value the transaction started from.
    #[inline]
    pub fn original(&self) -> usize {
        self.original
    }

    /// The precomputed target end, if one was given.
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Elements still to construct before the target is reached.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.target.map(|t| t - self.committed)
    }

    /// Number of elements committed so far.
    #[inline]
    pub fn committed_count(&self) -> usize {
        self.committed - self.original
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        *self.end = self.committed;
    }
}

impl fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("original", &self.original)
            .field("target", &self.target)
            .field("committed", &self.committed)
            .finish()
    }
}
