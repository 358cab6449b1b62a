// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{backend::Backend, error::Error, vec::InplaceVec};

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success `self` keeps `[0, at)` and the returned vector holds the
    /// tail `[at, len)`; the tail values are moved, not cloned.
    ///
    /// Returns [`Error::OutOfRange`] if `at > self.len()`, leaving `self`
    /// unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len();
        if at > len {
            return Err(Error::OutOfRange);
        }
        Ok(self.take_range(at, len))
    }
}
