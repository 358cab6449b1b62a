// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize, S> InplaceVec<T, N, S> {
    /// Removes the last element and returns it, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        // SAFETY: slot `len - 1` is live and stops being counted first.
        unsafe {
            self.storage.set_len(len - 1);
            Some(self.storage.take_at(len - 1))
        }
    }

    /// Like [`pop`](Self::pop), but an empty vector is
    /// [`Error::PreconditionViolation`].
    #[inline]
    pub fn try_pop(&mut self) -> Result<T, Error> {
        self.pop().ok_or(Error::PreconditionViolation)
    }
}
