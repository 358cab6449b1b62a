// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::ptr;

impl<T, const N: usize, S> InplaceVec<T, N, S> {
    /// Converts to `[T; N]` when **full** (`len == N`); otherwise hands the
    /// vector back unchanged.
    #[inline]
    pub fn try_into_array(mut self) -> Result<[T; N], Self> {
        if self.len() != N {
            return Err(self);
        }
        // SAFETY: all `N` slots are live, `[MaybeUninit<T>; N]` has the layout
        // of `[T; N]`, and zeroing the length first hands ownership of every
        // value to the returned array.
        unsafe {
            self.storage.set_len(0);
            Ok(ptr::read(self.storage.as_ptr().cast::<[T; N]>()))
        }
    }
}
