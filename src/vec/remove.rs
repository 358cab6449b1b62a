// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::Backend,
    error::Error,
    vec::{resolve_range, InplaceVec},
};

// Core imports
use core::ops::RangeBounds;

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len();
        if index >= len {
            return None;
        }
        // SAFETY: `index` is live. The length drops to `index` while the slot
        // is empty, then the tail slides onto it.
        unsafe {
            self.storage.set_len(index);
            let out = self.storage.take_at(index);
            S::move_range(&mut self.storage, index + 1..len, index);
            self.storage.set_len(len - 1);
            Some(out)
        }
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfRange)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place. Does not preserve order.
    ///
    /// Returns `None` when `index >= len`. Removing the last element avoids
    /// the move.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        let len = self.len();
        if index >= len {
            return None;
        }
        let last = len - 1;
        // SAFETY: `index` and `last` are live and stop being counted before
        // either is touched.
        unsafe {
            self.storage.set_len(last);
            let out = self.storage.take_at(index);
            if index != last {
                self.storage.relocate(last, index);
            }
            Some(out)
        }
    }

    /// Fallible variant of [`swap_remove`](Self::swap_remove), returning
    /// [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfRange)
    }

    /// Destroys the element at `index` and shifts the tail left.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.len() {
            return Err(Error::OutOfRange);
        }
        S::erase_range(&mut self.storage, index..index + 1);
        Ok(())
    }

    /// Destroys the elements in `range` and shifts the tail left.
    ///
    /// Returns [`Error::OutOfRange`] for an inverted range or one that ends
    /// past `len`. An empty range is a no-op.
    #[inline]
    pub fn erase_range<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.len()).ok_or(Error::OutOfRange)?;
        S::erase_range(&mut self.storage, range);
        Ok(())
    }
}
