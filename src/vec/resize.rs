// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{backend::Backend, error::Error, vec::InplaceVec};

// Core imports
use core::convert::Infallible;

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > N`. Growing is
    /// strong; shrinking destroys the tail last to first.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.try_resize_with(new_len, || Ok::<T, Infallible>(value.clone()))
    }

    /// Resizes to `new_len`, filling with default values when growing.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.try_resize_with(new_len, || Ok::<T, Infallible>(T::default()))
    }

    /// Resizes to `new_len`, filling with values built by `f` when growing.
    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        self.try_resize_with(new_len, || Ok::<T, Infallible>(f()))
    }

    /// Resizes to `new_len`, filling with values built by the fallible `f`.
    ///
    /// If the k-th value fails, the `k - 1` values built before it are
    /// destroyed and the length is unchanged.
    pub fn try_resize_with<E, F>(&mut self, new_len: usize, f: F) -> Result<(), Error<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len();
        if new_len <= len {
            S::destroy_back(&mut self.storage, new_len);
            return Ok(());
        }
        S::construct_n(&mut self.storage, new_len - len, f).map_err(Error::ElementOperationFailed)
    }
}
