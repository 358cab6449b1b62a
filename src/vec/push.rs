// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::Backend,
    error::{into_ok, Error},
    vec::InplaceVec,
};

// Core imports
use core::convert::Infallible;

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Appends `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] when full; `value` is dropped and
    /// the vector is unchanged. Use [`try_push`](Self::try_push) to get the
    /// value back.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::CapacityExceeded);
        }
        into_ok(S::construct_single(&mut self.storage, || {
            Ok::<T, Infallible>(value)
        }));
        Ok(())
    }

    /// Appends `value`, or hands it back when the vector is full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        into_ok(S::construct_single(&mut self.storage, || {
            Ok::<T, Infallible>(value)
        }));
        Ok(())
    }

    /// Appends the value built by `f` and returns a reference to it.
    ///
    /// Capacity is checked before `f` runs; a panic in `f` leaves the
    /// vector unchanged.
    #[inline]
    pub fn push_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        self.try_push_with(|| Ok(f()))
    }

    /// Appends the value built by the fallible `f` and returns a reference
    /// to it.
    ///
    /// Strong guarantee: if `f` fails the vector is unchanged and the error
    /// is returned as [`Error::ElementOperationFailed`].
    ///
    /// ```rust
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let mut v: InplaceVec<u32, 2> = InplaceVec::new();
    /// let parsed = v.try_push_with(|| "12".parse::<u32>()).unwrap();
    /// assert_eq!(*parsed, 12);
    /// assert!(matches!(
    ///     v.try_push_with(|| "x".parse::<u32>()),
    ///     Err(Error::ElementOperationFailed(_))
    /// ));
    /// assert_eq!(v, [12]);
    /// ```
    #[inline]
    pub fn try_push_with<E, F>(&mut self, f: F) -> Result<&mut T, Error<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.is_full() {
            return Err(Error::CapacityExceeded);
        }
        S::construct_single(&mut self.storage, f).map_err(Error::ElementOperationFailed)
    }
}
