// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::Backend,
    error::{into_ok, Error},
    storage::RawStorage,
    vec::InplaceVec,
};

// Core imports
use core::{convert::Infallible, marker::PhantomData};

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Constructs an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            strategy: PhantomData,
        }
    }

    /// Constructs a vector of `n` default values.
    ///
    /// Returns [`Error::CapacityExceeded`] if `n > N`.
    #[inline]
    pub fn with_len(n: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize_default(n)?;
        Ok(v)
    }

    /// Constructs a vector of `n` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `n > N`.
    #[inline]
    pub fn from_elem(n: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize(n, value)?;
        Ok(v)
    }

    /// Constructs a vector holding the `M` values of `array`.
    ///
    /// `M <= N` is checked at compile time.
    ///
    /// ```rust
    /// use inplace_vec::InplaceVec;
    ///
    /// let v: InplaceVec<&str, 4> = InplaceVec::from_array(["a", "b"]);
    /// assert_eq!(v.len(), 2);
    /// ```
    #[inline]
    pub fn from_array<const M: usize>(array: [T; M]) -> Self {
        const { assert!(M <= N, "array is longer than the capacity") };
        let mut v = Self::new();
        into_ok(S::construct_range(
            &mut v.storage,
            array.into_iter().map(Ok::<T, Infallible>),
            M,
        ));
        v
    }
}

impl<T, const N: usize, S: Backend<T>> Default for InplaceVec<T, N, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
