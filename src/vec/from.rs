// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{backend::Backend, error::Error, vec::InplaceVec};

impl<T, const N: usize, S: Backend<T>> From<[T; N]> for InplaceVec<T, N, S> {
    fn from(array: [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<T: Clone, const N: usize, S: Backend<T>> From<&[T; N]> for InplaceVec<T, N, S> {
    fn from(src: &[T; N]) -> Self {
        let mut v = Self::new();
        S::append_slice(&mut v.storage, src);
        v
    }
}

impl<T: Clone, const N: usize, S: Backend<T>> TryFrom<&[T]> for InplaceVec<T, N, S> {
    type Error = Error;

    /// Clones `src`; [`Error::CapacityExceeded`] if it is longer than `N`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

/// Truncating: collects at most the first `N` items and leaves the rest of
/// the source unconsumed.
impl<T, const N: usize, S: Backend<T>> FromIterator<T> for InplaceVec<T, N, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::CapacityExceeded`] if it yields more than `N` items.
    ///
    /// The items collected before the overflow are dropped; the source may
    /// be left partially consumed.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_extend_from_iter(iter)?;
        Ok(v)
    }
}
