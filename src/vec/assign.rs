// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::Backend,
    error::{into_ok, Error},
    vec::{known_len, InplaceVec},
};

// Core imports
use core::{convert::Infallible, iter};

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Replaces the contents with clones of `src`.
    ///
    /// Returns [`Error::CapacityExceeded`] before touching anything if
    /// `src.len() > N`. Basic guarantee if a clone panics: elements already
    /// assigned keep their new values, a partially built tail is destroyed.
    #[inline]
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.reserve(src.len())?;
        S::assign_slice(&mut self.storage, src);
        Ok(())
    }

    /// Replaces the contents with `n` clones of `value`.
    #[inline]
    pub fn assign_n(&mut self, n: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.reserve(n)?;
        into_ok(S::assign_range(
            &mut self.storage,
            iter::repeat_with(|| Ok::<T, Infallible>(value.clone())),
            n,
        ));
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    #[inline]
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        self.try_assign_iter(iter.into_iter().map(Ok::<T, Infallible>))
    }

    /// Replaces the contents with the items of a fallible source.
    ///
    /// - A source with an exact size hint over `N` is rejected with
    ///   [`Error::CapacityExceeded`] before anything changes.
    /// - A source of unknown length is assigned up to `N` items; if it still
    ///   yields more, [`Error::CapacityExceeded`] is returned and the vector
    ///   holds the first `N`.
    /// - On the first `Err` item the vector keeps the values assigned so far
    ///   and a partially built tail is destroyed; the length never grows past
    ///   what was assigned.
    pub fn try_assign_iter<E, I>(&mut self, iter: I) -> Result<(), Error<E>>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut iter = iter.into_iter();
        if let Some(n) = known_len(&iter) {
            self.reserve(n).map_err(Error::widen)?;
            return S::assign_range(&mut self.storage, iter, n)
                .map_err(Error::ElementOperationFailed);
        }
        S::assign_range(&mut self.storage, iter.by_ref(), N)
            .map_err(Error::ElementOperationFailed)?;
        if iter.next().is_some() {
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }
}
