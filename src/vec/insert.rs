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
    /// Inserts `value` at `index`, shifting the tail right, and returns a
    /// reference to the new element.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`.
    /// - Returns [`Error::CapacityExceeded`] if at capacity.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        self.check_insert(index, 1)?;
        into_ok(S::insert_range(
            &mut self.storage,
            index,
            iter::once(Ok::<T, Infallible>(value)),
            1,
        ));
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Inserts `n` clones of `value` at `index`.
    ///
    /// Checked before mutation; strong if a clone panics.
    #[inline]
    pub fn insert_n(&mut self, index: usize, n: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_insert(index, n)?;
        into_ok(S::insert_range(
            &mut self.storage,
            index,
            iter::repeat_with(|| Ok::<T, Infallible>(value.clone())),
            n,
        ));
        Ok(())
    }

    /// Inserts clones of `src` at `index`.
    ///
    /// Checked before mutation; strong if a clone panics.
    #[inline]
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.check_insert(index, src.len())?;
        into_ok(S::insert_range(
            &mut self.storage,
            index,
            src.iter().cloned().map(Ok::<T, Infallible>),
            src.len(),
        ));
        Ok(())
    }

    /// Inserts the items of `iter` at `index` and returns how many were
    /// inserted.
    ///
    /// See [`try_insert_iter`](Self::try_insert_iter) for how sources with and
    /// without an exact size hint are handled.
    #[inline]
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
    {
        self.try_insert_iter(index, iter.into_iter().map(Ok::<T, Infallible>))
    }

    /// Inserts the items of a fallible source at `index` and returns how many
    /// were inserted.
    ///
    /// Strong guarantee in every failure case:
    ///
    /// - A source with an exact size hint is checked against the spare
    ///   capacity up front ([`Error::CapacityExceeded`], nothing consumed).
    /// - A source of unknown length is appended behind the live elements and
    ///   rotated into place once it is exhausted. If it yields more than the
    ///   spare capacity, the appended items are destroyed and
    ///   [`Error::CapacityExceeded`] is returned.
    /// - The first `Err` item is returned as
    ///   [`Error::ElementOperationFailed`] after the inserted items are
    ///   destroyed again.
    ///
    /// The source may be partially consumed on error.
    pub fn try_insert_iter<E, I>(&mut self, index: usize, iter: I) -> Result<usize, Error<E>>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut iter = iter.into_iter();
        let len = self.len();
        if index > len {
            return Err(Error::OutOfRange);
        }

        if let Some(n) = known_len(&iter) {
            if n > self.spare_capacity() {
                return Err(Error::CapacityExceeded);
            }
            return S::insert_range(&mut self.storage, index, iter, n)
                .map_err(Error::ElementOperationFailed);
        }

        let spare = self.spare_capacity();
        S::construct_range(&mut self.storage, iter.by_ref(), spare)
            .map_err(Error::ElementOperationFailed)?;
        if iter.next().is_some() {
            S::destroy_back(&mut self.storage, len);
            return Err(Error::CapacityExceeded);
        }
        let inserted = self.len() - len;
        self.as_mut_slice()[index..].rotate_right(inserted);
        Ok(inserted)
    }

    fn check_insert(&self, index: usize, n: usize) -> Result<(), Error> {
        if index > self.len() {
            return Err(Error::OutOfRange);
        }
        if n > self.spare_capacity() {
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }
}
