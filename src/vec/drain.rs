// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::Backend,
    iter::IntoIter,
    vec::{resolve_range, InplaceVec},
};

// Core imports
use core::{fmt, iter::FusedIterator, ops::RangeBounds};

/// Owned iterator returned by [`InplaceVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Wraps an [`IntoIter`] over the already removed elements; dropping it
///   early drops the rest of them.
pub struct Drain<'a, T, const N: usize, S = crate::General> {
    _parent: &'a mut InplaceVec<T, N, S>,
    iter: IntoIter<T, N>,
}

impl<T, const N: usize, S> Iterator for Drain<'_, T, N, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}

impl<T, const N: usize, S> DoubleEndedIterator for Drain<'_, T, N, S> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}

impl<T, const N: usize, S> ExactSizeIterator for Drain<'_, T, N, S> {}
impl<T, const N: usize, S> FusedIterator for Drain<'_, T, N, S> {}

impl<T: fmt::Debug, const N: usize, S> fmt::Debug for Drain<'_, T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter.as_slice()).finish()
    }
}

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// The elements are removed immediately and the tail is shifted left,
    /// before the iterator yields anything.
    ///
    /// # Panics
    ///
    /// Like [`Vec::drain`](alloc::vec::Vec::drain), panics if the start is
    /// greater than the end or the end is greater than `len`. Use
    /// [`erase_range`](Self::erase_range) for a non-panicking removal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inplace_vec::InplaceVec;
    /// let mut v: InplaceVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: InplaceVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N, S>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let Some(range) = resolve_range(range, len) else {
            panic!("drain range out of bounds for length {len}");
        };
        let taken = self.take_range(range.start, range.end);
        Drain {
            _parent: self,
            iter: taken.into_iter(),
        }
    }
}
