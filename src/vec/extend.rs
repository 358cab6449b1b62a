// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::Backend,
    error::{into_ok, Error},
    vec::{known_len, InplaceVec},
};

// Core imports
use core::convert::Infallible;

/// Truncating: takes at most `spare_capacity()` items and leaves the rest of
/// the source unconsumed.
impl<T, const N: usize, S: Backend<T>> Extend<T> for InplaceVec<T, N, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let spare = self.spare_capacity();
        if spare == 0 {
            return;
        }
        into_ok(S::construct_range(
            &mut self.storage,
            iter.into_iter().map(Ok::<T, Infallible>),
            spare,
        ));
    }
}

impl<'a, T: Clone + 'a, const N: usize, S: Backend<T>> Extend<&'a T> for InplaceVec<T, N, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::CapacityExceeded`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::CapacityExceeded);
        }
        S::append_slice(&mut self.storage, src);
        Ok(())
    }

    /// Appends clones of as many elements of `src` as fit and returns the
    /// count appended.
    #[inline]
    #[must_use]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = self.spare_capacity().min(src.len());
        S::append_slice(&mut self.storage, &src[..take]);
        take
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// All-or-nothing: if the iterator yields more than `spare_capacity()`
    /// items, the appended ones are destroyed again, `self` is left
    /// unchanged and [`Error::CapacityExceeded`] is returned. A source with
    /// an exact size hint is rejected before anything is pulled from it.
    pub fn try_extend_from_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let spare = self.spare_capacity();
        if known_len(&iter).is_some_and(|n| n > spare) {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len();
        into_ok(S::construct_range(
            &mut self.storage,
            iter.by_ref().map(Ok::<T, Infallible>),
            spare,
        ));
        if iter.next().is_some() {
            S::destroy_back(&mut self.storage, len);
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{testing::Tracker, CopyInplaceVec, Error, InplaceVec};

    #[test]
    fn test_extend_from_slice_and_truncated() {
        let mut v: CopyInplaceVec<u8, 5> = CopyInplaceVec::new();
        assert_eq!(v.extend_from_slice(&[1, 2, 3]), Ok(()));
        assert_eq!(v.extend_from_slice(&[4, 5, 6]), Err(Error::CapacityExceeded));
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.extend_from_slice_truncated(&[4, 5, 6]), 2);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.extend_from_slice(&[]), Ok(()));
    }

    #[test]
    fn test_extend_trait_truncates() {
        let mut v: InplaceVec<i32, 4> = InplaceVec::from_array([1, 2]);
        v.extend([3, 4, 5]);
        assert_eq!(v, [1, 2, 3, 4]);
        v.extend(&[9]);
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_extend_does_not_overconsume() {
        struct Counting {
            remaining: usize,
            next_calls: usize,
        }

        impl Iterator for Counting {
            type Item = u8;
            fn next(&mut self) -> Option<u8> {
                if self.remaining == 0 {
                    return None;
                }
                self.remaining -= 1;
                self.next_calls += 1;
                Some(1)
            }
        }

        let mut it = Counting {
            remaining: 10,
            next_calls: 0,
        };
        let mut v: InplaceVec<u8, 4> = InplaceVec::new();
        v.extend(&mut it);
        assert_eq!(v.len(), 4);
        assert_eq!(it.next_calls, 4); // must not be 5
    }

    #[test]
    fn test_try_extend_from_iter_all_or_nothing() {
        let tracker = Tracker::new();
        let mut v: InplaceVec<_, 4> = InplaceVec::from_array([tracker.make(1)]);

        let src = (2..4).map(|x| tracker.make(x)).filter(|_| true);
        v.try_extend_from_iter(src).unwrap();
        assert_eq!(v.len(), 3);

        // Unknown length, one too many: appended items are destroyed again.
        let src = (4..6).map(|x| tracker.make(x)).filter(|_| true);
        assert_eq!(v.try_extend_from_iter(src), Err(Error::CapacityExceeded));
        assert_eq!(v.len(), 3);
        assert_eq!(tracker.alive(), 3);

        // Empty source on a full vector is fine.
        let mut full: InplaceVec<i32, 2> = InplaceVec::from_array([1, 2]);
        full.try_extend_from_iter(core::iter::empty()).unwrap();
        assert_eq!(full.try_extend_from_iter([3]), Err(Error::CapacityExceeded));
    }
}
