// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`InplaceVec`](crate::InplaceVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it.
//! - `&InplaceVec` and `&mut InplaceVec` iterate as slices.

// Crate imports
use crate::{storage::RawStorage, vec::InplaceVec};

// Core imports
use core::{fmt, iter::FusedIterator, ptr, slice};

/// Owned iterator returned by `InplaceVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // Length held at zero; the live window is `[front, back)`.
    storage: RawStorage<T, N>,
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yielded yet.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live.
        unsafe {
            slice::from_raw_parts(self.storage.as_ptr().add(self.front), self.back - self.front)
        }
    }

    /// The elements not yielded yet, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[front, back)` is live and `&mut self` is exclusive.
        unsafe {
            slice::from_raw_parts_mut(
                self.storage.as_mut_ptr().add(self.front),
                self.back - self.front,
            )
        }
    }

    // Drops `[from, to)`, which the caller has already moved out of the
    // live window.
    unsafe fn drop_window(&mut self, from: usize, to: usize) {
        let window = ptr::slice_from_raw_parts_mut(self.storage.as_mut_ptr().add(from), to - from);
        ptr::drop_in_place(window);
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was in the live window and just left it.
            Some(unsafe { self.storage.take_at(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let start = self.front;
        let skip = n.min(self.back - start);
        self.front = start + skip;
        // SAFETY: `[start, start + skip)` was live and just left the window.
        unsafe { self.drop_window(start, start + skip) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was in the live window and just left it.
            Some(unsafe { self.storage.take_at(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let end = self.back;
        let skip = n.min(end - self.front);
        self.back = end - skip;
        // SAFETY: `[end - skip, end)` was live and just left the window.
        unsafe { self.drop_window(end - skip, end) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: `[front, back)` was live and just left the window.
        unsafe { self.drop_window(front, back) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize, S> IntoIterator for &'a InplaceVec<T, N, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize, S> IntoIterator for &'a mut InplaceVec<T, N, S> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize, S> IntoIterator for InplaceVec<T, N, S> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        let mut storage = self.storage;
        // SAFETY: ownership of `[0, back)` passes to the iterator window.
        unsafe { storage.set_len(0) };
        IntoIter {
            storage,
            front: 0,
            back,
        }
    }
}
