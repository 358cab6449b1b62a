// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`InplaceVec`](crate::InplaceVec).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports every index type a slice does (`usize` and all range forms);
//! - views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::vec::InplaceVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize, S> Index<I> for InplaceVec<T, N, S> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize, S> IndexMut<I> for InplaceVec<T, N, S> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
