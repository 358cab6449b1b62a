// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InplaceVec};

impl<T, const N: usize, S> InplaceVec<T, N, S> {
    /// Checked access: [`Error::OutOfRange`] if `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfRange)
    }

    /// Checked mutable access: [`Error::OutOfRange`] if `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfRange)
    }

    /// The first element; [`Error::PreconditionViolation`] when empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::PreconditionViolation)
    }

    /// The first element, mutably; [`Error::PreconditionViolation`] when
    /// empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(Error::PreconditionViolation)
    }

    /// The last element; [`Error::PreconditionViolation`] when empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::PreconditionViolation)
    }

    /// The last element, mutably; [`Error::PreconditionViolation`] when
    /// empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(Error::PreconditionViolation)
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `i < len`. Checked with `debug_assert!` in debug builds.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len(), "index {i} out of range for length {}", self.len());
        self.as_slice().get_unchecked(i)
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `i < len`. Checked with `debug_assert!` in debug builds.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len(), "index {i} out of range for length {}", self.len());
        self.as_mut_slice().get_unchecked_mut(i)
    }
}
