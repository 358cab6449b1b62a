// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `InplaceVec`.
//!
//! Capacity, range and precondition failures are detected before any mutation
//! starts. Element failures come from the caller's producer (a closure or an
//! iterator of `Result`s) and are carried in
//! [`Error::ElementOperationFailed`].

// Core imports
use core::{convert::Infallible, error::Error as CoreError, fmt};

/// Errors returned by operations on [`InplaceVec`](crate::InplaceVec).
///
/// `E` is the error type of a fallible element producer. Operations that
/// cannot observe an element failure use the default, [`Infallible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error<E = Infallible> {
    /// The operation would exceed the fixed capacity (`N`).
    ///
    /// Reported before any mutation, except for sources of unknown length:
    /// [`try_assign_iter`](crate::InplaceVec::try_assign_iter) and
    /// [`assign_iter`](crate::InplaceVec::assign_iter) keep the first `N`
    /// items they already assigned.
    CapacityExceeded,
    /// Constructing an element failed; carries the producer's error.
    ElementOperationFailed(E),
    /// An index or range was outside the live elements `[0, len)`.
    OutOfRange,
    /// The operation requires a non-empty vector (or another state
    /// precondition) that did not hold.
    PreconditionViolation,
}

impl<E> Error<E> {
    /// Maps the element error, leaving the other variants untouched.
    #[inline]
    pub fn map_element<F, O>(self, f: F) -> Error<O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::CapacityExceeded => Error::CapacityExceeded,
            Self::ElementOperationFailed(e) => Error::ElementOperationFailed(f(e)),
            Self::OutOfRange => Error::OutOfRange,
            Self::PreconditionViolation => Error::PreconditionViolation,
        }
    }

    /// Returns the element error, if this is an element failure.
    #[inline]
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::ElementOperationFailed(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` for [`Error::CapacityExceeded`].
    #[inline]
    pub const fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded)
    }
}

impl Error {
    /// Reinterprets an error that cannot carry an element failure as one of
    /// any element error type.
    #[inline]
    pub fn widen<E>(self) -> Error<E> {
        self.map_element(|never| match never {})
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::ElementOperationFailed(e) => write!(f, "element operation failed: {e}"),
            Self::OutOfRange => f.write_str("index out of range"),
            Self::PreconditionViolation => f.write_str("precondition violated"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> CoreError for Error<E> {}

/// Unwraps a result whose error type is uninhabited.
#[inline]
pub(crate) fn into_ok<T>(r: Result<T, Infallible>) -> T {
    match r {
        Ok(v) => v,
        Err(never) => match never {},
    }
}
