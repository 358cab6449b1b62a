// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inplace-vec`
//!
//! A `no_std`, fixed-capacity vector whose elements live inside the vector
//! value itself, for **any** element type, with documented behavior when an
//! element constructor fails halfway through a bulk operation.
//!
//! The core type, [`InplaceVec<T, N>`], owns a block of `N` slots and tracks
//! a logical length `len ∈ 0..=N`. Only the prefix `[0, len)` holds live
//! values. No heap allocation is ever performed.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std` or embedded environment, or on a hot path that
//!   must not allocate.
//! - You know the maximum length at compile time.
//! - Elements may own resources (strings, handles, boxed data) and you need
//!   to know exactly which of them are alive after a failure.
//!
//! It may not be the best fit if you need large capacities or pass the
//! vector by value a lot: moving an `InplaceVec` moves all `N` slots.
//!
//! ## Strategies
//!
//! The third type parameter picks how elements are built, moved and
//! destroyed:
//!
//! - [`General`] (default): element by element, under a [`RollbackGuard`]
//!   and a [`Transaction`]. Works for any `T`.
//! - [`Trivial`]: block copies for `T: Copy`, with the length published
//!   last. Available as [`CopyInplaceVec<T, N>`].
//!
//! Both give the same observable results; the choice is a performance one.
//!
//! ## Failure model
//!
//! - Capacity, range and precondition checks run **before** any mutation and
//!   return [`Error::CapacityExceeded`], [`Error::OutOfRange`] or
//!   [`Error::PreconditionViolation`] with the vector unchanged. The one
//!   exception is assigning from a source of unknown length that turns out
//!   too long: the first `N` items stay assigned.
//! - Element failures come from a fallible producer (closures and iterators
//!   yielding `Result`, in the `try_*` methods) as
//!   [`Error::ElementOperationFailed`], or from a panicking `Clone`. Both run
//!   the same drop-based rollback: the partially built batch is destroyed,
//!   last to first, and the length is consistent again before the error or
//!   the panic leaves the method.
//! - Every method documents whether it gives the strong guarantee (unchanged
//!   on failure) or the basic one (valid, documented contents).
//!
//! Only indexing and [`InplaceVec::drain`] panic on a bad index or range,
//! like slices and `Vec`.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `InplaceVec<T, N, S>`.
//!
//! ## Example
//!
//! ```rust
//! use inplace_vec::{inplace_vec, Error, InplaceVec};
//!
//! let mut v: InplaceVec<String, 8> = inplace_vec!["a".into(), "b".into()];
//! v.insert(1, "x".into()).unwrap();
//! assert_eq!(v, ["a", "x", "b"]);
//!
//! // A producer failing halfway leaves the vector as it was.
//! let parsed = ["1", "oops"].map(|s| s.parse::<u8>().map(|n| n.to_string()));
//! let err = v.try_insert_iter(0, parsed).unwrap_err();
//! assert!(matches!(err, Error::ElementOperationFailed(_)));
//! assert_eq!(v, ["a", "x", "b"]);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod backend;
mod error;
mod guard;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod storage;
#[cfg(test)]
mod testing;
mod transaction;
mod vec;

// Public exports (crate API surface)
pub use backend::{Backend, General, Trivial};
pub use error::Error;
pub use guard::RollbackGuard;
pub use iter::IntoIter;
pub use storage::RawStorage;
pub use transaction::Transaction;
pub use vec::{CopyInplaceVec, Drain, InplaceVec};

/// Builds an [`InplaceVec`] from a list of elements.
///
/// The capacity comes from the target type; a list longer than the capacity
/// is a compile-time error.
///
/// ```rust
/// use inplace_vec::{inplace_vec, CopyInplaceVec};
///
/// let v: CopyInplaceVec<u8, 8> = inplace_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! inplace_vec {
    () => {
        $crate::InplaceVec::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::InplaceVec::from_array([$($x),+])
    };
}
