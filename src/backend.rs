// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage strategies behind [`InplaceVec`](crate::InplaceVec).
//!
//! Every mutating vector operation validates capacity and indices, then
//! delegates to one of two interchangeable strategies:
//!
//! - [`General`] works for any `T`. It constructs element by element inside a
//!   [`RollbackGuard`](crate::RollbackGuard) + [`Transaction`](crate::Transaction)
//!   pair, so a failing producer or a panicking `clone` leaves the vector in a
//!   documented, invariant-preserving state.
//! - [`Trivial`] requires `T: Copy`. Values need no destruction and copies
//!   cannot fail, so operations collapse to block copies and a single length
//!   update; a failing producer simply never publishes the new length.
//!
//! The two are observably identical. The strategy is a type parameter of the
//! vector, so the choice is made (and the `Copy` bound checked) when the
//! vector type is instantiated.
//!
//! All methods assume the caller already checked capacity and bounds; they
//! only `debug_assert!` them.

mod general;
mod trivial;

pub use general::General;
pub use trivial::Trivial;

// Crate imports
use crate::storage::RawStorage;

// Core imports
use core::{iter, ops::Range};

mod sealed {
    pub trait Sealed {}
}

/// A storage strategy for [`InplaceVec`](crate::InplaceVec).
///
/// Sealed: the only implementors are [`General`] and [`Trivial`].
pub trait Backend<T>: sealed::Sealed {
    /// Appends one element produced by `f`.
    ///
    /// Strong guarantee: if `f` fails the length is unchanged.
    #[inline]
    fn construct_single<const N: usize, E, F>(
        storage: &mut RawStorage<T, N>,
        f: F,
    ) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let len = storage.len();
        debug_assert!(len < N);
        let value = f()?;
        storage.construct_at(len, value);
        // SAFETY: slot `len` was just constructed.
        unsafe { storage.set_len(len + 1) };
        Ok(&mut storage.as_mut_slice()[len])
    }

    /// Appends `n` elements produced by `f`.
    ///
    /// If the k-th production fails, the elements appended before it are
    /// destroyed and the length is back where it started.
    #[inline]
    fn construct_n<const N: usize, E, F>(
        storage: &mut RawStorage<T, N>,
        n: usize,
        f: F,
    ) -> Result<(), E>
    where
        F: FnMut() -> Result<T, E>,
    {
        Self::construct_range(storage, iter::repeat_with(f), n)
    }

    /// Appends up to `n` items of a source of known length `n`.
    ///
    /// Same failure semantics as [`construct_n`](Self::construct_n). A
    /// source that runs dry early gives a shorter append; items past `n` are
    /// not pulled.
    fn construct_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        iter: I,
        n: usize,
    ) -> Result<(), E>
    where
        I: Iterator<Item = Result<T, E>>;

    /// Appends clones of `src`.
    fn append_slice<const N: usize>(storage: &mut RawStorage<T, N>, src: &[T])
    where
        T: Clone;

    /// Replaces the contents with up to `n` items of `iter`.
    ///
    /// The overlapping prefix is assigned in place, then the excess tail is
    /// destroyed or the missing tail constructed. Basic guarantee: a failure
    /// while assigning keeps the length and the already assigned values; a
    /// failure while growing keeps the assigned prefix and destroys the
    /// partially built tail.
    fn assign_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        iter: I,
        n: usize,
    ) -> Result<(), E>
    where
        I: Iterator<Item = Result<T, E>>;

    /// Replaces the contents with clones of `src`.
    fn assign_slice<const N: usize>(storage: &mut RawStorage<T, N>, src: &[T])
    where
        T: Clone;

    /// Relocates the live values in `from` so they start at slot `to`.
    ///
    /// # Safety
    ///
    /// Every slot in `from` must be live, `to + from.len() <= N`, and no
    /// destination slot outside `from` may hold a live value. The length is
    /// not touched; the caller republishes it.
    unsafe fn move_range<const N: usize>(
        storage: &mut RawStorage<T, N>,
        from: Range<usize>,
        to: usize,
    );

    /// Inserts up to `n` items of `iter` before `index` and returns how many
    /// were inserted.
    ///
    /// Strong guarantee: on failure the contents are exactly as before.
    fn insert_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        index: usize,
        iter: I,
        n: usize,
    ) -> Result<usize, E>
    where
        I: Iterator<Item = Result<T, E>>;

    /// Destroys the live values in `range` and closes the hole.
    fn erase_range<const N: usize>(storage: &mut RawStorage<T, N>, range: Range<usize>);

    /// Destroys every live value at or past `new_len`, last to first.
    fn destroy_back<const N: usize>(storage: &mut RawStorage<T, N>, new_len: usize);
}
