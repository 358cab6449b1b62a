// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw storage block and the element lifecycle primitives.
//!
//! Invariants:
//! - `0 <= len <= N` always holds.
//! - Slots in `slots[..len]` hold initialized `T` values.
//! - Slots in `slots[len..N]` are logically uninitialized and must never be
//!   read, dropped, or assumed to hold a value.

// Core imports
use core::{mem::MaybeUninit, ptr, slice};

/// A fixed block of `N` slots plus the logical end of the live prefix.
///
/// Dropping the block drops the live prefix and nothing else.
///
/// Public only because it appears in [`Backend`](crate::Backend) method
/// signatures; it has no public methods and cannot be built outside the
/// crate.
pub struct RawStorage<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> RawStorage<T, N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Forces the logical length.
    ///
    /// # Safety
    ///
    /// `len <= N`, and every slot in `[0, len)` must hold a live value.
    #[inline]
    pub(crate) unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= N, "length {len} exceeds capacity {N}");
        self.len = len;
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `slots[..len]` is initialized and `len <= N`.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: by invariant `slots[..len]` is initialized and `len <= N`;
        // `&mut self` gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }

    /// All `N` slots, live or not.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>; N] {
        &mut self.slots
    }

    /// Splits into the slot array and the end cursor, so a
    /// [`Transaction`](crate::Transaction) can own the cursor while slots are
    /// being written.
    #[inline]
    pub(crate) fn parts_mut(&mut self) -> (&mut [MaybeUninit<T>; N], &mut usize) {
        (&mut self.slots, &mut self.len)
    }

    /// Constructs `value` in slot `index` and returns a reference to it.
    ///
    /// The slot must not hold a live value (it would be leaked, not dropped).
    #[inline]
    pub(crate) fn construct_at(&mut self, index: usize, value: T) -> &mut T {
        self.slots[index].write(value)
    }

    /// Moves the value in slot `from` into slot `to`.
    ///
    /// # Safety
    ///
    /// `from` must hold a live value and `to` must not. Afterwards `from` is
    /// logically uninitialized.
    #[inline]
    pub(crate) unsafe fn relocate(&mut self, from: usize, to: usize) {
        let value = self.slots[from].assume_init_read();
        self.slots[to].write(value);
    }

    /// Moves `count` values starting at slot `from` to start at slot `to`
    /// with one overlapping block copy.
    ///
    /// # Safety
    ///
    /// `[from, from + count)` must be live, both ranges must be in bounds,
    /// and destination slots outside the source range must not hold live
    /// values.
    #[inline]
    pub(crate) unsafe fn copy_within(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(from + count <= N && to + count <= N);
        let base = self.slots.as_mut_ptr();
        ptr::copy(base.add(from), base.add(to), count);
    }

    /// Reads the value out of slot `index`, leaving the slot uninitialized.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value that is no longer counted by `len`.
    #[inline]
    pub(crate) unsafe fn take_at(&mut self, index: usize) -> T {
        self.slots[index].assume_init_read()
    }

    /// Destroys every live value in `[new_len, len)`, last to first, and
    /// sets `len = new_len`. A no-op when `new_len >= len`.
    pub(crate) fn destroy_back(&mut self, new_len: usize) {
        let old_len = self.len;
        if new_len >= old_len {
            return;
        }
        // Shrink first: a panicking destructor leaks the rest instead of
        // exposing dropped slots.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` was live and is no longer counted.
        unsafe { destroy_reverse(&mut self.slots[new_len..old_len]) }
    }
}

impl<T, const N: usize> Drop for RawStorage<T, N> {
    fn drop(&mut self) {
        self.destroy_back(0);
    }
}

/// Drops every slot of `slots`, last to first.
///
/// # Safety
///
/// Every slot must hold a live value, and none of them may be used again.
pub(crate) unsafe fn destroy_reverse<T>(slots: &mut [MaybeUninit<T>]) {
    for slot in slots.iter_mut().rev() {
        slot.assume_init_drop();
    }
}
