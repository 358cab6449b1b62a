// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::{sealed::Sealed, Backend},
    storage::RawStorage,
};

// Core imports
use core::{ops::Range, ptr};

/// Block-copy strategy for `Copy` element types.
///
/// Copying a `T: Copy` cannot fail and dropping one does nothing, so every
/// operation is a raw copy plus one length update. New elements are written
/// into the spare tail first and the length is published last: a failing
/// producer leaves nothing to roll back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Trivial;

impl Sealed for Trivial {}

impl<T: Copy> Backend<T> for Trivial {
    fn construct_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        iter: I,
        n: usize,
    ) -> Result<(), E>
    where
        I: Iterator<Item = Result<T, E>>,
    {
        let (slots, len) = storage.parts_mut();
        debug_assert!(n <= N - *len);
        let mut end = *len;
        for item in iter.take(n) {
            slots[end].write(item?);
            end += 1;
        }
        *len = end;
        Ok(())
    }

    fn append_slice<const N: usize>(storage: &mut RawStorage<T, N>, src: &[T])
    where
        T: Clone,
    {
        let len = storage.len();
        assert!(src.len() <= N - len, "append past capacity");
        // SAFETY: the destination `[len, len + src.len())` is in bounds and
        // free, and `src` cannot overlap storage we hold `&mut` to.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), storage.as_mut_ptr().add(len), src.len());
            storage.set_len(len + src.len());
        }
    }

    fn assign_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        iter: I,
        n: usize,
    ) -> Result<(), E>
    where
        I: Iterator<Item = Result<T, E>>,
    {
        // Assigning over the live prefix and constructing past it are the
        // same write here; only the final length differs.
        let (slots, len) = storage.parts_mut();
        debug_assert!(n <= N);
        let mut written = 0;
        for item in iter.take(n) {
            slots[written].write(item?);
            written += 1;
        }
        *len = written;
        Ok(())
    }

    fn assign_slice<const N: usize>(storage: &mut RawStorage<T, N>, src: &[T])
    where
        T: Clone,
    {
        assert!(src.len() <= N, "assign past capacity");
        // SAFETY: `src.len() <= N` and every slot it covers becomes live.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), storage.as_mut_ptr(), src.len());
            storage.set_len(src.len());
        }
    }

    #[inline]
    unsafe fn move_range<const N: usize>(
        storage: &mut RawStorage<T, N>,
        from: Range<usize>,
        to: usize,
    ) {
        storage.copy_within(from.start, to, from.len());
    }

    fn insert_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        index: usize,
        iter: I,
        n: usize,
    ) -> Result<usize, E>
    where
        I: Iterator<Item = Result<T, E>>,
    {
        let len = storage.len();
        debug_assert!(index <= len && n <= N - len);

        let slots = storage.slots_mut();
        let mut built = 0;
        for item in iter.take(n) {
            slots[len + built].write(item?);
            built += 1;
        }
        slots[index..len + built].rotate_right(built);
        // SAFETY: `[0, len)` was live and `[len, len + built)` was just
        // written; the rotation permutes within that range.
        unsafe { storage.set_len(len + built) };
        Ok(built)
    }

    fn erase_range<const N: usize>(storage: &mut RawStorage<T, N>, range: Range<usize>) {
        let len = storage.len();
        let Range { start, end } = range;
        debug_assert!(start <= end && end <= len);
        // SAFETY: `[end, len)` is live; `Copy` values need no destruction.
        unsafe {
            storage.copy_within(end, start, len - end);
            storage.set_len(len - (end - start));
        }
    }

    #[inline]
    fn destroy_back<const N: usize>(storage: &mut RawStorage<T, N>, new_len: usize) {
        let len = storage.len();
        // SAFETY: only ever shrinks.
        unsafe { storage.set_len(new_len.min(len)) };
    }
}
