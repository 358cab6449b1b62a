// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    backend::{sealed::Sealed, Backend},
    error::into_ok,
    guard::RollbackGuard,
    storage::{destroy_reverse, RawStorage},
    transaction::Transaction,
};

// Core imports
use core::{convert::Infallible, ops::Range};

/// Per-element strategy for arbitrary element types.
///
/// Batch construction runs under a [`Transaction`] inside a
/// [`RollbackGuard`]; the transaction publishes each constructed element and
/// the guard destroys the published part if the batch does not finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct General;

impl Sealed for General {}

// The state a gap-filling insert guards: the storage with `[index, index + n)`
// open, and how far the gap has been filled.
struct Gap<'s, T, const N: usize> {
    storage: &'s mut RawStorage<T, N>,
    filled: usize,
}

impl<T> Backend<T> for General {
    fn construct_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        iter: I,
        n: usize,
    ) -> Result<(), E>
    where
        I: Iterator<Item = Result<T, E>>,
    {
        let original = storage.len();
        debug_assert!(n <= N - original);

        let mut guard = RollbackGuard::new(storage, move |s| s.destroy_back(original));
        {
            let (slots, len) = guard.parts_mut();
            let mut tx = Transaction::with_count(len, n);
            for item in iter.take(n) {
                let value = item?;
                slots[tx.position()].write(value);
                tx.commit(1);
            }
        }
        guard.complete();
        Ok(())
    }

    fn append_slice<const N: usize>(storage: &mut RawStorage<T, N>, src: &[T])
    where
        T: Clone,
    {
        into_ok(Self::construct_range(
            storage,
            src.iter().cloned().map(Ok::<T, Infallible>),
            src.len(),
        ))
    }

    fn assign_range<const N: usize, E, I>(
        storage: &mut RawStorage<T, N>,
        mut iter: I,
        n: usize,
    ) -> Result<(), E>
    where
        I: Iterator<Item = Result<T, E>>,
    {
        let len = storage.len();
        let overlap = len.min(n);

        let mut assigned = 0;
        for slot in &mut storage.as_mut_slice()[..overlap] {
            match iter.next() {
                Some(item) => *slot = item?,
                None => break,
            }
            assigned += 1;
        }

        if assigned < overlap {
            // The source ran dry inside the live prefix.
            storage.destroy_back(assigned);
            Ok(())
        } else if n <= len {
            storage.destroy_back(n);
            Ok(())
        } else {
            Self::construct_range(storage, iter, n - len)
        }
    }

    fn assign_slice<const N: usize>(storage: &mut RawStorage<T, N>, src: &[T])
    where
        T: Clone,
    {
        let len = storage.len();
        let overlap = len.min(src.len());
        for (dst, value) in storage.as_mut_slice()[..overlap].iter_mut().zip(src) {
            dst.clone_from(value);
        }
        if src.len() <= len {
            storage.destroy_back(src.len());
        } else {
            Self::append_slice(storage, &src[len..]);
        }
    }

    unsafe fn move_range<const N: usize>(
        storage: &mut RawStorage<T, N>,
        from: Range<usize>,
        to: usize,
    ) {
        let count = from.len();
        if to > from.start {
            // Shifting right: the last value moves first.
            for i in (0..count).rev() {
                storage.relocate(from.start + i, to + i);
            }
        } else {
            for i in 0..count {
                storage.relocate(from.start + i, to + i);
            }
        }
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
        if n == 0 {
            return Ok(0);
        }

        // Open the gap `[index, index + n)`. While it is open only the
        // prefix `[0, index)` is counted as live.
        // SAFETY: `[index, len)` is live and `len + n <= N`; the destination
        // slots past `len` are free.
        unsafe {
            storage.set_len(index);
            Self::move_range(storage, index..len, index + n);
        }

        let mut gap = RollbackGuard::new(
            Gap {
                storage,
                filled: index,
            },
            move |gap| {
                // SAFETY: `[index, filled)` holds the values constructed so
                // far and the shifted tail sits at `[index + n, len + n)`.
                unsafe {
                    destroy_reverse(&mut gap.storage.slots_mut()[index..gap.filled]);
                    Self::move_range(&mut *gap.storage, index + n..len + n, index);
                    gap.storage.set_len(len);
                }
            },
        );
        {
            let Gap { storage, filled } = &mut *gap;
            let mut tx = Transaction::with_count(filled, n);
            for item in iter.take(n) {
                let value = item?;
                storage.construct_at(tx.position(), value);
                tx.commit(1);
            }
        }
        gap.complete();

        let Gap { storage, filled } = &mut *gap;
        let inserted = *filled - index;
        // SAFETY: `[0, filled)` is live; a short source leaves the gap
        // partly open, so the tail is pulled back onto `filled`.
        unsafe {
            if inserted < n {
                Self::move_range(&mut **storage, index + n..len + n, *filled);
            }
            storage.set_len(len + inserted);
        }
        Ok(inserted)
    }

    fn erase_range<const N: usize>(storage: &mut RawStorage<T, N>, range: Range<usize>) {
        let len = storage.len();
        let Range { start, end } = range;
        debug_assert!(start <= end && end <= len);
        if start == end {
            return;
        }
        // SAFETY: `[start, end)` is live and uncounted once the length drops
        // to `start`; after it is destroyed, `[end, len)` moves onto it.
        unsafe {
            storage.set_len(start);
            destroy_reverse(&mut storage.slots_mut()[start..end]);
            Self::move_range(storage, end..len, start);
            storage.set_len(len - (end - start));
        }
    }

    #[inline]
    fn destroy_back<const N: usize>(storage: &mut RawStorage<T, N>, new_len: usize) {
        storage.destroy_back(new_len);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::General;
    use crate::{
        backend::Backend,
        storage::RawStorage,
        testing::{values, Poisoned, Tracked, Tracker},
    };
    use core::convert::Infallible;

    fn filled(tracker: &Tracker, items: &[i32]) -> RawStorage<Tracked, 8> {
        let mut s = RawStorage::new();
        let source = tracker.make_all(items).into_iter().map(Ok::<_, Infallible>);
        General::construct_range(&mut s, source, items.len()).unwrap();
        s
    }

    #[test]
    fn test_construct_range_failure_destroys_published_prefix() {
        let tracker = Tracker::new();
        let mut s = filled(&tracker, &[9]);
        let before = tracker.alive();

        let items = [1, 2, 3, 4, 5].map(|v| tracker.try_make(v));
        // Third item fails.
        let source = items.into_iter().enumerate().map(|(i, r)| {
            if i == 2 {
                Err(Poisoned(3))
            } else {
                r
            }
        });
        let err = General::construct_range(&mut s, source, 5).unwrap_err();

        assert_eq!(err, Poisoned(3));
        assert_eq!(values(s.as_slice()), [9]);
        // Items 0 and 1 were constructed into the block and destroyed again,
        // the rest were dropped with the source.
        assert_eq!(tracker.alive(), before);
    }

    #[test]
    fn test_move_range_both_directions() {
        let mut s: RawStorage<u32, 6> = RawStorage::new();
        General::append_slice(&mut s, &[1, 2, 3]);
        unsafe {
            General::move_range(&mut s, 0..3, 2);
            s.construct_at(0, 10);
            s.construct_at(1, 11);
            s.set_len(5);
        }
        assert_eq!(s.as_slice(), &[10, 11, 1, 2, 3]);

        unsafe {
            s.set_len(1);
            let _ = s.take_at(1);
            General::move_range(&mut s, 2..5, 1);
            s.set_len(4);
        }
        assert_eq!(s.as_slice(), &[10, 1, 2, 3]);
    }

    #[test]
    fn test_insert_range_rollback_restores_contents() {
        let tracker = Tracker::new();
        let mut s = filled(&tracker, &[1, 2, 3, 4]);
        let before = tracker.alive();

        tracker.fail_at(1);
        let source = [7, 8, 9].into_iter().map(|v| tracker.try_make(v));
        let err = General::insert_range(&mut s, 1, source, 3).unwrap_err();
        assert_eq!(err, Poisoned(8));
        assert_eq!(values(s.as_slice()), [1, 2, 3, 4]);
        assert_eq!(tracker.alive(), before);
    }

    #[test]
    fn test_insert_range_short_source_closes_gap() {
        let mut s: RawStorage<u8, 8> = RawStorage::new();
        General::append_slice(&mut s, &[1, 2, 3]);
        let source = [7u8].into_iter().map(Ok::<_, Infallible>);
        let inserted = General::insert_range(&mut s, 1, source, 3).unwrap();
        assert_eq!(inserted, 1);
        assert_eq!(s.as_slice(), &[1, 7, 2, 3]);
    }

    #[test]
    fn test_assign_range_shrink_grow_and_short() {
        let tracker = Tracker::new();
        let mut s = filled(&tracker, &[1, 2, 3]);

        General::assign_slice(&mut s, &tracker.make_all(&[4, 5]));
        assert_eq!(values(s.as_slice()), [4, 5]);

        General::assign_slice(&mut s, &tracker.make_all(&[6, 7, 8, 9]));
        assert_eq!(values(s.as_slice()), [6, 7, 8, 9]);

        // Declared 4, yields 2.
        let source = [1, 2].into_iter().map(|v| tracker.try_make(v));
        General::assign_range(&mut s, source, 4).unwrap();
        assert_eq!(values(s.as_slice()), [1, 2]);

        drop(s);
        assert_eq!(tracker.alive(), 0);
    }

    #[test]
    fn test_erase_range_drops_exactly_the_range() {
        let tracker = Tracker::new();
        let mut s = filled(&tracker, &[1, 2, 3, 4, 5]);
        General::erase_range(&mut s, 1..3);
        assert_eq!(values(s.as_slice()), [1, 4, 5]);
        assert_eq!(tracker.drop_order(), [3, 2]);
        General::erase_range(&mut s, 3..3);
        assert_eq!(s.len(), 3);
    }
}
