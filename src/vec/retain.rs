// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{guard::RollbackGuard, storage::RawStorage, vec::InplaceVec};

// Core imports
use core::ptr;

// A compaction pass in progress: `[0, write)` is kept, `[write, read)` is
// empty and `[read, len)` is not visited yet.
struct Sweep<'s, T, const N: usize> {
    storage: &'s mut RawStorage<T, N>,
    read: usize,
    write: usize,
}

impl<T, const N: usize, S> InplaceVec<T, N, S> {
    /// Retains only the elements specified by the predicate `f`, preserving
    /// order.
    ///
    /// The predicate is applied to each element in order. Rejected elements
    /// are dropped as they are visited.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(&*x));
    }

    /// Like [`retain`](Self::retain), with mutable access to each element.
    ///
    /// If `f` or a destructor panics, the vector keeps the elements already
    /// retained plus every element not visited yet.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let len = self.len();
        // SAFETY: nothing is counted while values move; the sweep republishes
        // the length on every exit path.
        unsafe { self.storage.set_len(0) };

        let mut sweep = RollbackGuard::new(
            Sweep {
                storage: &mut self.storage,
                read: 0,
                write: 0,
            },
            move |s| {
                let rest = len - s.read;
                // SAFETY: `[read, len)` is live and slides onto the hole.
                unsafe {
                    s.storage.copy_within(s.read, s.write, rest);
                    s.storage.set_len(s.write + rest);
                }
            },
        );

        while sweep.read < len {
            let Sweep {
                storage,
                read,
                write,
            } = &mut *sweep;
            let cur = *read;
            // SAFETY: `cur` is live and nothing else refers to it.
            let keep = f(unsafe { &mut *storage.as_mut_ptr().add(cur) });
            *read += 1;
            if keep {
                if *write != cur {
                    // SAFETY: slot `write` is empty, `write < cur`.
                    unsafe { storage.relocate(cur, *write) };
                }
                *write += 1;
            } else {
                // SAFETY: `cur` is live and was just marked visited.
                unsafe { ptr::drop_in_place(storage.as_mut_ptr().add(cur)) };
            }
        }

        sweep.complete();
        let write = sweep.write;
        // SAFETY: `[0, write)` holds the kept values.
        unsafe { sweep.storage.set_len(write) };
    }
}
