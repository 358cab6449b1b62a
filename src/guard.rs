// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scope-bound rollback guard.
//!
//! A [`RollbackGuard`] owns a value and a cleanup closure. When the guard is
//! dropped without having been [completed](RollbackGuard::complete), the
//! closure runs exactly once with the guarded value. This covers both an
//! early `return`/`?` and unwinding out of a panic.
//!
//! The guard knows nothing about what it protects; the closure decides what
//! "undo" means (typically "destroy the live suffix back to position X").
//!
//! ```rust
//! use inplace_vec::RollbackGuard;
//!
//! let mut log = Vec::new();
//! {
//!     let mut g = RollbackGuard::new(&mut log, |log| log.push("rolled back"));
//!     g.push("step 1");
//!     // dropped without `complete()`
//! }
//! assert_eq!(log, ["step 1", "rolled back"]);
//! ```

// Core imports
use core::{
    fmt,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
    ptr,
};

/// Runs `rollback(&mut value)` on drop unless [`complete`](Self::complete)
/// was called first.
///
/// The rollback closure must not panic. The guard does not enforce this; a
/// panicking rollback during unwinding aborts the process.
///
/// Moving the guard moves the disarm responsibility with it. It is not
/// `Clone`.
#[must_use = "a guard dropped immediately rolls back at once"]
pub struct RollbackGuard<V, F>
where
    F: FnOnce(&mut V),
{
    value: V,
    // `None` once completed.
    rollback: Option<F>,
}

impl<V, F> RollbackGuard<V, F>
where
    F: FnOnce(&mut V),
{
    /// Arms a guard over `value`.
    #[inline]
    pub fn new(value: V, rollback: F) -> Self {
        Self {
            value,
            rollback: Some(rollback),
        }
    }

    /// Disarms the guard; dropping it afterwards does nothing.
    #[inline]
    pub fn complete(&mut self) {
        self.rollback = None;
    }

    /// Returns `true` once [`complete`](Self::complete) has been called.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.rollback.is_none()
    }

    /// Disarms the guard and returns the guarded value.
    #[inline]
    pub fn into_inner(self) -> V {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so each field is read out exactly
        // once; the unused rollback closure is dropped here.
        unsafe {
            ptr::drop_in_place(&mut this.rollback);
            ptr::read(&this.value)
        }
    }
}

impl<V, F> Deref for RollbackGuard<V, F>
where
    F: FnOnce(&mut V),
{
    type Target = V;

    #[inline]
    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V, F> DerefMut for RollbackGuard<V, F>
where
    F: FnOnce(&mut V),
{
    #[inline]
    fn deref_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V, F> Drop for RollbackGuard<V, F>
where
    F: FnOnce(&mut V),
{
    fn drop(&mut self) {
        if let Some(rollback) = self.rollback.take() {
            rollback(&mut self.value);
        }
    }
}

impl<V: fmt::Debug, F> fmt::Debug for RollbackGuard<V, F>
where
    F: FnOnce(&mut V),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollbackGuard")
            .field("value", &self.value)
            .field("completed", &self.is_completed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RollbackGuard;
    use core::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_rolls_back_once_when_not_completed() {
        let runs = Cell::new(0);
        {
            let _g = RollbackGuard::new((), |_| runs.set(runs.get() + 1));
        }
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_complete_disarms() {
        let runs = Cell::new(0);
        {
            let mut g = RollbackGuard::new((), |_| runs.set(runs.get() + 1));
            assert!(!g.is_completed());
            g.complete();
            assert!(g.is_completed());
        }
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_moved_guard_rolls_back_exactly_once() {
        let runs = Cell::new(0);
        let g = RollbackGuard::new(5, |v| {
            *v += 1;
            runs.set(runs.get() + 1);
        });
        let consume = |g: RollbackGuard<i32, _>| assert_eq!(*g, 5);
        consume(g);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_into_inner_disarms() {
        let runs = Cell::new(0);
        let mut g = RollbackGuard::new(alloc::vec![1, 2], |_| runs.set(runs.get() + 1));
        g.push(3);
        assert_eq!(g.into_inner(), [1, 2, 3]);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_rollback_sees_mutations_through_deref() {
        let mut seen = 0;
        {
            let mut g = RollbackGuard::new(0u32, |v| seen = *v);
            *g += 3;
            *g += 4;
        }
        assert_eq!(seen, 7);
    }

    #[test]
    fn test_rolls_back_during_unwinding() {
        let runs = Cell::new(0);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _g = RollbackGuard::new((), |_| runs.set(runs.get() + 1));
            panic!("step failed");
        }));
        assert!(result.is_err());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_early_return_rolls_back() {
        fn steps(fail_at: u32, log: &mut alloc::vec::Vec<u32>) -> Result<(), u32> {
            let mut g = RollbackGuard::new(log, |log| log.clear());
            for step in 0..3 {
                if step == fail_at {
                    return Err(step);
                }
                g.push(step);
            }
            g.complete();
            Ok(())
        }

        let mut log = alloc::vec::Vec::new();
        assert_eq!(steps(2, &mut log), Err(2));
        assert!(log.is_empty());
        assert_eq!(steps(9, &mut log), Ok(()));
        assert_eq!(log, [0, 1, 2]);
    }
}
