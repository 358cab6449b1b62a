// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only lifecycle tracking and fault injection.
//!
//! A [`Tracker`] hands out [`Tracked`] values and counts how many were
//! constructed and dropped, so tests can assert "no leak, no double drop".
//! Faults come in two shapes, matching how element failures reach the
//! vector:
//! - [`Tracker::try_make`] / [`Tracked::try_clone`] return `Err(Poisoned)`;
//! - [`Clone::clone`] panics on the same condition.
//!
//! A value equal to [`POISON`] always fails to be copied; [`Tracker::fail_at`]
//! makes the k-th construction attempt from now fail regardless of value.

// Imports
use alloc::{rc::Rc, vec::Vec};
use core::{
    cell::{Cell, RefCell},
    fmt,
};

/// Copying a value equal to this always fails.
pub(crate) const POISON: i32 = -1;

/// The error a failed construction reports: the value that was being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Poisoned(pub(crate) i32);

impl fmt::Display for Poisoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "poisoned value {}", self.0)
    }
}

#[derive(Default)]
struct Counters {
    constructed: Cell<usize>,
    dropped: Cell<usize>,
    fail_in: Cell<Option<usize>>,
    drops: RefCell<Vec<i32>>,
}

impl Counters {
    fn attempt(&self, value: i32) -> Result<(), Poisoned> {
        if value == POISON {
            return Err(Poisoned(value));
        }
        match self.fail_in.get() {
            Some(0) => {
                self.fail_in.set(None);
                Err(Poisoned(value))
            }
            Some(k) => {
                self.fail_in.set(Some(k - 1));
                Ok(())
            }
            None => Ok(()),
        }
    }
}

/// Lifecycle counters shared by every [`Tracked`] it made.
#[derive(Clone, Default)]
pub(crate) struct Tracker {
    counters: Rc<Counters>,
}

impl Tracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds a value unconditionally (fixture setup).
    pub(crate) fn make(&self, value: i32) -> Tracked {
        self.counters
            .constructed
            .set(self.counters.constructed.get() + 1);
        Tracked {
            value,
            counters: Rc::clone(&self.counters),
        }
    }

    pub(crate) fn make_all(&self, values: &[i32]) -> Vec<Tracked> {
        values.iter().map(|&v| self.make(v)).collect()
    }

    /// Builds a value, honoring [`POISON`] and [`fail_at`](Self::fail_at).
    pub(crate) fn try_make(&self, value: i32) -> Result<Tracked, Poisoned> {
        self.counters.attempt(value)?;
        Ok(self.make(value))
    }

    /// The `k`-th construction attempt from now (0-based) fails.
    pub(crate) fn fail_at(&self, k: usize) {
        self.counters.fail_in.set(Some(k));
    }

    pub(crate) fn constructed(&self) -> usize {
        self.counters.constructed.get()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.counters.dropped.get()
    }

    pub(crate) fn alive(&self) -> usize {
        self.constructed() - self.dropped()
    }

    /// Values in the order they were dropped.
    pub(crate) fn drop_order(&self) -> Vec<i32> {
        self.counters.drops.borrow().clone()
    }
}

/// An `i32` that reports its construction and destruction to a [`Tracker`].
pub(crate) struct Tracked {
    value: i32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub(crate) fn value(&self) -> i32 {
        self.value
    }

    pub(crate) fn try_clone(&self) -> Result<Self, Poisoned> {
        self.counters.attempt(self.value)?;
        self.counters
            .constructed
            .set(self.counters.constructed.get() + 1);
        Ok(Self {
            value: self.value,
            counters: Rc::clone(&self.counters),
        })
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(t) => t,
            Err(p) => panic!("clone failed: {p}"),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.dropped.set(self.counters.dropped.get() + 1);
        self.counters.drops.borrow_mut().push(self.value);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// The plain values of a slice of tracked elements.
pub(crate) fn values(items: &[Tracked]) -> Vec<i32> {
    items.iter().map(Tracked::value).collect()
}

#[cfg(test)]
mod tests {
    use super::{Poisoned, Tracker, POISON};

    #[test]
    fn test_counts_and_fault_plan() {
        let t = Tracker::new();
        let a = t.make(1);
        assert_eq!(t.alive(), 1);

        t.fail_at(1);
        let b = a.try_clone().unwrap();
        assert_eq!(a.try_clone().unwrap_err(), Poisoned(1));
        // The plan fires once.
        let c = t.try_make(2).unwrap();
        assert_eq!(t.try_make(POISON).unwrap_err(), Poisoned(POISON));

        drop((a, b, c));
        assert_eq!(t.alive(), 0);
        assert_eq!(t.constructed(), 3);
        assert_eq!(t.drop_order(), [1, 1, 2]);
    }
}
