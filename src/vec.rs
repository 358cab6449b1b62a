// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `InplaceVec` type and its inherent API.
//!
//! `InplaceVec<T, N, S>` stores up to `N` elements inline and tracks a logical
//! length. Methods mirror slice/`Vec` semantics where they make sense, with
//! explicit capacity checks and fallible variants where an element producer
//! can fail. The operation bodies live in one file per family under `vec/`.
//!
//! No heap allocations are performed.

mod access;
mod assign;
mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod split_off;

pub use drain::Drain;

// Crate imports
use crate::{
    backend::{Backend, General, Trivial},
    error::Error,
    storage::RawStorage,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Bound, Deref, DerefMut, Range, RangeBounds},
    ptr,
};

/// A fixed-capacity vector whose elements live inline in the value itself.
///
/// `InplaceVec<T, N, S>` owns a block of `N` slots and a logical length
/// `len ∈ 0..=N`. Only the prefix `[0, len)` holds live values; it is the
/// only part visible through [`as_slice`](Self::as_slice), indexing and
/// iteration. Slots past `len` are never read or dropped.
///
/// `S` picks the storage strategy:
///
/// - [`General`] (the default) works for any `T`;
/// - [`Trivial`] requires `T: Copy` and does block copies. Use the
///   [`CopyInplaceVec`] alias.
///
/// Both strategies are observably identical.
///
/// # Failure model
///
/// Capacity and index checks run before anything is touched, so
/// [`Error::CapacityExceeded`], [`Error::OutOfRange`] and
/// [`Error::PreconditionViolation`] leave the vector unchanged, except that
/// [`assign_iter`](Self::assign_iter) over a too-long source of unknown length
/// keeps the first `N` items.
///
/// Element construction can fail in two ways: a fallible producer (the
/// `try_*` methods, which take closures or iterators yielding `Result`)
/// returns [`Error::ElementOperationFailed`], and a `Clone` impl can panic.
/// Both are handled by the same drop-based rollback, so the vector is left in
/// the state each method documents:
///
/// | Guarantee | Operations |
/// |---|---|
/// | strong (unchanged on failure) | `push*`, `insert*`, `resize*` (growing), `extend_from_slice`, `try_extend_from_iter`, `clone` |
/// | basic (valid, contents documented) | `assign*`, `clone_from` |
/// | cannot fail | `pop`, `remove`, `erase*`, `truncate`, `clear`, `retain` (unless the predicate panics) |
///
/// # Moves
///
/// Moving an `InplaceVec` moves the whole `N`-slot block, not just the live
/// prefix. Pass it by reference in hot code.
///
/// # Examples
///
/// ```rust
/// use inplace_vec::{Error, InplaceVec};
///
/// let mut v: InplaceVec<String, 3> = InplaceVec::new();
/// v.push("a".into()).unwrap();
/// v.insert(0, "b".into()).unwrap();
/// assert_eq!(v, ["b", "a"]);
///
/// v.push("c".into()).unwrap();
/// assert_eq!(v.push("d".into()), Err(Error::CapacityExceeded));
/// assert_eq!(v.len(), 3);
/// ```
pub struct InplaceVec<T, const N: usize, S = General> {
    pub(crate) storage: RawStorage<T, N>,
    pub(crate) strategy: PhantomData<S>,
}

/// An [`InplaceVec`] using the block-copy [`Trivial`] strategy.
pub type CopyInplaceVec<T, const N: usize> = InplaceVec<T, N, Trivial>;

impl<T, const N: usize, S> InplaceVec<T, N, S> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length this vector can reach (always `N`).
    #[inline]
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len() == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len()
    }

    /// Checks that the vector could hold `n` elements.
    ///
    /// Storage is fixed, so this only validates: [`Error::CapacityExceeded`]
    /// if `n > N`.
    #[inline]
    pub const fn reserve(&self, n: usize) -> Result<(), Error> {
        if n > N {
            Err(Error::CapacityExceeded)
        } else {
            Ok(())
        }
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the vector contains `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize, S: Backend<T>> InplaceVec<T, N, S> {
    /// Destroys every element, last to first. Idempotent.
    #[inline]
    pub fn clear(&mut self) {
        S::destroy_back(&mut self.storage, 0);
    }

    /// Destroys the elements past `new_len`, last to first. A no-op when
    /// `new_len >= len`.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        S::destroy_back(&mut self.storage, new_len);
    }

    /// Moves the live elements of `start..end` into a fresh vector and closes
    /// the hole. The caller has checked `start <= end <= len`.
    pub(crate) fn take_range(&mut self, start: usize, end: usize) -> Self {
        let len = self.len();
        debug_assert!(start <= end && end <= len);
        let count = end - start;
        let mut out = Self::new();
        // SAFETY: `[start, end)` is live. The length drops to `start` before
        // the values are copied out, so each value is owned by exactly one
        // vector at every point; then the tail `[end, len)` slides onto
        // `start`.
        unsafe {
            self.storage.set_len(start);
            ptr::copy_nonoverlapping(
                self.storage.as_ptr().add(start),
                out.storage.as_mut_ptr(),
                count,
            );
            out.storage.set_len(count);
            S::move_range(&mut self.storage, end..len, start);
            self.storage.set_len(len - count);
        }
        out
    }
}

/// Resolves `range` against `len`. `None` for an inverted or out-of-bounds
/// range.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> Option<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1)?,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start <= end && end <= len).then_some(start..end)
}

/// The exact length of `iter` when its size hint pins it down.
#[inline]
pub(crate) fn known_len<I: Iterator>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lo, Some(hi)) if lo == hi => Some(lo),
        _ => None,
    }
}

impl<T: fmt::Debug, const N: usize, S> fmt::Debug for InplaceVec<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InplaceVec")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, U, const N: usize, const M: usize, S, R> PartialEq<InplaceVec<U, M, R>>
    for InplaceVec<T, N, S>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &InplaceVec<U, M, R>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U, const N: usize, S> PartialEq<[U]> for InplaceVec<T, N, S> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U, const N: usize, S> PartialEq<&[U]> for InplaceVec<T, N, S> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U, const N: usize, const M: usize, S> PartialEq<[U; M]>
    for InplaceVec<T, N, S>
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, const N: usize, S> Eq for InplaceVec<T, N, S> {}
impl<T: Ord, const N: usize, S> Ord for InplaceVec<T, N, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize, S> PartialOrd for InplaceVec<T, N, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize, S> Hash for InplaceVec<T, N, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

/// Strong: a panicking `T::clone` drops the partial copy and leaves `self`
/// untouched. `clone_from` reuses the target's elements through
/// [`assign_from_slice`](InplaceVec::assign_from_slice) and is basic.
impl<T: Clone, const N: usize, S: Backend<T>> Clone for InplaceVec<T, N, S> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        S::append_slice(&mut out.storage, self.as_slice());
        out
    }

    fn clone_from(&mut self, source: &Self) {
        S::assign_slice(&mut self.storage, source.as_slice());
    }
}

impl<T, const N: usize, S> Deref for InplaceVec<T, N, S> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize, S> DerefMut for InplaceVec<T, N, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize, S> AsRef<[T]> for InplaceVec<T, N, S> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, S> AsMut<[T]> for InplaceVec<T, N, S> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize, S> Borrow<[T]> for InplaceVec<T, N, S> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, S> BorrowMut<[T]> for InplaceVec<T, N, S> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}


#[cfg(test)]
mod proptests {
    // Imports
    use super::{CopyInplaceVec, InplaceVec};
    use crate::Error;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const CAP: usize = 8;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
        Insert(usize, i32),
        InsertIter(usize, Vec<i32>),
        Remove(usize, bool),
        Truncate(usize),
        Resize(usize, i32),
        Extend(Vec<i32>),
        RetainEven,
        Drain(usize, usize),
        // `true` hides the length behind a filter.
        Assign(Vec<i32>, bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        let items = || proptest::collection::vec(-50i32..50, 0..6);
        let growing = prop_oneof![
            any::<i32>().prop_map(Op::Push),
            (0..CAP + 2, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
            (0..CAP + 2, items()).prop_map(|(i, xs)| Op::InsertIter(i, xs)),
            (0..CAP + 3, any::<i32>()).prop_map(|(n, x)| Op::Resize(n, x)),
            items().prop_map(Op::Extend),
            (proptest::collection::vec(-50i32..50, 0..CAP + 3), any::<bool>())
                .prop_map(|(xs, filtered)| Op::Assign(xs, filtered)),
        ];
        let shrinking = prop_oneof![
            Just(Op::Pop),
            (0..CAP + 2, any::<bool>()).prop_map(|(i, swap)| Op::Remove(i, swap)),
            (0..CAP + 2).prop_map(Op::Truncate),
            Just(Op::RetainEven),
            (0..CAP + 1, 0..CAP + 1).prop_map(|(a, b)| Op::Drain(a, b)),
        ];
        prop_oneof![growing, shrinking]
    }

    // Applies `op` to both the vector and a `Vec` model bounded by `CAP`.
    macro_rules! apply {
        ($v:expr, $model:expr, $op:expr) => {{
            let v = &mut $v;
            let model: &mut Vec<i32> = &mut $model;
            match $op {
                Op::Push(x) => {
                    let res = v.push(x);
                    if model.len() < CAP {
                        prop_assert_eq!(res, Ok(()));
                        model.push(x);
                    } else {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    }
                }
                Op::Pop => prop_assert_eq!(v.pop(), model.pop()),
                Op::Insert(i, x) => {
                    let res = v.insert(i, x).map(|r| *r);
                    if i > model.len() {
                        prop_assert_eq!(res, Err(Error::OutOfRange));
                    } else if model.len() == CAP {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    } else {
                        prop_assert_eq!(res, Ok(x));
                        model.insert(i, x);
                    }
                }
                Op::InsertIter(i, xs) => {
                    // A filtered source has no exact size hint.
                    let res = v.insert_iter(i, xs.iter().copied().filter(|_| true));
                    if i > model.len() {
                        prop_assert_eq!(res, Err(Error::OutOfRange));
                    } else if model.len() + xs.len() > CAP {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    } else {
                        prop_assert_eq!(res, Ok(xs.len()));
                        model.splice(i..i, xs.iter().copied());
                    }
                }
                Op::Remove(i, false) => {
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(v.remove(i), expected);
                }
                Op::Remove(i, true) => {
                    let expected = (i < model.len()).then(|| model.swap_remove(i));
                    prop_assert_eq!(v.swap_remove(i), expected);
                }
                Op::Truncate(n) => {
                    v.truncate(n);
                    model.truncate(n);
                }
                Op::Resize(n, x) => {
                    let res = v.resize(n, x);
                    if n > CAP {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        model.resize(n, x);
                    }
                }
                Op::Extend(xs) => {
                    v.extend(xs.iter().copied());
                    let room = CAP - model.len();
                    model.extend(xs.iter().copied().take(room));
                }
                Op::RetainEven => {
                    v.retain(|x| x % 2 == 0);
                    model.retain(|x| x % 2 == 0);
                }
                Op::Assign(xs, false) => {
                    let res = v.assign_iter(xs.iter().copied());
                    if xs.len() > CAP {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        *model = xs;
                    }
                }
                Op::Assign(xs, true) => {
                    let res = v.assign_iter(xs.iter().copied().filter(|_| true));
                    if xs.len() > CAP {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                    }
                    *model = xs.into_iter().take(CAP).collect();
                }
                Op::Drain(a, b) => {
                    let len = model.len();
                    let start = a.min(len);
                    let end = b.clamp(start, len);
                    let drained: Vec<i32> = v.drain(start..end).collect();
                    let expected: Vec<i32> = model.drain(start..end).collect();
                    prop_assert_eq!(drained, expected);
                }
            }
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert!(v.len() <= CAP);
        }};
    }

    proptest! {
        #[test]
        fn general_matches_vec_model(ops in proptest::collection::vec(op(), 1..40)) {
            let mut v: InplaceVec<i32, CAP> = InplaceVec::new();
            let mut model = Vec::new();
            for op in ops {
                apply!(v, model, op);
            }
        }

        #[test]
        fn trivial_matches_vec_model(ops in proptest::collection::vec(op(), 1..40)) {
            let mut v: CopyInplaceVec<i32, CAP> = CopyInplaceVec::new();
            let mut model = Vec::new();
            for op in ops {
                apply!(v, model, op);
            }
        }

        #[test]
        fn strategies_agree_on_split_off(
            items in proptest::collection::vec(any::<i32>(), 0..=CAP),
            at in 0..CAP + 2,
        ) {
            let mut g: InplaceVec<i32, CAP> = InplaceVec::from_slice_truncated(&items);
            let mut t: CopyInplaceVec<i32, CAP> = CopyInplaceVec::from_slice_truncated(&items);
            let (rg, rt) = (g.split_off(at), t.split_off(at));
            prop_assert_eq!(rg.is_ok(), at <= items.len());
            match (rg, rt) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                _ => prop_assert!(false, "strategies disagree"),
            }
            prop_assert_eq!(g, t);
        }
    }
}
