//! Membership tests: does a value equal any of a list of candidates?
//!
//! - [`is_in`] / [`is_in_by`] scan the candidates linearly and stop at the first match.
//! - [`in_set`] / [`in_set_by`] first collect the candidates into a hash-based
//!   [`CandidateSet`], then perform a single lookup. Use [`CandidateSet`] directly
//!   to amortize the construction over several lookups.
//!
//! The `_by` variants take an [`EqualityComparer`] instead of relying on the
//! type's own equality.

use std::{borrow::Borrow, hash::Hash};

pub mod candidate_set;
pub mod comparer;

pub use candidate_set::CandidateSet;
pub use comparer::{DefaultComparer, EqualityComparer, KeyComparer, by_key};

/// Returns `true` if `value` equals any element of `items`.
///
/// ```
/// use seqkit_iter::is_in;
///
/// assert!(is_in(&2, [1, 2, 3]));
/// assert!(!is_in("x", ["a", "b"]));
/// ```
pub fn is_in<T, I>(value: &T, items: I) -> bool
where
    T: PartialEq + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    items
        .into_iter()
        .any(|candidate| Borrow::<T>::borrow(&candidate) == value)
}

/// Returns `true` if `value` equals any element of `items` under `comparer`.
pub fn is_in_by<T, I, C>(value: &T, items: I, comparer: C) -> bool
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    C: EqualityComparer<T>,
{
    items
        .into_iter()
        .any(|candidate| comparer.equals(Borrow::<T>::borrow(&candidate), value))
}

/// Returns `true` if `value` equals any element of `items`, using a hash set of the
/// candidates.
pub fn in_set<'a, T, I>(value: &T, items: I) -> bool
where
    T: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    CandidateSet::new(items).contains(value)
}

/// Returns `true` if `value` equals any element of `items` under `comparer`, using a
/// hash set of the candidates built with that comparer.
pub fn in_set_by<'a, T, I, C>(value: &T, items: I, comparer: C) -> bool
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    C: EqualityComparer<T>,
{
    CandidateSet::with_comparer(items, comparer).contains(value)
}

/// Method forms of the membership tests, available on every value.
///
/// ```
/// use seqkit_iter::InExt;
///
/// let status: u16 = 404;
/// assert!(status.is_in([400, 404, 410]));
/// assert!(!status.in_set(&[200, 204]));
/// ```
pub trait InExt {
    /// See [`is_in`].
    fn is_in<I>(&self, items: I) -> bool
    where
        Self: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        is_in(self, items)
    }

    /// See [`is_in_by`].
    fn is_in_by<I, C>(&self, items: I, comparer: C) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
        C: EqualityComparer<Self>,
    {
        is_in_by(self, items, comparer)
    }

    /// See [`in_set`].
    fn in_set<'a, I>(&self, items: I) -> bool
    where
        Self: Eq + Hash + 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        in_set(self, items)
    }

    /// See [`in_set_by`].
    fn in_set_by<'a, I, C>(&self, items: I, comparer: C) -> bool
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
        C: EqualityComparer<Self>,
    {
        in_set_by(self, items, comparer)
    }
}

impl<T: ?Sized> InExt for T {}
