//! An iterator adapter that keeps elements accepted by every predicate.

use std::iter::FusedIterator;

use super::PredicateSet;

/// Iterator adapter that yields the elements of `inner` for which every predicate
/// in `predicates` returns `true`.
///
/// Behavior
/// - For each element, predicates are evaluated left to right and evaluation stops
///   at the first rejection.
/// - With an empty predicate set, every element passes.
/// - The upper bound of `size_hint` mirrors the underlying iterator, and the lower
///   bound is 0 because some elements may be filtered out.
#[derive(Debug, Clone)]
pub struct WhereAll<I, S> {
    inner: I,
    predicates: S,
}

impl<I, S> WhereAll<I, S>
where
    I: Iterator,
    S: PredicateSet<I::Item>,
{
    /// Creates a new `WhereAll` iterator.
    pub fn new(inner: I, predicates: S) -> Self {
        WhereAll { inner, predicates }
    }
}

impl<I, S> Iterator for WhereAll<I, S>
where
    I: Iterator,
    S: PredicateSet<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let predicates = &self.predicates;
        self.inner.find(|item| predicates.all(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        if self.predicates.is_empty() {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

impl<I, S> DoubleEndedIterator for WhereAll<I, S>
where
    I: DoubleEndedIterator,
    S: PredicateSet<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let predicates = &self.predicates;
        self.inner.rfind(|item| predicates.all(item))
    }
}

impl<I, S> FusedIterator for WhereAll<I, S>
where
    I: FusedIterator,
    S: PredicateSet<I::Item>,
{
}
