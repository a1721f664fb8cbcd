//! An iterator adapter that keeps elements accepted by at least one predicate.

use std::iter::FusedIterator;

use super::PredicateSet;

/// Iterator adapter that yields the elements of `inner` for which at least one
/// predicate in `predicates` returns `true`.
///
/// Behavior
/// - For each element, predicates are evaluated left to right and evaluation stops
///   at the first acceptance.
/// - With an empty predicate set, no element passes. Note that this is the opposite
///   of [`WhereAll`](super::WhereAll) for the same empty set.
#[derive(Debug, Clone)]
pub struct WhereAny<I, S> {
    inner: I,
    predicates: S,
}

impl<I, S> WhereAny<I, S>
where
    I: Iterator,
    S: PredicateSet<I::Item>,
{
    /// Creates a new `WhereAny` iterator.
    pub fn new(inner: I, predicates: S) -> Self {
        WhereAny { inner, predicates }
    }
}

impl<I, S> Iterator for WhereAny<I, S>
where
    I: Iterator,
    S: PredicateSet<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let predicates = &self.predicates;
        self.inner.find(|item| predicates.any(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.predicates.is_empty() {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

impl<I, S> DoubleEndedIterator for WhereAny<I, S>
where
    I: DoubleEndedIterator,
    S: PredicateSet<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let predicates = &self.predicates;
        self.inner.rfind(|item| predicates.any(item))
    }
}

impl<I, S> FusedIterator for WhereAny<I, S>
where
    I: FusedIterator,
    S: PredicateSet<I::Item>,
{
}
