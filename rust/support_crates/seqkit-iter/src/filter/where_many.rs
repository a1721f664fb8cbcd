//! Staged filtering: one lazy filter per predicate, chained left to right.

use std::iter::FusedIterator;

use super::Predicate;

/// Iterator adapter applying its predicates as successive filter stages.
///
/// The first predicate filters the source, the second filters the output of the
/// first stage, and so on. An element pulled from the source advances through the
/// stages in order and is dropped at the first stage that rejects it, after which
/// the next element is pulled from the source. The yielded elements are the same as
/// with [`WhereAll`](super::WhereAll) for side-effect-free predicates. With no
/// predicates the source passes through unchanged.
///
/// The stages are stored by value, so the adapter is `Send`/`Sync` whenever the
/// source and the predicates are.
#[derive(Debug, Clone)]
pub struct WhereMany<I, P> {
    inner: I,
    /// Filter stages, in application order.
    stages: Vec<P>,
}

impl<I, P> WhereMany<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    /// Creates a new `WhereMany` iterator, stacking one filter stage per predicate.
    pub fn new(inner: I, predicates: impl IntoIterator<Item = P>) -> Self {
        WhereMany {
            inner,
            stages: predicates.into_iter().collect(),
        }
    }

    /// Number of filter stages in the chain.
    pub fn stages(&self) -> usize {
        self.stages.len()
    }
}

/// Runs `item` through `stages`, returning `false` at the first stage that rejects it.
#[inline]
fn passes_stages<T, P: Predicate<T>>(stages: &[P], item: &T) -> bool {
    stages.iter().all(|stage| stage.test(item))
}

impl<I, P> Iterator for WhereMany<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let stages = self.stages.as_slice();
        self.inner.find(|item| passes_stages(stages, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        if self.stages.is_empty() {
            (lower, upper)
        } else {
            (0, upper)
        }
    }
}

impl<I, P> DoubleEndedIterator for WhereMany<I, P>
where
    I: DoubleEndedIterator,
    P: Predicate<I::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let stages = self.stages.as_slice();
        self.inner.rfind(|item| passes_stages(stages, item))
    }
}

impl<I, P> FusedIterator for WhereMany<I, P>
where
    I: FusedIterator,
    P: Predicate<I::Item>,
{
}
