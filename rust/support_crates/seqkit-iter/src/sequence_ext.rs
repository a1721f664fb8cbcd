//! Extension trait exposing the sequence adapters as iterator methods.

use crate::{
    filter::{Predicate, PredicateSet, WhereAll, WhereAny, WhereMany},
    tap::{Tap, TryTap},
};

/// Extension trait for more idiomatic usage of the sequence adapters.
///
/// Implemented for every [`Iterator`]. All methods are lazy: nothing is pulled from
/// the underlying iterator until the returned adapter is iterated.
pub trait SequenceExt: Iterator + Sized {
    /// Invokes `action` on each element as it is pulled, then yields it unchanged.
    fn tap<F>(self, action: F) -> Tap<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Tap::new(self, action)
    }

    /// Like [`tap`](SequenceExt::tap), with an action that may fail.
    ///
    /// Elements are yielded as `Ok`; the first failure is yielded as `Err` and ends
    /// the sequence.
    fn try_tap<F, E>(self, action: F) -> TryTap<Self, F>
    where
        F: FnMut(&Self::Item) -> Result<(), E>,
    {
        TryTap::new(self, action)
    }

    /// Keeps the elements accepted by every predicate; an empty set keeps all of them.
    fn where_all<S>(self, predicates: S) -> WhereAll<Self, S>
    where
        S: PredicateSet<Self::Item>,
    {
        WhereAll::new(self, predicates)
    }

    /// Keeps the elements accepted by at least one predicate; an empty set keeps none.
    fn where_any<S>(self, predicates: S) -> WhereAny<Self, S>
    where
        S: PredicateSet<Self::Item>,
    {
        WhereAny::new(self, predicates)
    }

    /// Applies each predicate as a separate filter stage, left to right.
    fn where_many<Ps, P>(self, predicates: Ps) -> WhereMany<Self, P>
    where
        Ps: IntoIterator<Item = P>,
        P: Predicate<Self::Item>,
    {
        WhereMany::new(self, predicates)
    }
}

impl<I: Iterator> SequenceExt for I {}
