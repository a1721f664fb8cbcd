//! Filtering sequences by a set of predicates.
//!
//! # Provided Adapters
//!
//! - [`WhereAll`]: keeps elements that satisfy every predicate. An empty
//!   predicate set keeps everything.
//! - [`WhereAny`]: keeps elements that satisfy at least one predicate. An empty
//!   predicate set keeps nothing.
//! - [`WhereMany`]: applies the predicates as successive filter stages, left to right.
//!
//! Predicates are evaluated left to right and short-circuit.

pub mod where_all;
pub mod where_any;
pub mod where_many;

pub use where_all::WhereAll;
pub use where_any::WhereAny;
pub use where_many::WhereMany;

/// A test applied to a single element.
///
/// Implemented for every `Fn(&T) -> bool`, including boxed and borrowed trait objects.
pub trait Predicate<T: ?Sized> {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool + ?Sized,
{
    #[inline]
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// An ordered collection of predicates that can be evaluated together.
pub trait PredicateSet<T: ?Sized> {
    /// Returns `true` if every predicate accepts `item`; `true` for an empty set.
    fn all(&self, item: &T) -> bool;

    /// Returns `true` if at least one predicate accepts `item`; `false` for an empty set.
    fn any(&self, item: &T) -> bool;

    /// Number of predicates in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, P> PredicateSet<T> for [P]
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn all(&self, item: &T) -> bool {
        self.iter().all(|p| p.test(item))
    }

    #[inline]
    fn any(&self, item: &T) -> bool {
        self.iter().any(|p| p.test(item))
    }

    fn len(&self) -> usize {
        <[P]>::len(self)
    }
}

impl<T, P, const N: usize> PredicateSet<T> for [P; N]
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn all(&self, item: &T) -> bool {
        self.as_slice().all(item)
    }

    #[inline]
    fn any(&self, item: &T) -> bool {
        self.as_slice().any(item)
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T, P> PredicateSet<T> for Vec<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn all(&self, item: &T) -> bool {
        self.as_slice().all(item)
    }

    #[inline]
    fn any(&self, item: &T) -> bool {
        self.as_slice().any(item)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T, P> PredicateSet<T> for Box<[P]>
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn all(&self, item: &T) -> bool {
        (**self).all(item)
    }

    #[inline]
    fn any(&self, item: &T) -> bool {
        (**self).any(item)
    }

    fn len(&self) -> usize {
        <[P]>::len(self)
    }
}

impl<T, S> PredicateSet<T> for &S
where
    T: ?Sized,
    S: PredicateSet<T> + ?Sized,
{
    #[inline]
    fn all(&self, item: &T) -> bool {
        (**self).all(item)
    }

    #[inline]
    fn any(&self, item: &T) -> bool {
        (**self).any(item)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
