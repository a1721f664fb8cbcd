//! Adapters that work at the `IntoIterator` level, so the same sequence can be
//! iterated more than once.
//!
//! An iterator is consumed by iteration, but a collection (or a reference to one)
//! can produce a fresh iterator each time. [`Tapped`] attaches a side-effecting
//! action to such a source: every pass over it runs the action again for each
//! element, in the same way iterating a restartable source twice would.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use seqkit_iter::IntoSequenceExt;
//!
//! let calls = Cell::new(0);
//! let data = vec![1, 2, 3];
//! let tapped = data.tapped(|_: &&i32| calls.set(calls.get() + 1));
//!
//! assert_eq!((&tapped).into_iter().sum::<i32>(), 6);
//! assert_eq!((&tapped).into_iter().count(), 3);
//! assert_eq!(calls.get(), 6);
//! ```

use crate::tap::Tap;

/// A sequence source with an attached action, iterable once per available
/// `IntoIterator` implementation of the source.
///
/// This struct is created by the [`IntoSequenceExt::tapped`] method.
///
/// - Iterating `Tapped<S, F>` by value consumes the source and yields a [`Tap`] iterator.
/// - Iterating `&Tapped<S, F>` requires `&S: IntoIterator` and an `Fn` action; it can be
///   repeated, and each pass invokes the action for every element it pulls.
#[derive(Debug, Clone)]
pub struct Tapped<S, F> {
    source: S,
    action: F,
}

impl<S, F> Tapped<S, F> {
    pub fn new(source: S, action: F) -> Self {
        Tapped { source, action }
    }

    /// Returns the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Detaches the action and returns the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S, F> IntoIterator for Tapped<S, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item),
{
    type Item = S::Item;
    type IntoIter = Tap<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        Tap::new(self.source.into_iter(), self.action)
    }
}

impl<'a, S, F> IntoIterator for &'a Tapped<S, F>
where
    &'a S: IntoIterator,
    F: Fn(&<&'a S as IntoIterator>::Item),
{
    type Item = <&'a S as IntoIterator>::Item;
    type IntoIter = Tap<<&'a S as IntoIterator>::IntoIter, &'a F>;

    fn into_iter(self) -> Self::IntoIter {
        Tap::new((&self.source).into_iter(), &self.action)
    }
}

/// Extension trait for `IntoIterator` types providing adapters that preserve the
/// ability to iterate the source again.
pub trait IntoSequenceExt {
    /// Attaches `action` to this source; see [`Tapped`].
    fn tapped<F>(self, action: F) -> Tapped<Self, F>
    where
        Self: Sized + IntoIterator,
    {
        Tapped::new(self, action)
    }
}

impl<I> IntoSequenceExt for I where I: IntoIterator {}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::IntoSequenceExt;

    #[test]
    fn test_tapped_repeat_passes() {
        let log = RefCell::new(Vec::new());
        let data = vec![String::from("a"), String::from("b")];
        let tapped = data.tapped(|s: &&String| log.borrow_mut().push(s.to_string()));

        let first: Vec<&String> = (&tapped).into_iter().collect();
        let second: Vec<&String> = (&tapped).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(log.borrow().as_slice(), ["a", "b", "a", "b"]);

        assert_eq!(tapped.source().len(), 2);
    }

    #[test]
    fn test_tapped_by_value() {
        let mut sum = 0;
        let out: Vec<i32> = vec![1, 2, 3]
            .tapped(|x: &i32| sum += *x)
            .into_iter()
            .collect();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_tapped_partial_pass() {
        let count = RefCell::new(0);
        let tapped = (1..=10)
            .collect::<Vec<u8>>()
            .tapped(|_: &&u8| *count.borrow_mut() += 1);
        assert_eq!((&tapped).into_iter().nth(2), Some(&3));
        assert_eq!(*count.borrow(), 3);
        let source = tapped.into_source();
        assert_eq!(source.len(), 10);
    }
}
