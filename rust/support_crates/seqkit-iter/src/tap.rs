//! Pass-through adapters that observe each element as it is pulled.

use std::iter::FusedIterator;

use seqkit_common::try_or_ret_some_err;

/// Iterator adapter that invokes an action on every element before yielding it.
///
/// Behavior
/// - The action runs exactly once per element, right before the element is handed
///   to the consumer, and never ahead of demand.
/// - Elements are yielded unchanged and in the order of the underlying iterator.
/// - A panic raised by the action unwinds through `next()`; the element being
///   processed is not yielded.
///
/// This struct is created by [`SequenceExt::tap`](crate::SequenceExt::tap).
#[derive(Debug, Clone)]
pub struct Tap<I, F> {
    /// The underlying iterator.
    inner: I,
    /// The side-effecting action invoked with each element.
    action: F,
}

impl<I, F> Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    /// Creates a new `Tap` adapter around `inner`.
    pub fn new(inner: I, action: F) -> Self {
        Tap { inner, action }
    }
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        (self.action)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, F> DoubleEndedIterator for Tap<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(&I::Item),
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        (self.action)(&item);
        Some(item)
    }
}

impl<I, F> ExactSizeIterator for Tap<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item),
{
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<I, F> FusedIterator for Tap<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item),
{
}

/// Iterator adapter that invokes a fallible action on every element before yielding it.
///
/// Each element is yielded as `Ok(item)` once the action succeeds. The first error
/// returned by the action is yielded as `Err(e)`, unmodified, after which the adapter
/// is exhausted: the underlying iterator is not pulled again.
///
/// This struct is created by [`SequenceExt::try_tap`](crate::SequenceExt::try_tap).
#[derive(Debug, Clone)]
pub struct TryTap<I, F> {
    inner: I,
    action: F,
    /// Set once the action has failed.
    failed: bool,
}

impl<I, F, E> TryTap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> Result<(), E>,
{
    /// Creates a new `TryTap` adapter around `inner`.
    pub fn new(inner: I, action: F) -> Self {
        TryTap {
            inner,
            action,
            failed: false,
        }
    }

    fn observe(&mut self, item: &I::Item) -> Result<(), E> {
        let res = (self.action)(item);
        self.failed = res.is_err();
        res
    }
}

impl<I, F, E> Iterator for TryTap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> Result<(), E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.inner.next()?;
        try_or_ret_some_err!(self.observe(&item));
        Some(Ok(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            self.inner.size_hint()
        }
    }
}

impl<I, F, E> FusedIterator for TryTap<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> Result<(), E>,
{
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::SequenceExt;

    #[derive(Debug, PartialEq)]
    enum Event {
        Action(i32),
        Pulled(i32),
    }

    #[test]
    fn test_tap_interleaves_with_pulls() {
        let log = RefCell::new(Vec::new());
        let mut it = vec![10, 20, 30]
            .into_iter()
            .tap(|x| log.borrow_mut().push(Event::Action(*x)));

        assert!(log.borrow().is_empty());
        while let Some(x) = it.next() {
            log.borrow_mut().push(Event::Pulled(x));
        }
        drop(it);

        assert_eq!(
            log.into_inner(),
            vec![
                Event::Action(10),
                Event::Pulled(10),
                Event::Action(20),
                Event::Pulled(20),
                Event::Action(30),
                Event::Pulled(30),
            ]
        );
    }

    #[test]
    fn test_tap_is_lazy() {
        let calls = RefCell::new(0);
        let mut it = (0..100).tap(|_| *calls.borrow_mut() += 1);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(*calls.borrow(), 2);
        drop(it);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_tap_preserves_elements() {
        let seen = RefCell::new(Vec::new());
        let out: Vec<String> = ["a", "b", "c"]
            .iter()
            .map(|s| s.to_string())
            .tap(|s| seen.borrow_mut().push(s.clone()))
            .collect();
        assert_eq!(out, vec!["a", "b", "c"]);
        assert_eq!(seen.into_inner(), out);
    }

    #[test]
    fn test_tap_len_and_back() {
        let seen = RefCell::new(Vec::new());
        let mut it = [1, 2, 3].into_iter().tap(|x| seen.borrow_mut().push(*x));
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(1));
        drop(it);
        assert_eq!(seen.into_inner(), vec![3, 1]);
    }

    #[test]
    fn test_tap_panic_stops_production() {
        let seen = RefCell::new(Vec::new());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            (1..=5)
                .tap(|x| {
                    assert_ne!(*x, 3, "boom");
                    seen.borrow_mut().push(*x);
                })
                .collect::<Vec<_>>()
        }));
        assert!(result.is_err());
        assert_eq!(seen.into_inner(), vec![1, 2]);
    }

    #[test]
    fn test_try_tap_stops_at_first_error() {
        let pulled = RefCell::new(0);
        let out: Vec<Result<i32, String>> = (1..=5)
            .inspect(|_| *pulled.borrow_mut() += 1)
            .try_tap(|x| {
                if *x == 3 {
                    Err(format!("rejected {x}"))
                } else {
                    Ok(())
                }
            })
            .collect();
        assert_eq!(out, vec![Ok(1), Ok(2), Err("rejected 3".to_string())]);
        assert_eq!(*pulled.borrow(), 3);
    }

    #[test]
    fn test_try_tap_collects_into_result() {
        let ok: Result<Vec<u8>, ()> = [1u8, 2, 3].into_iter().try_tap(|_| Ok(())).collect();
        assert_eq!(ok, Ok(vec![1, 2, 3]));

        let mut it = [1u8, 2].into_iter().try_tap(|_| Err::<(), _>("no"));
        assert_eq!(it.next(), Some(Err("no")));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }
}
