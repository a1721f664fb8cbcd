//! Turning absent sequences into empty ones.
//!
//! An absent sequence is modeled as `None`. The [`OrEmpty`] trait covers the
//! container shapes (growable lists, fixed boxed arrays and borrowed slices),
//! while [`or_empty_iter`] handles arbitrary lazy sequences. Present inputs are
//! always returned as-is, without copying.
//!
//! The `maybe` spellings are aliases of the `or_empty` ones.

/// Converts an optional container into a container, substituting an empty one for `None`.
pub trait OrEmpty {
    /// The container type produced by the conversion.
    type Output;

    /// Returns the contained value, or an empty container when absent.
    fn or_empty(self) -> Self::Output;

    /// Alias of [`OrEmpty::or_empty`].
    #[inline]
    fn maybe(self) -> Self::Output
    where
        Self: Sized,
    {
        self.or_empty()
    }
}

impl<T> OrEmpty for Option<Vec<T>> {
    type Output = Vec<T>;

    #[inline]
    fn or_empty(self) -> Vec<T> {
        self.unwrap_or_default()
    }
}

impl<T> OrEmpty for Option<Box<[T]>> {
    type Output = Box<[T]>;

    #[inline]
    fn or_empty(self) -> Box<[T]> {
        self.unwrap_or_default()
    }
}

impl<'a, T> OrEmpty for Option<&'a [T]> {
    type Output = &'a [T];

    #[inline]
    fn or_empty(self) -> &'a [T] {
        self.unwrap_or(&[])
    }
}

impl<'a, T> OrEmpty for Option<&'a Vec<T>> {
    type Output = &'a [T];

    #[inline]
    fn or_empty(self) -> &'a [T] {
        match self {
            Some(v) => v.as_slice(),
            None => &[],
        }
    }
}

/// Converts an optional lazy sequence into an iterator that is empty for `None`.
///
/// ```
/// use seqkit_iter::or_empty_iter;
///
/// let absent: Option<std::ops::Range<u32>> = None;
/// assert_eq!(or_empty_iter(absent).count(), 0);
/// assert_eq!(or_empty_iter(Some(0..3)).collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[inline]
pub fn or_empty_iter<I: IntoIterator>(sequence: Option<I>) -> OrEmptyIter<I::IntoIter> {
    OrEmptyIter::new(sequence.map(IntoIterator::into_iter))
}

/// Alias of [`or_empty_iter`].
#[inline]
pub fn maybe_iter<I: IntoIterator>(sequence: Option<I>) -> OrEmptyIter<I::IntoIter> {
    or_empty_iter(sequence)
}

/// Iterator over an optional inner iterator; yields nothing when the inner one is absent.
///
/// This struct is created by [`or_empty_iter`].
#[derive(Debug, Clone)]
pub struct OrEmptyIter<I> {
    inner: Option<I>,
}

impl<I> OrEmptyIter<I> {
    pub fn new(inner: Option<I>) -> Self {
        OrEmptyIter { inner }
    }

    /// Returns `true` if the underlying sequence was absent.
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iterator> Iterator for OrEmptyIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for OrEmptyIter<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for OrEmptyIter<I> {}

impl<I: std::iter::FusedIterator> std::iter::FusedIterator for OrEmptyIter<I> {}

#[cfg(test)]
mod tests {
    use super::{OrEmpty, maybe_iter, or_empty_iter};

    #[test]
    fn test_vec_shape() {
        let absent: Option<Vec<u32>> = None;
        assert!(absent.or_empty().is_empty());

        let v = vec![1u32, 2, 3];
        let ptr = v.as_ptr();
        let out = Some(v).or_empty();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn test_boxed_array_shape() {
        let absent: Option<Box<[String]>> = None;
        assert!(absent.maybe().is_empty());

        let arr: Box<[String]> = vec!["a".to_string(), "b".to_string()].into_boxed_slice();
        let ptr = arr.as_ptr();
        let out = Some(arr).or_empty();
        assert_eq!(out.len(), 2);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn test_slice_shape() {
        let absent: Option<&[u8]> = None;
        assert!(absent.or_empty().is_empty());

        let data = [5u8, 6, 7];
        let out = Some(&data[..]).or_empty();
        assert!(std::ptr::eq(out, &data[..]));

        let v = vec![1, 2];
        assert_eq!(Some(&v).or_empty(), &[1, 2]);
        assert!(None::<&Vec<i32>>.maybe().is_empty());
    }

    #[test]
    fn test_lazy_shape() {
        let absent: Option<Vec<i32>> = None;
        let mut it = or_empty_iter(absent);
        assert!(it.is_absent());
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);

        let it = maybe_iter(Some(vec![3, 1, 2]));
        assert!(!it.is_absent());
        assert_eq!(it.len(), 3);
        assert_eq!(it.rev().collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_lazy_shape_does_not_consume_eagerly() {
        let pulled = std::cell::Cell::new(0);
        let source = (0..4).inspect(|_| pulled.set(pulled.get() + 1));
        let mut it = or_empty_iter(Some(source));
        assert_eq!(pulled.get(), 0);
        assert_eq!(it.next(), Some(0));
        assert_eq!(pulled.get(), 1);
    }
}
