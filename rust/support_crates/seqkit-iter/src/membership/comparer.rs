//! Equality comparers used by membership tests.

use std::hash::{Hash, Hasher};

/// Defines equality between values of `T`, together with a hash that is consistent
/// with it: values that compare equal must hash identically.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;

    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H);
}

impl<T, C> EqualityComparer<T> for &C
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H) {
        (**self).hash_value(value, state)
    }
}

/// Comparer based on the type's own `Eq` and `Hash` implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultComparer;

impl<T> EqualityComparer<T> for DefaultComparer
where
    T: Eq + Hash + ?Sized,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state)
    }
}

/// Comparer that considers two values equal when their projected keys are equal.
///
/// ```
/// use seqkit_iter::{by_key, is_in_by};
///
/// let ignore_case = by_key(|s: &str| s.to_ascii_lowercase());
/// assert!(is_in_by("HTTP", ["ftp", "http"], &ignore_case));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyComparer<F> {
    key: F,
}

impl<F> KeyComparer<F> {
    pub fn new(key: F) -> Self {
        KeyComparer { key }
    }
}

impl<T, K, F> EqualityComparer<T> for KeyComparer<F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }

    #[inline]
    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.key)(value).hash(state)
    }
}

/// Creates a [`KeyComparer`] from a key projection.
pub fn by_key<F>(key: F) -> KeyComparer<F> {
    KeyComparer::new(key)
}
