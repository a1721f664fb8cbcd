//! Wrapping a single value into a sequence.

use std::iter::Once;

/// Wraps `value` into a sequence that yields it exactly once.
///
/// ```
/// let items: Vec<_> = seqkit_iter::lift("only").collect();
/// assert_eq!(items, vec!["only"]);
/// ```
#[inline]
pub fn lift<T>(value: T) -> Once<T> {
    std::iter::once(value)
}

/// Extension trait exposing [`lift`] as a method on any value.
pub trait Lift: Sized {
    /// Wraps `self` into a one-element sequence.
    #[inline]
    fn lift(self) -> Once<Self> {
        lift(self)
    }
}

impl<T> Lift for T {}

#[cfg(test)]
mod tests {
    use super::{Lift, lift};

    #[test]
    fn test_lift_single_element() {
        let mut it = lift(42);
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(42));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_lift_method() {
        let s = String::from("value");
        let items: Vec<String> = s.clone().lift().collect();
        assert_eq!(items, vec![s]);

        let nested: Vec<Vec<u8>> = vec![1u8, 2].lift().collect();
        assert_eq!(nested, vec![vec![1, 2]]);
    }
}
