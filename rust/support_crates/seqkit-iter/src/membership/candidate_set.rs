//! A hash-based set of borrowed candidates, keyed through an [`EqualityComparer`].

use std::{
    collections::HashMap,
    hash::{BuildHasher, BuildHasherDefault, Hash, Hasher},
};

use super::comparer::{DefaultComparer, EqualityComparer};

/// Hasher builder used to hash candidate values.
#[cfg(feature = "ahash")]
pub type DefaultBuildHasher = ahash::RandomState;

/// Hasher builder used to hash candidate values.
#[cfg(not(feature = "ahash"))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// A set of borrowed values supporting fast membership tests.
///
/// Candidates are hashed and compared with the comparer `C`, so the set can
/// implement equality notions other than the type's own `Eq` (see
/// [`KeyComparer`](super::KeyComparer)). Duplicates (under `C`) are stored once.
///
/// # Examples
///
/// ```
/// use seqkit_iter::{CandidateSet, by_key};
///
/// let names = ["Alice", "bob"];
/// let set = CandidateSet::with_comparer(names, by_key(|s: &str| s.to_lowercase()));
/// assert!(set.contains("BOB"));
/// assert!(!set.contains("carol"));
/// ```
pub struct CandidateSet<'a, T: ?Sized, C = DefaultComparer> {
    /// Candidates grouped by their comparer hash.
    buckets: HashMap<u64, Vec<&'a T>, BuildHasherDefault<PrehashedHasher>>,
    hasher: DefaultBuildHasher,
    comparer: C,
    len: usize,
}

impl<'a, T> CandidateSet<'a, T>
where
    T: Eq + Hash + ?Sized,
{
    /// Builds a set from `items`, using the values' own `Eq` and `Hash`.
    pub fn new(items: impl IntoIterator<Item = &'a T>) -> Self {
        Self::with_comparer(items, DefaultComparer)
    }
}

impl<'a, T, C> CandidateSet<'a, T, C>
where
    T: ?Sized,
    C: EqualityComparer<T>,
{
    /// Builds a set from `items`, hashing and comparing them with `comparer`.
    pub fn with_comparer(items: impl IntoIterator<Item = &'a T>, comparer: C) -> Self {
        let mut set = CandidateSet {
            buckets: HashMap::default(),
            hasher: DefaultBuildHasher::default(),
            comparer,
            len: 0,
        };
        for item in items {
            set.insert(item);
        }
        log::trace!("candidate set built with {} distinct values", set.len);
        set
    }

    /// Adds a candidate. Returns `false` if an equal candidate was already present.
    pub fn insert(&mut self, item: &'a T) -> bool {
        let hash = self.hash_of(item);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().any(|c| self.comparer.equals(c, item)) {
            return false;
        }
        bucket.push(item);
        self.len += 1;
        true
    }

    /// Returns `true` if some candidate equals `value` under the set's comparer.
    pub fn contains(&self, value: &T) -> bool {
        self.buckets
            .get(&self.hash_of(value))
            .is_some_and(|bucket| bucket.iter().any(|c| self.comparer.equals(c, value)))
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn hash_of(&self, value: &T) -> u64 {
        let mut state = self.hasher.build_hasher();
        self.comparer.hash_value(value, &mut state);
        state.finish()
    }
}

impl<T: ?Sized, C> std::fmt::Debug for CandidateSet<'_, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateSet")
            .field("len", &self.len)
            .field("buckets", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

/// Hasher for keys that are already hash values: passes the `u64` through.
///
/// Only `write_u64` is supported; any other input panics.
#[derive(Default)]
struct PrehashedHasher(u64);

impl Hasher for PrehashedHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write(&mut self, _: &[u8]) {
        unimplemented!("PrehashedHasher only accepts u64 hash values");
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{Hash, Hasher};

    use super::CandidateSet;
    use crate::membership::{EqualityComparer, by_key};

    /// Comparer with a deliberately degenerate hash, forcing every value into one bucket.
    struct SameHash;

    impl EqualityComparer<i32> for SameHash {
        fn equals(&self, a: &i32, b: &i32) -> bool {
            a == b
        }

        fn hash_value<H: Hasher>(&self, _: &i32, state: &mut H) {
            0u8.hash(state)
        }
    }

    #[test]
    fn test_default_set() {
        let items = vec![3, 1, 4, 1, 5];
        let set = CandidateSet::new(&items);
        assert_eq!(set.len(), 4);
        assert!(set.contains(&4));
        assert!(!set.contains(&2));
    }

    #[test]
    fn test_empty_set() {
        let set = CandidateSet::<str>::new(std::iter::empty());
        assert!(set.is_empty());
        assert!(!set.contains("anything"));
    }

    #[test]
    fn test_colliding_hashes() {
        let items = [1, 2, 3, 2];
        let mut set = CandidateSet::with_comparer(&items, SameHash);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&3));
        assert!(!set.contains(&4));
        assert!(set.insert(&7));
        assert!(!set.insert(&1));
        assert!(set.contains(&7));
    }

    #[test]
    fn test_key_comparer_set() {
        let items = ["Red", "GREEN", "green"];
        let set = CandidateSet::with_comparer(items, by_key(|s: &str| s.to_lowercase()));
        assert_eq!(set.len(), 2);
        assert!(set.contains("red"));
        assert!(set.contains("Green"));
        assert!(!set.contains("blue"));
    }
}
