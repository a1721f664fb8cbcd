//! Generic, lazy helpers for working with sequences.
//!
//! This crate provides small adapters and free functions over `Iterator` and
//! `IntoIterator` values:
//!
//! - **Lifting and defaults**: [`lift`] wraps a single value into a sequence,
//!   [`OrEmpty`] and [`or_empty_iter`] turn an absent sequence into an empty one
//! - **Pass-through side effects**: [`SequenceExt::tap`] and [`SequenceExt::try_tap`]
//!   observe each element as it is pulled, [`IntoSequenceExt::tapped`] does the
//!   same for restartable sequences
//! - **Multi-predicate filtering**: [`SequenceExt::where_all`],
//!   [`SequenceExt::where_any`] and [`SequenceExt::where_many`]
//! - **Membership**: [`is_in`], [`in_set`] and their comparer-based variants
//!
//! None of the adapters consume their input eagerly: every element is produced
//! on demand, when the consumer pulls it.
//!
//! # Examples
//!
//! ```
//! use seqkit_iter::SequenceExt;
//!
//! let is_even = |x: &i32| x % 2 == 0;
//! let above_two = |x: &i32| *x > 2;
//! let predicates: [&dyn Fn(&i32) -> bool; 2] = [&is_even, &above_two];
//!
//! let all: Vec<i32> = (1..=6).where_all(predicates).collect();
//! assert_eq!(all, vec![4, 6]);
//!
//! let any: Vec<i32> = (1..=6).where_any(predicates).collect();
//! assert_eq!(any, vec![2, 3, 4, 5, 6]);
//! ```

pub mod filter;
pub mod into_iter_adapters;
pub mod lift;
pub mod membership;
pub mod or_empty;
pub mod sequence_ext;
pub mod tap;

pub use filter::{Predicate, PredicateSet};
pub use into_iter_adapters::{IntoSequenceExt, Tapped};
pub use lift::{Lift, lift};
pub use membership::{
    CandidateSet, DefaultComparer, EqualityComparer, InExt, KeyComparer, by_key, in_set,
    in_set_by, is_in, is_in_by,
};
pub use or_empty::{OrEmpty, OrEmptyIter, maybe_iter, or_empty_iter};
pub use sequence_ext::SequenceExt;
