//! # seqkit: sequence utilities
//!
//! Small, generic helpers for everyday sequence processing, plus a fail-fast check
//! for required arguments.
//!
//! ## Module Organization
//!
//! * [`common`] - Error types, `Result`, and argument validation
//!   ([`throw_if_null`], [`require!`](crate::require), [`verify_arg!`](crate::verify_arg))
//! * [`iter`] - Lazy sequence adapters: lifting, or-empty defaults, tap,
//!   multi-predicate filters and membership tests
//! * [`prelude`] - The extension traits, for glob import
//!
//! ## Naming
//!
//! Some call sites know the or-empty helpers as "maybe". Both spellings are
//! available and share one implementation: [`OrEmpty::maybe`] and [`maybe_iter`].
//!
//! ## Features
//!
//! * `ahash` (default) - hash candidate sets with `ahash` instead of the standard
//!   library's SipHash.
//!
//! ## Getting Started
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let is_even = |x: &i32| x % 2 == 0;
//! let above_two = |x: &i32| *x > 2;
//! let predicates: [&dyn Fn(&i32) -> bool; 2] = [&is_even, &above_two];
//!
//! let evens_above_two: Vec<i32> = (1..=6).where_all(predicates).collect();
//! assert_eq!(evens_above_two, vec![4, 6]);
//!
//! let absent: Option<Vec<i32>> = None;
//! assert!(absent.or_empty().is_empty());
//! assert!(3i32.is_in([1, 2, 3]));
//! ```

pub use seqkit_common as common;
pub use seqkit_iter as iter;

pub use seqkit_common::{
    Error, ErrorKind, Result, require, throw_if_null, throw_if_null_named,
    throw_if_null_with_message, verify_arg,
};
pub use seqkit_iter::{OrEmpty, in_set, in_set_by, is_in, is_in_by, lift, maybe_iter, or_empty_iter};

/// Glob-importable extension traits.
pub mod prelude {
    pub use seqkit_common::OptionExt;
    pub use seqkit_iter::{InExt, IntoSequenceExt, Lift, OrEmpty, SequenceExt};
}
