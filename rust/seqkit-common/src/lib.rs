//! Core definitions (errors, results and argument validation), relied upon by all seqkit-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::{
    OptionExt, Result, throw_if_null, throw_if_null_named, throw_if_null_with_message,
};
