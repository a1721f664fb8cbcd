use crate::error::{Error, ErrorKind};

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns the contained value, or fails with an argument-null error.
///
/// # Examples
///
/// ```
/// use seqkit_common::throw_if_null;
///
/// assert_eq!(throw_if_null(Some(7)).unwrap(), 7);
/// assert!(throw_if_null::<i32>(None).unwrap_err().is_argument_null());
/// ```
#[inline]
pub fn throw_if_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| argument_null(None, None))
}

/// Same as [`throw_if_null`], recording the name of the checked parameter.
#[inline]
pub fn throw_if_null_named<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| argument_null(Some(name), None))
}

/// Same as [`throw_if_null_named`], with a caller-supplied message.
#[inline]
pub fn throw_if_null_with_message<T>(value: Option<T>, name: &str, message: &str) -> Result<T> {
    value.ok_or_else(|| argument_null(Some(name), Some(message)))
}

/// Validation helpers for optional arguments.
pub trait OptionExt<T> {
    /// Unwraps a required argument, failing with an argument-null error
    /// that carries `name` when the value is absent.
    fn required(self, name: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn required(self, name: &str) -> Result<T> {
        throw_if_null_named(self, name)
    }
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    log::debug!("argument check failed for {name}: {condition}");
    Err(ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
fn argument_null(name: Option<&str>, message: Option<&str>) -> Error {
    log::debug!(
        "required argument {} is absent",
        name.unwrap_or("<unnamed>")
    );
    Error::argument_null(name, message)
}
