/// Macro for handling `Result<T, E>` in functions that return `Option<Result<T, E>>`.
///
/// - If `expr` evaluates to `Ok(t)`, the macro yields `t`.
/// - If `expr` evaluates to `Err(e)`, the macro causes the enclosing function to
///   return `Some(Err(e))`.
///
/// This is especially useful inside a `next()` implementation of an
/// `Iterator<Item = Result<T, E>>` when calling helper functions that return
/// `Result<T, E>`.
///
/// The enclosing function *must* have a return type compatible with
/// `Option<Result<_, E>>`.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
}

/// Fails the enclosing function with an invalid-argument error unless the
/// condition holds. The error records both the argument name and the condition text.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Unwraps an `Option` argument, returning an argument-null error from the
/// enclosing function when it is `None`. The identifier itself is used as the
/// parameter name.
///
/// ```
/// use seqkit_common::{require, Result};
///
/// fn greet(name: Option<&str>) -> Result<String> {
///     let name = require!(name);
///     Ok(format!("hello, {name}"))
/// }
///
/// assert_eq!(greet(Some("world")).unwrap(), "hello, world");
/// let err = greet(None).unwrap_err();
/// assert_eq!(err.kind().param_name(), Some("name"));
/// ```
#[macro_export]
macro_rules! require {
    ($name:ident) => {
        $crate::result::throw_if_null_named($name, stringify!($name))?
    };
    ($name:ident, $message:expr) => {
        $crate::result::throw_if_null_with_message($name, stringify!($name), $message)?
    };
}

#[cfg(test)]
mod tests {
    use crate::Result;

    fn scaled(value: Option<u32>, factor: u32) -> Result<u32> {
        crate::verify_arg!(factor, factor > 0);
        let value = crate::require!(value, "value must be provided");
        Ok(value * factor)
    }

    fn parse_all(items: &[&str]) -> Option<std::result::Result<Vec<u32>, std::num::ParseIntError>> {
        let mut out = Vec::new();
        for item in items {
            out.push(crate::try_or_ret_some_err!(item.parse::<u32>()));
        }
        Some(Ok(out))
    }

    #[test]
    fn test_require_and_verify() {
        assert_eq!(scaled(Some(3), 2).unwrap(), 6);

        let err = scaled(None, 2).unwrap_err();
        assert_eq!(err.kind().param_name(), Some("value"));
        assert_eq!(err.kind().message(), Some("value must be provided"));

        let err = scaled(Some(3), 0).unwrap_err();
        assert!(!err.is_argument_null());
        assert_eq!(err.kind().param_name(), Some("factor"));
        assert_eq!(err.kind().message(), Some("factor > 0"));
    }

    #[test]
    fn test_try_or_ret_some_err() {
        assert_eq!(parse_all(&["1", "2"]).unwrap().unwrap(), vec![1, 2]);
        assert!(parse_all(&["1", "x"]).unwrap().is_err());
    }
}
