use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if this error reports a missing required value.
    pub fn is_argument_null(&self) -> bool {
        matches!(self.kind(), ErrorKind::ArgumentNull { .. })
    }

    pub fn argument_null(name: Option<&str>, message: Option<&str>) -> Error {
        Error(
            ErrorKind::ArgumentNull {
                name: name.map(str::to_string),
                message: message.map(str::to_string),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required value was absent.
    ///
    /// Both the parameter name and the message are optional; when the message is
    /// missing a generic one is displayed instead.
    #[error(
        "{}{}",
        message.as_deref().unwrap_or("value cannot be null"),
        name.as_deref().map(|n| format!(" (parameter '{n}')")).unwrap_or_default())]
    ArgumentNull {
        name: Option<String>,
        message: Option<String>,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl ErrorKind {
    /// The name of the offending parameter, if one was recorded.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            ErrorKind::ArgumentNull { name, .. } => name.as_deref(),
            ErrorKind::InvalidArgument { name, .. } => Some(name),
        }
    }

    /// The caller-supplied message, if one was recorded.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorKind::ArgumentNull { message, .. } => message.as_deref(),
            ErrorKind::InvalidArgument { message, .. } => Some(message),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
