//! Extension traits for `Result` and `Option`
//!
//! Adapters that fold [`wrap`](crate::wrap) into the usual `?`-driven
//! control flow, so annotation reads as a method call instead of a
//! `map_err` closure at every call site.

use crate::constructors::wrap_parts;
use crate::types::Error;
use std::error::Error as StdError;

/// Annotate the error side of a `Result` with message and stack context.
pub trait ResultExt<T> {
    /// Wrap the error with `message`, capturing a stack trace here.
    ///
    /// ```
    /// use errchain::ResultExt;
    ///
    /// let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    /// let res: Result<(), std::io::Error> = Err(denied);
    /// let err = res.context("writing lockfile").unwrap_err();
    /// assert_eq!(err.to_string(), "writing lockfile: denied");
    /// ```
    fn context(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`ResultExt::context`], but the message is only built on the
    /// error path.
    fn with_context<F, S>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(wrap_parts(cause, message.into())),
        }
    }

    fn with_context<F, S>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(wrap_parts(cause, message().into())),
        }
    }
}

/// Turn an absent `Option` into a fresh leaf [`Error`].
pub trait OptionExt<T> {
    /// Replace `None` with a new error carrying `message`.
    fn ok_or_error(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`OptionExt::ok_or_error`], but the message is only built
    /// when the value is absent.
    fn ok_or_else_error<F, S>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::new(message)),
        }
    }

    fn ok_or_else_error<F, S>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::new(message())),
        }
    }
}
