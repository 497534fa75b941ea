//! Display, Debug, and std error trait implementations
//!
//! Two renderings, selected by the caller's own format string:
//!
//! - `{}`: the short form, the `": "`-joined message chain only.
//! - `{:#}` / `{:?}`: the extended form, causes rendered first, each
//!   message after the error it annotates, each captured trace appended
//!   as detailed `function\n\tfile:line` frames.
//!
//! Formatting never fails; unresolvable frames print placeholders.

use crate::types::{Error, Repr};
use std::error::Error as StdError;
use std::fmt;

impl Error {
    fn fmt_short(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Simple { message, .. } => f.write_str(message),
            Repr::WithMessage { cause, message, .. } => write!(f, "{message}: {cause}"),
            Repr::WithStack { cause, .. } => write!(f, "{cause}"),
        }
    }

    fn fmt_extended(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Simple { message, stack, .. } => {
                f.write_str(message)?;
                write!(f, "{stack:#}")
            }
            Repr::WithMessage { cause, message, .. } => {
                fmt_cause_extended(cause.as_ref(), f)?;
                write!(f, "\n{message}")
            }
            Repr::WithStack { cause, stack } => {
                fmt_cause_extended(cause.as_ref(), f)?;
                write!(f, "{stack:#}")
            }
        }
    }
}

/// Render a cause in extended form when it supports one, falling back to
/// its ordinary `Display` for foreign errors.
fn fmt_cause_extended(cause: &(dyn StdError + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match cause.downcast_ref::<Error>() {
        Some(err) => err.fmt_extended(f),
        None => write!(f, "{cause}"),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_extended(f)
        } else {
            self.fmt_short(f)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_extended(f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}
