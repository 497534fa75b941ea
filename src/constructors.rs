//! Construction and chain operations
//!
//! Every operation that accepts a possibly-absent cause propagates
//! absence: annotating nothing produces nothing. None of these
//! operations can themselves fail.

use crate::stack::StackTrace;
use crate::types::{Error, Repr, CODE_NOT_DEFINED};
use std::error::Error as StdError;

impl Error {
    /// Create a leaf error with the supplied message.
    ///
    /// Records a stack trace at the point it is called; the code starts
    /// at [`CODE_NOT_DEFINED`].
    ///
    /// ```
    /// let err = errchain::Error::new("file not found");
    /// assert_eq!(err.message(), "file not found");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            repr: Repr::Simple {
                message: message.into(),
                code: CODE_NOT_DEFINED,
                stack: StackTrace::capture(),
            },
        }
    }

    /// This node's own message layer.
    ///
    /// A stack-only annotation contributes no message of its own and
    /// delegates to its cause, yielding `""` when the cause is an opaque
    /// foreign error.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.repr {
            Repr::Simple { message, .. } | Repr::WithMessage { message, .. } => message,
            Repr::WithStack { cause, .. } => {
                cause.downcast_ref::<Error>().map_or("", Error::message)
            }
        }
    }

    /// The numeric code carried by this node.
    ///
    /// A stack-only annotation probes its cause, yielding
    /// [`CODE_NOT_DEFINED`] when the cause does not expose a code.
    #[must_use]
    pub fn code(&self) -> i32 {
        match &self.repr {
            Repr::Simple { code, .. } | Repr::WithMessage { code, .. } => *code,
            Repr::WithStack { cause, .. } => cause
                .downcast_ref::<Error>()
                .map_or(CODE_NOT_DEFINED, Error::code),
        }
    }

    /// Assign a numeric code, returning the error for call chaining.
    ///
    /// On a stack-only annotation this delegates to the wrapped cause
    /// when the cause itself exposes a setter, and is otherwise a silent
    /// no-op. The delegation means the code lands on the nearest node
    /// that can hold one, not on the stack layer.
    #[must_use]
    pub fn set_code(mut self, code: i32) -> Self {
        self.set_code_mut(code);
        self
    }

    fn set_code_mut(&mut self, code: i32) {
        match &mut self.repr {
            Repr::Simple { code: own, .. } | Repr::WithMessage { code: own, .. } => *own = code,
            Repr::WithStack { cause, .. } => {
                if let Some(inner) = cause.downcast_mut::<Error>() {
                    inner.set_code_mut(code);
                }
            }
        }
    }

    /// The error this node wraps, if any.
    ///
    /// Leaf errors have no cause. Ownership stays with this node; the
    /// cause is only borrowed out.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.repr {
            Repr::Simple { .. } => None,
            Repr::WithMessage { cause, .. } | Repr::WithStack { cause, .. } => {
                let cause: &(dyn StdError + 'static) = &**cause;
                Some(cause)
            }
        }
    }

    /// The stack trace captured by this node, if it captured one.
    ///
    /// Message-only annotations never carry their own trace; walk the
    /// chain via [`Error::cause`] to collect every capture.
    #[must_use]
    pub fn stack(&self) -> Option<&StackTrace> {
        match &self.repr {
            Repr::Simple { stack, .. } | Repr::WithStack { stack, .. } => Some(stack),
            Repr::WithMessage { .. } => None,
        }
    }

    /// The innermost error in this chain. See [`root_cause`].
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        root_cause(self)
    }
}

/// Annotate `cause` with a message and a stack trace captured here.
///
/// The most common entry point: each call adds exactly one message layer
/// and one stack layer. The new node inherits the cause's code when the
/// cause exposes one. An absent cause yields `None`.
///
/// ```
/// let inner = errchain::Error::new("connection refused");
/// let outer = errchain::wrap(Some(inner), "sync failed").expect("cause was present");
/// assert_eq!(outer.to_string(), "sync failed: connection refused");
/// ```
pub fn wrap<E>(cause: Option<E>, message: impl Into<String>) -> Option<Error>
where
    E: StdError + Send + Sync + 'static,
{
    Some(wrap_parts(cause?, message.into()))
}

/// Non-optional core of [`wrap`], shared with [`crate::extensions`].
pub(crate) fn wrap_parts<E>(cause: E, message: String) -> Error
where
    E: StdError + Send + Sync + 'static,
{
    let code = code_of(&cause);
    let labeled = Error {
        repr: Repr::WithMessage {
            cause: Box::new(cause),
            message,
            code,
        },
    };
    Error {
        repr: Repr::WithStack {
            cause: Box::new(labeled),
            stack: StackTrace::capture(),
        },
    }
}

/// Annotate `cause` with a message only; no stack is captured.
///
/// The new node inherits the cause's code when the cause exposes one,
/// and otherwise starts at [`CODE_NOT_DEFINED`]. An absent cause yields
/// `None`.
pub fn with_message<E>(cause: Option<E>, message: impl Into<String>) -> Option<Error>
where
    E: StdError + Send + Sync + 'static,
{
    let cause = cause?;
    let code = code_of(&cause);
    Some(Error {
        repr: Repr::WithMessage {
            cause: Box::new(cause),
            message: message.into(),
            code,
        },
    })
}

/// Annotate `cause` with a stack trace captured here; no message is
/// added. An absent cause yields `None`.
pub fn with_stack<E>(cause: Option<E>) -> Option<Error>
where
    E: StdError + Send + Sync + 'static,
{
    let cause = cause?;
    Some(Error {
        repr: Repr::WithStack {
            cause: Box::new(cause),
            stack: StackTrace::capture(),
        },
    })
}

/// Descend a chain to its innermost error.
///
/// Follows the cause link while the current value is an [`Error`] with a
/// cause, and stops at the first leaf or foreign error. Identity
/// preserving: the returned reference points at the original node, not a
/// copy. Terminates because chains are finite and acyclic by
/// construction.
#[must_use]
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(node) = current.downcast_ref::<Error>() {
        match node.cause() {
            Some(cause) => current = cause,
            None => break,
        }
    }
    current
}

/// Probe any error for a numeric code.
///
/// Errors that do not expose the code capability (anything other than an
/// [`Error`] from this crate) report [`CODE_NOT_DEFINED`].
#[must_use]
pub fn code_of(err: &(dyn StdError + 'static)) -> i32 {
    err.downcast_ref::<Error>()
        .map_or(CODE_NOT_DEFINED, Error::code)
}
