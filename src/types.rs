//! Core error type and chain variants

use crate::stack::StackTrace;

/// Sentinel meaning "no code assigned yet".
///
/// Freshly constructed errors carry this value until [`Error::set_code`]
/// is called, and probing an opaque foreign error for a code yields it as
/// the default.
pub const CODE_NOT_DEFINED: i32 = 0;

/// Boxed cause slot shared by the wrapping variants.
///
/// Any `std::error::Error` can sit at the bottom of a chain, not just
/// [`Error`] values produced by this crate.
pub(crate) type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error carrying a message chain, an application-defined numeric
/// code, and zero or more captured stack traces.
///
/// Chains are built outward: each annotation takes exclusive ownership of
/// the previous head and becomes the new outermost node, so chains are
/// finite and acyclic by construction. Nothing is mutated after
/// construction except the code field, via [`Error::set_code`].
pub struct Error {
    pub(crate) repr: Repr,
}

/// The chain node variants.
///
/// `Simple` is the terminal leaf; the two wrapping variants each add
/// exactly one annotation (a message layer or a stack layer) on top of an
/// owned cause.
pub(crate) enum Repr {
    /// A leaf error: message, code, and the stack captured at creation.
    Simple {
        message: String,
        code: i32,
        stack: StackTrace,
    },
    /// Adds a message layer over a cause, inheriting its code. No stack.
    WithMessage {
        cause: Cause,
        message: String,
        code: i32,
    },
    /// Adds a freshly captured stack over a cause. No message or code of
    /// its own; both delegate to the cause.
    WithStack { cause: Cause, stack: StackTrace },
}

/// Result alias for fallible operations that produce [`Error`] chains.
pub type Result<T> = std::result::Result<T, Error>;
