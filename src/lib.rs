//! Error annotation primitives with context propagation
//!
//! This crate lets each layer of a call stack add context to a failure
//! without destroying the original error value:
//!
//! - Message chains: [`wrap`] and [`with_message`] record what the
//!   caller was doing when the underlying error surfaced.
//! - Numeric codes: every chain node carries an application-defined
//!   code, inherited outward until overridden with [`Error::set_code`].
//! - Stack traces: [`Error::new`], [`wrap`], and [`with_stack`] capture
//!   the call stack at the annotation site, resolved lazily at format
//!   time.
//!
//! # Adding context to an error
//!
//! ```
//! use errchain::{wrap, Error};
//!
//! fn read_config() -> errchain::Result<String> {
//!     let io_failure = Error::new("file not found");
//!     Err(wrap(Some(io_failure), "open config").expect("cause was present"))
//! }
//!
//! let err = read_config().unwrap_err();
//! assert_eq!(err.to_string(), "open config: file not found");
//! ```
//!
//! # Retrieving the cause of an error
//!
//! Wrapping is reversible: [`root_cause`] descends the chain and returns
//! the original error for inspection, stopping at the first value that
//! does not expose a cause (including foreign error types from other
//! crates). [`code_of`] probes any error for a numeric code the same
//! way, falling back to [`CODE_NOT_DEFINED`].
//!
//! # Formatted printing of errors
//!
//! Both renderings are selected through the standard formatting
//! machinery:
//!
//! - `{}` prints the short form: the `": "`-joined message chain.
//! - `{:#}` (and `{:?}`) prints the extended form: the full chain plus
//!   every captured stack trace, each frame as `function\n\tfile:line`.
//!
//! Annotation of an absent cause propagates absence (`None` in, `None`
//! out), and nothing in this crate can itself fail: unresolvable stack
//! frames degrade to placeholders rather than errors.

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
#[doc(hidden)]
pub mod macros;
pub mod stack;
pub mod types;

pub use constructors::{code_of, root_cause, with_message, with_stack, wrap};
pub use extensions::{OptionExt, ResultExt};
pub use logging::ChainLogger;
pub use stack::{Frame, StackTrace};
pub use types::{Error, Result, CODE_NOT_DEFINED};
