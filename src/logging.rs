//! Logging helpers for reporting error chains
//!
//! Thin glue between this crate's renderings and the standard `log`
//! facade, backed by `env_logger`. This is reporting, not a sink: the
//! chain itself stays untouched.

use crate::constructors::code_of;
use crate::types::Error;
use log::{debug, error};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// `env_logger`-based reporting for error chains.
pub struct ChainLogger;

impl ChainLogger {
    /// Initialize the logging system (call once at application startup).
    ///
    /// Configure levels via the `RUST_LOG` environment variable, e.g.
    /// `RUST_LOG=debug` to see extended chain renderings.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();
        });
    }

    /// Initialize logging for test environments.
    ///
    /// Use this in test modules to avoid initialization conflicts.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed operation: short form at error level, the full
    /// extended rendering at debug level.
    pub fn log_chain(operation: &str, err: &Error) {
        error!("{operation} failed: {err}");
        debug!("{operation} failure detail:\n{err:#}");
    }

    /// Log only the innermost error of a chain, with its code.
    pub fn log_root_cause(operation: &str, err: &Error) {
        let root = err.root_cause();
        error!("{operation} root cause: {root} (code: {})", code_of(root));
    }
}
