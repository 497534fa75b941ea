//! Macros for formatted construction and early returns
//!
//! Formatting is eager: the message string is built when the macro runs,
//! not when the error is printed.

/// Create a leaf [`Error`](crate::Error) from a format string.
///
/// Records a stack trace at the point it is invoked, exactly like
/// [`Error::new`](crate::Error::new).
///
/// ```
/// let err = errchain::errorf!("port {} already in use", 8443);
/// assert_eq!(err.message(), "port 8443 already in use");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::Error::new(::std::format!($($arg)*))
    };
}

/// [`wrap`](crate::wrap) with a format string for the message layer.
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)*) => {
        $crate::wrap($cause, ::std::format!($($arg)*))
    };
}

/// [`with_message`](crate::with_message) with a format string.
#[macro_export]
macro_rules! with_messagef {
    ($cause:expr, $($arg:tt)*) => {
        $crate::with_message($cause, ::std::format!($($arg)*))
    };
}

/// Return early with a freshly constructed [`Error`](crate::Error).
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::errorf!($($arg)*))
    };
}

/// Return early with an error unless the condition holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
