//! Stack capture and frame resolution
//!
//! Captures raw instruction pointers at annotation time and resolves them
//! to symbol names, file paths, and line numbers lazily, only when a trace
//! is actually formatted. Errors that are never printed pay only for the
//! unwind walk, not for symbolication.

use core::ffi::c_void;
use once_cell::sync::OnceCell;
use std::fmt;

/// Leading frames that belong to the capture machinery itself (the
/// `backtrace::trace` internals plus [`StackTrace::capture`]).
const CAPTURE_SKIP: usize = 3;

/// Upper bound on captured frames per trace.
const MAX_DEPTH: usize = 32;

/// Placeholder printed for any symbol detail that cannot be resolved.
const UNKNOWN: &str = "unknown";

/// Resolved symbol details for a single frame.
///
/// Every field is optional: symbolication can fail for inlined or
/// optimized code, and formatting degrades to placeholders instead of
/// erroring.
#[derive(Debug, Default, Clone)]
struct Symbol {
    name: Option<String>,
    file: Option<String>,
    line: Option<u32>,
}

/// One call site in a captured stack trace.
///
/// Holds the raw instruction pointer captured during the unwind walk and
/// a lazily populated cache of its resolved symbol information. Immutable
/// once captured.
#[derive(Debug)]
pub struct Frame {
    ip: usize,
    symbol: OnceCell<Symbol>,
}

impl Frame {
    fn new(ip: usize) -> Self {
        Self {
            ip,
            symbol: OnceCell::new(),
        }
    }

    /// The raw program counter for this call site.
    #[must_use]
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// The resolved function name, or `"unknown"`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.resolve().name.as_deref().unwrap_or(UNKNOWN)
    }

    /// The resolved source file path, or `"unknown"`.
    #[must_use]
    pub fn file(&self) -> &str {
        self.resolve().file.as_deref().unwrap_or(UNKNOWN)
    }

    /// The resolved source line, or `0` when unavailable.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.resolve().line.unwrap_or(0)
    }

    /// Resolve and cache symbol information for this frame.
    ///
    /// The resolver may report several symbols for one address when code
    /// was inlined; the first reported value of each field wins.
    fn resolve(&self) -> &Symbol {
        self.symbol.get_or_init(|| {
            let mut symbol = Symbol::default();
            backtrace::resolve(self.ip as *mut c_void, |resolved| {
                if symbol.name.is_none() {
                    symbol.name = resolved.name().map(|name| name.to_string());
                }
                if symbol.file.is_none() {
                    symbol.file = resolved.filename().map(|path| path.display().to_string());
                }
                if symbol.line.is_none() {
                    symbol.line = resolved.lineno();
                }
            });
            symbol
        })
    }

    fn file_basename(&self) -> &str {
        let file = self.file();
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    }
}

impl fmt::Display for Frame {
    /// `{}` renders `file:line` with the file shortened to its basename;
    /// `{:#}` renders the function name on one line followed by a
    /// tab-indented `full/path:line`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}\n\t{}:{}", self.name(), self.file(), self.line())
        } else {
            write!(f, "{}:{}", self.file_basename(), self.line())
        }
    }
}

/// An ordered sequence of [`Frame`]s, innermost call site first.
///
/// Captured once at an annotation site and never mutated afterwards.
#[derive(Debug)]
pub struct StackTrace {
    frames: Vec<Frame>,
}

impl StackTrace {
    /// Walk the current call stack and record frame addresses.
    ///
    /// Always succeeds; an exhausted or unwalkable stack simply yields an
    /// empty trace. Symbol resolution is deferred to format time.
    pub(crate) fn capture() -> Self {
        let mut frames = Vec::new();
        let mut skipped = 0;
        backtrace::trace(|frame| {
            if skipped < CAPTURE_SKIP {
                skipped += 1;
                return true;
            }
            frames.push(Frame::new(frame.ip() as usize));
            frames.len() < MAX_DEPTH
        });
        Self { frames }
    }

    /// The captured frames, innermost first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of captured frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when no frames were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for StackTrace {
    /// `{}` renders a bracketed list of short frames; `{:#}` renders one
    /// detailed frame per line, each preceded by a newline so the trace
    /// can be appended directly after a message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for frame in &self.frames {
                write!(f, "\n{frame:#}")?;
            }
            Ok(())
        } else {
            f.write_str("[")?;
            for (index, frame) in self.frames.iter().enumerate() {
                if index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{frame}")?;
            }
            f.write_str("]")
        }
    }
}
