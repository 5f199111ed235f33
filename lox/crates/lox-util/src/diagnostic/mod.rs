//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the types used to record lexical faults while a scan
//! runs and to report them afterwards:
//!
//! - [`Diagnostic`] - one immutable (line, message, context) record
//! - [`DiagnosticCode`] - stable identifier of the fault kind
//! - [`DiagnosticBuilder`] - fluent construction of a diagnostic
//! - [`Handler`] - the append-only sink diagnostics are collected into
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.create(1, "Unexpected character.", "at '@'");
//!
//! let mut out = Vec::new();
//! handler.report(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "[line 1] Error at '@': Unexpected character.\n"
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use codes::{
    E_LEXER_COMMENT_TOO_DEEP, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_COMMENT,
    E_LEXER_UNTERMINATED_STRING,
};

use crate::error::DiagnosticResult;
use crate::Span;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;

/// A recorded lexical error
///
/// Diagnostics are immutable once emitted. `line` is the line reported to
/// the user; `span` is the byte range of the offending text, whose own line
/// is where that text starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Main diagnostic message
    pub message: String,
    /// Context label, empty when there is none
    pub context: String,
    /// Reported line (1-based)
    pub line: u32,
    /// Source location of the offending text
    pub span: Span,
}

impl Diagnostic {
    /// Create a diagnostic without code or span
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::new(3, "Unterminated string.", "");
    /// assert_eq!(diag.line, 3);
    /// ```
    pub fn new(line: u32, message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            context: context.into(),
            line,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error", self.line)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        if !self.context.is_empty() {
            write!(f, " {}", self.context)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Sink for collecting and reporting diagnostics
///
/// The handler is an ordered, append-only collection: records are never
/// overwritten or deduplicated, and only [`reset`](Self::reset) removes
/// them. All methods take `&self`, so one handler can be lent to several
/// scans in a row (one per REPL line, for instance). It is not `Sync`; a
/// concurrent host gives every scan its own handler.
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.create(2, "Unterminated string.", "");
///
/// if handler.has_errors() {
///     eprintln!("scan failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Append a (line, message, context) record
    pub fn create(&self, line: u32, message: impl Into<String>, context: impl Into<String>) {
        self.emit_diagnostic(Diagnostic::new(line, message, context));
    }

    /// Append a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::diagnostic::{DiagnosticCode, Handler};
    /// use lox_util::Span;
    ///
    /// let handler = Handler::new();
    /// handler
    ///     .build_error(Span::new(0, 1, 1), "Unexpected character.")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .emit(&handler);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been recorded
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of recorded errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get a copy of all diagnostics in insertion order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics in insertion order
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Write every diagnostic to `out`, one per line, in insertion order
    pub fn report<W: Write>(&self, out: &mut W) -> DiagnosticResult<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diagnostic)?;
        }
        Ok(())
    }

    /// Clear all diagnostics so the handler can serve another scan
    pub fn reset(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .finish()
    }
}
