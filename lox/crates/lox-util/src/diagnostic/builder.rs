//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API before handing them to a [`Handler`].

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use lox_util::Span;
///
/// let diag = DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 6, 1))
///     .line(2)
///     .build();
///
/// assert_eq!(diag.line, 2);
/// assert_eq!(diag.span.line, 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    message: String,
    code: Option<DiagnosticCode>,
    context: String,
    line: u32,
    span: Span,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic with the given message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            context: String::new(),
            line: 0,
            span: Span::DUMMY,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the context label (e.g. `at '@'`)
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the source span.
    ///
    /// Also sets the reported line to the span's start line; call
    /// [`line`](Self::line) afterwards to report a different line.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self.line = span.line;
        self
    }

    /// Set the reported line (1-based)
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Finish building and return the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            code: self.code,
            message: self.message,
            context: self.context,
            line: self.line,
            span: self.span,
        }
    }

    /// Build the diagnostic and record it in `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
