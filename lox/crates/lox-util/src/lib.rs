//! lox-util - Core Utilities and Foundation Types
//!
//! This crate holds the small set of types shared by every phase of the Lox
//! front-end: source locations and the diagnostic machinery that collects
//! lexical faults while a scan runs.
//!
//! # Module Structure
//!
//! - [`span`] - Byte-range source locations with line information
//! - [`diagnostic`] - Diagnostics, diagnostic codes, the fluent builder and
//!   the [`Handler`] sink that collects them
//! - [`error`] - Error types for operations of this crate
//!
//! # Example
//!
//! ```
//! use lox_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1))
//!     .context("at '@'")
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! handler.reset();
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
