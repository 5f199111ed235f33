//! lox-lex - Lexical Analyzer for the Lox Scripting Language
//!
//! This crate turns Lox source text into a flat sequence of tokens for the
//! parser. Lexical faults never stop a scan: they are recorded as
//! diagnostics and scanning resumes with the next character, so every input
//! produces a complete token stream ending with one end-of-input token.
//!
//! # Example Usage
//!
//! With a caller-owned error sink, which can be reset and reused between
//! scans (the REPL does this):
//!
//! ```
//! use lox_lex::{Scanner, TokenKind};
//! use lox_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = Scanner::new("var x = 42;", &handler).scan_tokens();
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Var);
//! assert_eq!(tokens[3].literal().as_number(), Some(42.0));
//! assert!(!handler.has_errors());
//! ```
//!
//! Or self-contained, with the errors returned beside the tokens:
//!
//! ```
//! use lox_lex::{scan, TokenKind};
//!
//! let result = scan("@+");
//! assert_eq!(result.errors.len(), 1);
//! assert_eq!(result.tokens[0].kind(), TokenKind::Plus);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind and literal definitions
//! - [`lexer`] - Main scanner implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`keyword`] - Reserved-word table
//! - [`unicode`] - Character classification for digits and identifiers
//! - [`config`] - Scanner options
//! - [`error`] - Lexical fault kinds and their diagnostic codes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, or Unicode letters with
//! [`IdentifierPolicy::Unicode`].
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.5` (no sign, exponent or leading dot)
//! - **String**: `"hello"`, may span lines, no escape sequences
//!
//! ## Operators and Delimiters
//!
//! `( ) { } , . - + ; * /` and `! != = == < <= > >=`
//!
//! ## Comments
//!
//! `// line` and `/* block */`; nesting is opt-in through [`ScanConfig`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

use lox_util::{Diagnostic, Handler};

// Re-export main types for convenience
pub use config::{IdentifierPolicy, ScanConfig};
pub use cursor::Cursor;
pub use error::LexError;
pub use keyword::{keyword_from_ident, keyword_table, KEYWORDS};
pub use lexer::Scanner;
pub use token::{Literal, Token, TokenKind};

/// Tokens and lexical errors of one self-contained scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    /// All tokens, ending with [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    /// Lexical errors in the order they were found.
    pub errors: Vec<Diagnostic>,
}

impl ScanResult {
    /// Returns true if any lexical error was found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scans `source` with the default configuration.
pub fn scan(source: &str) -> ScanResult {
    scan_with_config(source, ScanConfig::default())
}

/// Scans `source` with `config`, using a private error sink.
pub fn scan_with_config(source: &str, config: ScanConfig) -> ScanResult {
    let handler = Handler::new();
    let tokens = Scanner::with_config(source, &handler, config).scan_tokens();
    ScanResult {
        tokens,
        errors: handler.take(),
    }
}
