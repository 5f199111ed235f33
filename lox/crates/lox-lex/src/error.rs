//! Lexical error kinds.
//!
//! The scanner never returns these as `Err`: each one is turned into a
//! [`Diagnostic`](lox_util::Diagnostic) and recorded in the handler, and the
//! scan carries on with the next character.

use lox_util::DiagnosticCode;
use thiserror::Error;

/// The faults the scanner can record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached before the closing `"`.
    #[error("Unterminated string.")]
    UnterminatedString,

    /// No dispatch rule matches this character.
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),

    /// End of input was reached inside a `/* ... */` comment.
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment,

    /// Nested block comments went deeper than the scanner tracks.
    #[error("Block comment nesting too deep (maximum is {max} levels).")]
    CommentNestingTooDeep {
        /// The supported depth
        max: u32,
    },
}

impl LexError {
    /// Stable diagnostic code for this fault kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedBlockComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::CommentNestingTooDeep { .. } => DiagnosticCode::E_LEXER_COMMENT_TOO_DEEP,
        }
    }

    /// Context label attached to the diagnostic.
    pub fn context(&self) -> String {
        match self {
            LexError::UnexpectedCharacter(c) => format!("at {:?}", c),
            LexError::UnterminatedString
            | LexError::UnterminatedBlockComment
            | LexError::CommentNestingTooDeep { .. } => "at end".to_string(),
        }
    }
}
