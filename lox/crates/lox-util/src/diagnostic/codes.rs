//! Diagnostic codes for categorizing lexical errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so drivers and tests can tell fault kinds apart
//! without matching on message text.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::E_LEXER_UNTERMINATED_STRING.as_str(), "E1002");
    /// ```
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1005: Lexer - Unterminated block comment
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
    /// E1006: Lexer - Block comments nested past the supported depth
    pub const E_LEXER_COMMENT_TOO_DEEP: Self = Self::new("E", 1006);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DiagnosticCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}

/// See [`DiagnosticCode::E_LEXER_UNEXPECTED_CHAR`]
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
/// See [`DiagnosticCode::E_LEXER_UNTERMINATED_STRING`]
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
/// See [`DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT`]
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT;
/// See [`DiagnosticCode::E_LEXER_COMMENT_TOO_DEEP`]
pub const E_LEXER_COMMENT_TOO_DEEP: DiagnosticCode = DiagnosticCode::E_LEXER_COMMENT_TOO_DEEP;
