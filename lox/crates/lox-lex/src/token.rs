//! Token type definitions.
//!
//! A [`Token`] is an immutable record of one lexeme: its [`TokenKind`], the
//! exact source text, an optional [`Literal`] value and the line it starts
//! on. Adding a new kind of lexeme means touching this enum, the keyword
//! table in [`crate::keyword`] and the scanner dispatch together.

use std::fmt;

use lox_util::Span;

/// The closed set of token kinds produced by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    // Single-character tokens
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// A name that is not a reserved word
    Identifier,
    /// `"..."`
    String,
    /// `123` or `123.45`
    Number,

    // Keywords
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Upper-case name of the kind, as printed by the driver.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for reserved-word kinds.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic value carried by string and number tokens.
///
/// `None` is a distinct variant, so an absent literal can never be mistaken
/// for an empty string or `0.0`.
///
/// With the `serde` feature a literal serializes as `null`, a string or a
/// number. Non-finite numbers, which JSON cannot hold, serialize as the
/// strings `"inf"`, `"-inf"` and `"NaN"` so they never read back as `null`.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// The token has no literal value
    None,
    /// Contents of a string literal, quotes excluded, escapes untouched
    String(String),
    /// Value of a number literal
    Number(f64),
}

impl Literal {
    /// Returns true if there is no literal value.
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }

    /// Returns the string value, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Literal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::None => serializer.serialize_unit(),
            Literal::String(s) => serializer.serialize_str(s),
            Literal::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Literal::Number(n) if n.is_nan() => serializer.serialize_str("NaN"),
            Literal::Number(n) if *n > 0.0 => serializer.serialize_str("inf"),
            Literal::Number(_) => serializer.serialize_str("-inf"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::String(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Literal,
    line: u32,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line: span.line,
            span,
        }
    }

    /// Creates the end-of-input token at byte `offset` on `line`.
    pub fn eof(offset: usize, line: u32) -> Self {
        Self::new(TokenKind::Eof, "", Literal::None, Span::point(offset, line))
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of this token; empty for [`TokenKind::Eof`].
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The literal value, [`Literal::None`] for non-literal kinds.
    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// The 1-based line on which this token starts.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte range of the lexeme in the source.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}
