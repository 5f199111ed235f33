//! Reserved-word table.
//!
//! The table is built once on first use and never mutated afterwards.
//! Lookup is case-sensitive: `class` is a keyword, `Class` is an identifier.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Every reserved word with its token kind.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

static KEYWORD_TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

/// Get the global keyword table (lazily initialized).
pub fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    KEYWORD_TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Looks up `ident` in the keyword table.
///
/// # Example
///
/// ```
/// use lox_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
#[inline]
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    keyword_table().get(ident).copied()
}
