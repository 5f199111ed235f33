//! Character classification for the Lox lexer.
//!
//! The ASCII predicates are what the scanner uses by default. The Unicode
//! variants back [`IdentifierPolicy::Unicode`](crate::IdentifierPolicy) and
//! never change how digits are recognized: a number always starts with an
//! ASCII `0-9`.

/// Checks if a character is an ASCII decimal digit (`0-9`).
///
/// # Example
///
/// ```
/// use lox_lex::unicode::is_decimal_digit;
///
/// assert!(is_decimal_digit('0'));
/// assert!(is_decimal_digit('9'));
/// assert!(!is_decimal_digit('a'));
/// assert!(!is_decimal_digit('٣')); // Arabic-Indic three
/// ```
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may start an identifier: an ASCII letter or `_`.
///
/// # Example
///
/// ```
/// use lox_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('a'));
/// assert!(is_ascii_ident_start('Z'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('α'));  // Greek alpha
/// assert!(!is_ascii_ident_start('1'));
/// ```
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character may continue an identifier: an ASCII letter,
/// ASCII digit or `_`.
///
/// # Example
///
/// ```
/// use lox_lex::unicode::is_ascii_ident_continue;
///
/// assert!(is_ascii_ident_continue('a'));
/// assert!(is_ascii_ident_continue('_'));
/// assert!(is_ascii_ident_continue('1'));
/// assert!(!is_ascii_ident_continue('α'));
/// assert!(!is_ascii_ident_continue('+'));
/// ```
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character may start an identifier under the Unicode policy.
///
/// Accepts `_` and every character with the Unicode `Alphabetic` property.
///
/// # Example
///
/// ```
/// use lox_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier under the Unicode
/// policy.
///
/// # Example
///
/// ```
/// use lox_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('α'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
