//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor owns the scan position: `position` is the next unread byte
/// offset and always sits on a character boundary, and `line` counts every
/// `'\n'` consumed so far. Neither ever moves backwards.
///
/// # Example
///
/// ```
/// use lox_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters past the current one.
    ///
    /// Returns '\0' when that position is past the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_char(0), '1');
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(2), '5');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path for ASCII (most common case)
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line tracking. Returns `None` and does nothing if already at
    /// end.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.advance(), Some('a'));
    /// assert_eq!(cursor.advance(), Some('\n'));
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds for the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false
    /// otherwise. Never matches at end of source.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("fun f");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "fun");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
