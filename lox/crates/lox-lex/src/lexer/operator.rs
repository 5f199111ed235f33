//! Operator lexing.
//!
//! This module handles the one-or-two character operators and the slash,
//! which may also open a comment. The first character has already been
//! consumed when these are called.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes bang or bang-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Option<Token> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        };
        self.make_token(kind)
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Option<Token> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        };
        self.make_token(kind)
    }

    /// Lexes less-than or less-equal.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Option<Token> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        };
        self.make_token(kind)
    }

    /// Lexes greater-than or greater-equal.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Option<Token> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        };
        self.make_token(kind)
    }

    /// Lexes slash or skips a comment.
    ///
    /// Handles: `/`, `// ...`, `/* ... */`
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }

        if self.cursor.match_char('*') {
            self.skip_block_comment();
            return None;
        }

        self.make_token(TokenKind::Slash)
    }
}
