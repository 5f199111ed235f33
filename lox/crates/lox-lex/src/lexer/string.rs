//! String literal lexing.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal. The opening `"` has already been consumed.
    ///
    /// Strings may span lines and have no escape sequences: a backslash is
    /// an ordinary character. The literal value is the text between the
    /// quotes. Hitting end of input first records
    /// [`LexError::UnterminatedString`] and produces no token.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report_error(LexError::UnterminatedString);
            return None;
        }

        // Closing quote.
        self.cursor.advance();

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.make_literal_token(TokenKind::String, Literal::String(value.to_string()))
    }
}
