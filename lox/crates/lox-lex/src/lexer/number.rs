//! Number literal lexing.

use crate::token::{Literal, Token, TokenKind};
use crate::unicode::is_decimal_digit;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal. The first digit has already been consumed.
    ///
    /// Grammar: `DIGIT+ ( "." DIGIT+ )?`. A `.` is only part of the number
    /// when a digit follows it, so `1.` is a number then a dot. There is no
    /// sign, exponent or leading-dot form.
    pub(crate) fn lex_number(&mut self) -> Option<Token> {
        self.cursor.eat_while(is_decimal_digit);

        if self.cursor.current_char() == '.' && is_decimal_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_decimal_digit);
        }

        // The lexeme always matches the grammar above, which `f64` accepts;
        // very long literals saturate to infinity.
        let value = self.lexeme().parse::<f64>().unwrap_or(f64::NAN);
        self.make_literal_token(TokenKind::Number, Literal::Number(value))
    }
}
