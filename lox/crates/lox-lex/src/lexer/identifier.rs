//! Identifier and keyword lexing.

use crate::keyword::keyword_from_ident;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword. The first character has already been
    /// consumed.
    ///
    /// Which characters continue the identifier depends on the configured
    /// [`IdentifierPolicy`](crate::IdentifierPolicy). The finished lexeme
    /// is looked up in the keyword table, case-sensitively.
    pub(crate) fn lex_identifier(&mut self) -> Option<Token> {
        let policy = self.config.identifiers;
        self.cursor.eat_while(|c| policy.is_continue(c));

        let kind = keyword_from_ident(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
