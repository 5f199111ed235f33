//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, its dispatch loop and the
//! token/error constructors shared by the other lexer submodules.

use lox_util::{Handler, Span};
use tracing::trace;

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};
use crate::unicode::is_decimal_digit;

/// Scanner for Lox source code.
///
/// The scanner transforms source text into tokens in a single pass. Faults
/// are recorded in the borrowed [`Handler`] and never stop the scan, so
/// every input yields a complete token sequence ending with exactly one
/// [`TokenKind::Eof`].
///
/// All cursor state lives in the scanner value itself; a scanner is used for
/// one source buffer and then dropped.
///
/// # Example
///
/// ```
/// use lox_lex::{Scanner, TokenKind};
/// use lox_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Scanner::new("print 1 + 2;", &handler).scan_tokens();
///
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].kind(), TokenKind::Print);
/// assert_eq!(tokens[5].kind(), TokenKind::Eof);
/// assert!(!handler.has_errors());
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical errors.
    handler: &'a Handler,

    /// Scanner options.
    pub(crate) config: ScanConfig,

    /// Starting byte offset of the lexeme being scanned.
    pub(crate) token_start: usize,

    /// Line on which the lexeme being scanned starts (1-based).
    token_start_line: u32,

    /// Set once the end-of-input token has been produced.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_config(source, handler, ScanConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(source: &'a str, handler: &'a Handler, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            config,
            token_start: 0,
            token_start_line: 1,
            finished: false,
        }
    }

    /// Scans the whole source and returns its tokens.
    ///
    /// The last token is always the end-of-input token. Errors found along
    /// the way are in the handler.
    pub fn scan_tokens(self) -> Vec<Token> {
        let errors_before = self.handler.error_count();
        let source_len = self.cursor.source().len();
        let handler = self.handler;

        let tokens: Vec<Token> = self.collect();

        trace!(
            bytes = source_len,
            tokens = tokens.len(),
            errors = handler.error_count().saturating_sub(errors_before),
            "scan finished"
        );
        tokens
    }

    /// Returns the next token, or `None` once the end-of-input token has
    /// been returned.
    ///
    /// Whitespace, comments and faulty input are consumed without producing
    /// a token; this keeps going until a token is made or input runs out.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            if let Some(token) = self.scan_token() {
                return Some(token);
            }
        }

        self.finished = true;
        Some(Token::eof(self.cursor.position(), self.cursor.line()))
    }

    /// Consumes exactly one lexical unit starting at `token_start`.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance()?;

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            ' ' | '\r' | '\t' | '\n' => None,
            '"' => self.lex_string(),
            c if is_decimal_digit(c) => self.lex_number(),
            c if self.config.identifiers.is_start(c) => self.lex_identifier(),
            c => {
                self.report_error(LexError::UnexpectedCharacter(c));
                None
            },
        }
    }

    /// Makes a token of `kind` from the current lexeme, with no literal.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Option<Token> {
        self.make_literal_token(kind, Literal::None)
    }

    /// Makes a token of `kind` from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Option<Token> {
        Some(Token::new(kind, self.lexeme(), literal, self.token_span()))
    }

    /// The text scanned so far for the current lexeme.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    fn token_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position(), self.token_start_line)
    }

    /// Records `error` for the current lexeme, reported at the current line.
    pub(crate) fn report_error(&self, error: LexError) {
        trace!(line = self.cursor.line(), %error, "lexical error");
        self.handler
            .build_error(self.token_span(), error.to_string())
            .code(error.code())
            .context(error.context())
            .line(self.cursor.line())
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the configuration this scanner runs with.
    pub fn config(&self) -> ScanConfig {
        self.config
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
