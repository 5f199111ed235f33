//! Comment skipping.
//!
//! This module handles line and block comments. The opening `//` or `/*`
//! has already been consumed when these are called.

use crate::config::ScanConfig;
use crate::error::LexError;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips a line comment up to, but not including, the newline.
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment, including its closing `*/`.
    ///
    /// Without `nested_comments` the first `*/` closes the comment. With it,
    /// every `/*` needs its own `*/`. Reaching end of input inside the
    /// comment records [`LexError::UnterminatedBlockComment`].
    pub(crate) fn skip_block_comment(&mut self) {
        let mut depth: u32 = 1;

        loop {
            if self.cursor.is_at_end() {
                self.report_error(LexError::UnterminatedBlockComment);
                return;
            }

            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
                if depth == 0 {
                    return;
                }
            } else if self.config.nested_comments
                && self.cursor.current_char() == '/'
                && self.cursor.peek_char(1) == '*'
            {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
                if depth > ScanConfig::MAX_COMMENT_DEPTH {
                    self.report_error(LexError::CommentNestingTooDeep {
                        max: ScanConfig::MAX_COMMENT_DEPTH,
                    });
                    // Depth is no longer tracked; the rest of input is comment.
                    self.cursor.eat_while(|_| true);
                    return;
                }
            } else {
                self.cursor.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Literal, ScanConfig, Scanner, TokenKind};
    use lox_util::{DiagnosticCode, Handler};

    #[test]
    fn test_skip_line_comment() {
        let handler = Handler::new();
        let tokens = Scanner::new("// comment\nhello", &handler).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].line(), 2);
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let handler = Handler::new();
        let tokens = Scanner::new("1 // trailing", &handler).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind(), TokenKind::Eof);
        assert_eq!(tokens[1].line(), 1);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_skip_block_comment() {
        let handler = Handler::new();
        let tokens = Scanner::new("/* comment */hello", &handler).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "hello");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_block_comment_counts_lines() {
        let handler = Handler::new();
        let tokens = Scanner::new("/* a\nb\nc */ 7", &handler).scan_tokens();
        assert_eq!(tokens[0].literal(), &Literal::Number(7.0));
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn test_block_comment_star_inside() {
        let handler = Handler::new();
        let tokens = Scanner::new("/* a * b **/x", &handler).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "x");
    }

    #[test]
    fn test_first_closer_ends_block_comment() {
        let handler = Handler::new();
        let tokens = Scanner::new("/* outer /* inner */ x */", &handler).scan_tokens();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof
            ]
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_skip_nested_block_comment() {
        let handler = Handler::new();
        let config = ScanConfig::default().with_nested_comments(true);
        let tokens =
            Scanner::with_config("/* outer /* inner */ outer */hello", &handler, config)
                .scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "hello");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_unterminated_block_comment() {
        let handler = Handler::new();
        let tokens = Scanner::new("/* open\n\n", &handler).scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Eof);
        assert_eq!(tokens[0].line(), 3);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_unterminated_nested_block_comment() {
        let handler = Handler::new();
        let config = ScanConfig::default().with_nested_comments(true);
        Scanner::with_config("/* a /* b */", &handler, config).scan_tokens();
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
    }

    #[test]
    fn test_nesting_too_deep() {
        let handler = Handler::new();
        let config = ScanConfig::default().with_nested_comments(true);
        let depth = ScanConfig::MAX_COMMENT_DEPTH as usize + 1;
        let source = format!("{} x", "/*".repeat(depth));
        let tokens = Scanner::with_config(&source, &handler, config).scan_tokens();

        assert_eq!(tokens.len(), 1);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_COMMENT_TOO_DEEP));
    }
}
