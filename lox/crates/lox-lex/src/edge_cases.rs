//! Edge case tests for lox-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Literal, Token, TokenKind};
    use lox_util::DiagnosticCode;

    fn lex_all(source: &str) -> Vec<Token> {
        let result = scan(source);
        assert!(!result.has_errors(), "unexpected errors for {source:?}");
        result.tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let t = lex_all("");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::Eof);
        assert_eq!(t[0].lexeme(), "");
        assert_eq!(t[0].line(), 1);
    }

    #[test]
    fn test_edge_whitespace_only() {
        let t = lex_all(" \t\r\n\n ");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].line(), 3);
    }

    #[test]
    fn test_edge_single_char_tokens() {
        let cases = [
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
            ("{", TokenKind::LeftBrace),
            ("}", TokenKind::RightBrace),
            (",", TokenKind::Comma),
            (".", TokenKind::Dot),
            ("-", TokenKind::Minus),
            ("+", TokenKind::Plus),
            (";", TokenKind::Semicolon),
            ("*", TokenKind::Star),
        ];
        for (source, kind) in cases {
            let t = lex_all(source);
            assert_eq!(t.len(), 2, "{source}");
            assert_eq!(t[0].kind(), kind);
            assert_eq!(t[0].lexeme(), source);
            assert!(t[0].literal().is_none());
        }
    }

    #[test]
    fn test_edge_comment_then_number() {
        let t = lex_all("// comment\n42");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].kind(), TokenKind::Number);
        assert_eq!(t[0].literal(), &Literal::Number(42.0));
        assert_eq!(t[0].line(), 2);
    }

    #[test]
    fn test_edge_unterminated_string_only() {
        let result = scan("\"unterminated");
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind(), TokenKind::Eof);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(result.errors[0].line, 1);
    }

    #[test]
    fn test_edge_decimal_and_trailing_dot() {
        let t = lex_all("123.45");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].literal(), &Literal::Number(123.45));

        let t = lex_all("123.");
        assert_eq!(t[0].literal(), &Literal::Number(123.0));
        assert_eq!(t[1].kind(), TokenKind::Dot);
    }

    #[test]
    fn test_edge_reserved_words() {
        assert_eq!(
            kinds("and or class"),
            vec![TokenKind::And, TokenKind::Or, TokenKind::Class, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_unexpected_char_then_plus() {
        let result = scan("@+");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].code,
            Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
        );
        assert_eq!(result.tokens.len(), 2);
        assert_eq!(result.tokens[0].kind(), TokenKind::Plus);
        assert_eq!(result.tokens[0].lexeme(), "+");
    }

    #[test]
    fn test_edge_unterminated_block_comment() {
        let result = scan("/* open");
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
        );
    }

    #[test]
    fn test_edge_stray_comment_close() {
        assert_eq!(
            kinds("*/"),
            vec![TokenKind::Star, TokenKind::Slash, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert_eq!(t[1].lexeme(), name);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        assert_eq!(
            kinds("x=1;y>=2"),
            vec![
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::GreaterEqual,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_every_unexpected_char_reported() {
        let result = scan("#$%^&|?:[]~`");
        assert_eq!(result.errors.len(), 12);
        assert_eq!(result.tokens.len(), 1);
    }

    #[test]
    fn test_edge_error_recovery_keeps_tokens() {
        let result = scan("var a = 1 @ 2;");
        assert_eq!(result.errors.len(), 1);
        let k: Vec<_> = result.tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            k,
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_nul_character() {
        let result = scan("a\0b");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].context, "at '\\0'");
        assert_eq!(result.tokens.len(), 3);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\n");
        assert_eq!(t[1].line(), 2);
        assert_eq!(t[2].line(), 3);
    }

    #[test]
    fn test_edge_eof_line_after_multiline_string() {
        let t = lex_all("\"a\nb\"");
        assert_eq!(t[0].line(), 1);
        assert_eq!(t[1].line(), 2);
    }

    #[test]
    fn test_edge_slash_slash_inside_string() {
        let t = lex_all("\"http://x\"");
        assert_eq!(t[0].literal(), &Literal::String("http://x".into()));
    }

    #[test]
    fn test_edge_comment_markers_inside_comment() {
        assert_eq!(kinds("// /* not a block\n1"), vec![TokenKind::Number, TokenKind::Eof]);
        assert_eq!(kinds("/* // */ 1"), vec![TokenKind::Number, TokenKind::Eof]);
    }
}
