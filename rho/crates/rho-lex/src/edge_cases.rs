//! Edge case tests for rho-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, LexErrorKind, Lexer, Token, TokenKind, TokenValue};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| !t.is_eof())
            .collect()
    }

    fn error_kind(source: &str) -> LexErrorKind {
        tokenize(source).unwrap_err().kind()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_underscore_ident() {
        let t = lex_all("_ _x x_1");
        assert!(t
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .all(|t| t.kind == TokenKind::Ident));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].span.len(), 10000);
    }

    #[test]
    fn test_edge_keyword_prefix_and_suffix() {
        let t = lex_all("iff fun_ _if");
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[2].kind, TokenKind::Ident);
        assert_eq!(t[4].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        let t = lex_all("While WHILE while");
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[2].kind, TokenKind::Ident);
        assert_eq!(t[4].kind, TokenKind::While);
    }

    #[test]
    fn test_edge_number_then_ident() {
        let t = lex_all("12ab");
        assert_eq!(t[0].value, Some(TokenValue::Int(12)));
        assert_eq!(t[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_dot_before_number() {
        let t = lex_all(".5");
        assert_eq!(t[0].kind, TokenKind::Dot);
        assert_eq!(t[1].value, Some(TokenValue::Int(5)));
    }

    #[test]
    fn test_edge_method_call_on_number() {
        let t = lex_all("1.abs");
        assert_eq!(t[0].kind, TokenKind::Int);
        assert_eq!(t[1].kind, TokenKind::Dot);
        assert_eq!(t[2].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_divide_is_not_comment() {
        let t = lex_all("a / b");
        assert_eq!(t[2].kind, TokenKind::Divide);
        let t = lex_all("a /= b");
        assert_eq!(t[2].kind, TokenKind::DivAssign);
    }

    #[test]
    fn test_edge_comment_at_end_of_input() {
        let t = lex_all("x // trailing");
        assert_eq!(t.last().map(|t| t.kind), Some(TokenKind::Comment));
    }

    #[test]
    fn test_edge_empty_comment() {
        let t = lex_all("//\n");
        assert_eq!(t[0].kind, TokenKind::Comment);
        assert_eq!(t[0].span.len(), 2);
        assert_eq!(t[1].kind, TokenKind::NewLine);
    }

    #[test]
    fn test_edge_comment_hides_invalid_characters() {
        assert!(tokenize("// @ # $").is_ok());
    }

    #[test]
    fn test_edge_quote_inside_other_literal() {
        let t = lex_all(r#""it's" '"'"#);
        assert_eq!(t[0].value, Some(TokenValue::Str("it's".into())));
        assert_eq!(t[2].value, Some(TokenValue::Char('"')));
    }

    #[test]
    fn test_edge_unicode_in_string_keeps_byte_spans() {
        let source = "\"héllo\" x";
        let t = lex_all(source);
        assert_eq!(t[0].span.len(), "\"héllo\"".len());
        assert_eq!(t[2].span.start, source.len() - 1);
        assert_eq!(t[2].span.column, 9);
    }

    #[test]
    fn test_edge_only_newlines() {
        let t = lex_all("\n\n\n");
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].span.line, 3);
        assert!(t.iter().all(|t| t.span.len() == 1));
    }

    #[test]
    fn test_edge_tabs_and_spaces_are_one_token() {
        let t = lex_all(" \t \r x");
        assert_eq!(t[0].kind, TokenKind::Whitespace);
        assert_eq!(t[0].span.len(), 5);
    }

    #[test]
    fn test_edge_eof_position() {
        let tokens = tokenize("ab\ncd").unwrap();
        let eof = tokens.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!((eof.span.start, eof.span.end), (5, 5));
        assert_eq!((eof.span.line, eof.span.column), (2, 3));
    }

    #[test]
    fn test_edge_error_positions() {
        let err = tokenize("a\n  'xy'").unwrap_err();
        assert_eq!(err.kind(), LexErrorKind::InvalidCharLiteral);
        assert_eq!((err.position().line, err.position().column), (2, 3));
    }

    #[test]
    fn test_edge_first_error_wins() {
        let err = tokenize("@ \"open").unwrap_err();
        assert!(matches!(err, LexError::InvalidCharacter { ch: '@', .. }));
    }

    #[test]
    fn test_edge_error_kinds() {
        assert_eq!(error_kind("\"abc"), LexErrorKind::UnterminatedString);
        assert_eq!(error_kind("'a"), LexErrorKind::UnterminatedChar);
        assert_eq!(error_kind("{"), LexErrorKind::UnterminatedPiSlice);
        assert_eq!(error_kind("#"), LexErrorKind::InvalidCharacter);
        assert_eq!(error_kind(r#""\x""#), LexErrorKind::InvalidEscape);
        assert_eq!(error_kind("''"), LexErrorKind::InvalidCharLiteral);
        assert_eq!(
            error_kind("99999999999999999999"),
            LexErrorKind::NumberOutOfRange
        );
    }

    #[test]
    fn test_edge_next_token_after_error_continues_from_cursor() {
        let mut lexer = Lexer::new("#x");
        assert!(lexer.next_token().is_err());
        // The offending character was not consumed.
        assert_eq!(lexer.position(), 0);
    }
}
