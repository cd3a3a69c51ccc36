//! Whitespace and comment lexing.
//!
//! Trivia is kept as tokens rather than skipped, so the token stream covers
//! the source exactly.

use super::core::is_inline_whitespace;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of whitespace, stopping before any newline.
    pub(crate) fn lex_whitespace(&mut self) -> Token {
        self.cursor.eat_while(is_inline_whitespace);
        self.make_token(TokenKind::Whitespace)
    }

    /// Lexes a `//` comment up to, but not including, the next newline.
    pub(crate) fn lex_comment(&mut self) -> Token {
        self.cursor.eat_while(|c| c != '\n');
        self.make_token(TokenKind::Comment)
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    #[test]
    fn test_whitespace_run_is_one_token() {
        let source = " \t  x";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[0].text(source), " \t  ");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_whitespace_stops_at_newline() {
        let tokens = tokenize("  \n  ").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Whitespace,
                TokenKind::NewLine,
                TokenKind::Whitespace,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[2].span.column, 1);
    }

    #[test]
    fn test_comment_excludes_newline() {
        let source = "x // note \"not a string\"\ny";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[2].text(source), "// note \"not a string\"");
        assert_eq!(tokens[3].kind, TokenKind::NewLine);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let tokens = tokenize("//").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].span.len(), 2);
        assert!(tokens[1].is_eof());
    }
}
