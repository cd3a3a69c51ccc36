//! Pi slice lexing.
//!
//! Rho source may embed Pi code between braces: `{ 1 2 + }`. The lexer does
//! not tokenize Pi; it finds the matching close brace and emits the whole
//! region, braces included, as one `PiSlice` token. Nested braces are
//! counted, and braces inside Pi string literals do not count.

use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a Pi slice from `{` to its matching `}`.
    pub(crate) fn lex_pi_slice(&mut self) -> Result<Token> {
        self.cursor.advance();
        let mut depth: u32 = 1;

        while depth > 0 {
            if self.cursor.is_at_end() {
                return Err(self.unterminated_pi_slice());
            }

            match self.cursor.current_char() {
                '{' => depth += 1,
                '}' => depth -= 1,
                '"' => {
                    self.skip_pi_string()?;
                    continue;
                },
                _ => {},
            }
            self.cursor.advance();
        }

        Ok(self.make_token(TokenKind::PiSlice))
    }

    /// Skips a `"..."` literal inside Pi code, honouring `\` escapes.
    fn skip_pi_string(&mut self) -> Result<()> {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.unterminated_pi_slice());
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Ok(());
                },
                '\\' => self.cursor.advance_n(2),
                _ => self.cursor.advance(),
            }
        }
    }

    fn unterminated_pi_slice(&self) -> LexError {
        LexError::UnterminatedPiSlice {
            position: self.token_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use rho_util::Position;

    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::tokenize;

    #[test]
    fn test_simple_pi_slice() {
        let source = "x = { 1 2 + }";
        let tokens = tokenize(source).unwrap();
        let pi = &tokens[4];
        assert_eq!(pi.kind, TokenKind::PiSlice);
        assert_eq!(pi.text(source), "{ 1 2 + }");
        assert_eq!(pi.inner_span().slice(source), " 1 2 + ");
        assert_eq!(pi.value, None);
        assert!(tokens[5].is_eof());
    }

    #[test]
    fn test_nested_braces() {
        let source = "{ { a } { b } }c";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].text(source), "{ { a } { b } }");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_braces_in_pi_strings_are_ignored() {
        let source = r#"{ "}" "\"{" }"#;
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::PiSlice);
        assert_eq!(tokens[0].span.len(), source.len());
    }

    #[test]
    fn test_pi_slice_spans_lines() {
        let source = "{\n1\n}\nx";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[0].text(source), "{\n1\n}");
        assert_eq!(tokens[2].span.line, 4);
    }

    #[test]
    fn test_unterminated_pi_slice() {
        assert_eq!(
            tokenize("a { { }").unwrap_err(),
            LexError::UnterminatedPiSlice {
                position: Position::new(2, 1, 3)
            }
        );
        assert!(matches!(
            tokenize("{ \"}").unwrap_err(),
            LexError::UnterminatedPiSlice { .. }
        ));
    }
}
