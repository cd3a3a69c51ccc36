//! String and character literal lexing.
//!
//! Both literal forms share one quoted-text sub-scanner that decodes escape
//! sequences. The decoded text and the source extent differ (`"a\"b"` covers
//! six source characters but decodes to three), which is why tokens keep
//! their span separately from their value.

use rho_util::Position;
use tracing::trace;

use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

/// The body of a quoted literal, between its delimiters.
struct Unescaped {
    /// Decoded text.
    text: String,
    /// Source characters consumed, escapes counted unexpanded.
    source_chars: usize,
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Parses text enclosed in double quotes, handling escape sequences.
    /// Strings may span lines.
    ///
    /// # Returns
    ///
    /// `TokenKind::String` whose value is the unescaped content
    pub(crate) fn lex_string(&mut self) -> Result<Token> {
        let body = self.scan_quoted('"', |position| LexError::UnterminatedString { position })?;
        trace!(
            decoded = body.text.chars().count(),
            source = body.source_chars,
            "string literal"
        );

        Ok(self.make_literal(TokenKind::String, TokenValue::Str(body.text)))
    }

    /// Lexes a character literal.
    ///
    /// The quotes must enclose exactly one character, which may be escaped.
    ///
    /// # Returns
    ///
    /// `TokenKind::Char` whose value is the decoded character
    pub(crate) fn lex_char(&mut self) -> Result<Token> {
        let open = self.token_start;
        let body = self.scan_quoted('\'', |position| LexError::UnterminatedChar { position })?;

        trace!(source = body.source_chars, "char literal");

        let mut chars = body.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.make_literal(TokenKind::Char, TokenValue::Char(c))),
            _ => Err(LexError::InvalidCharLiteral { position: open }),
        }
    }

    /// Scans from an opening `quote` to the matching unescaped closing one.
    ///
    /// `unterminated` builds the error raised when the input ends first; it
    /// receives the position of the opening quote.
    fn scan_quoted(
        &mut self,
        quote: char,
        unterminated: fn(Position) -> LexError,
    ) -> Result<Unescaped> {
        let open = self.token_start;
        self.cursor.advance();

        let mut body = Unescaped {
            text: String::new(),
            source_chars: 0,
        };

        loop {
            if self.cursor.is_at_end() {
                return Err(unterminated(open));
            }

            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                return Ok(body);
            }

            if c == '\\' {
                let (escaped, len) = self.scan_escape(open, unterminated)?;
                body.text.push(escaped);
                body.source_chars += len;
            } else {
                body.text.push(c);
                body.source_chars += 1;
                self.cursor.advance();
            }
        }
    }

    /// Decodes one escape sequence starting at the backslash.
    ///
    /// Handles: `\n`, `\t`, `\r`, `\0`, `\\`, `\"`, `\'`
    ///
    /// # Returns
    ///
    /// The decoded character and the number of source characters consumed
    fn scan_escape(
        &mut self,
        open: Position,
        unterminated: fn(Position) -> LexError,
    ) -> Result<(char, usize)> {
        let backslash = self.cursor.snapshot();
        self.cursor.advance();

        if self.cursor.is_at_end() {
            return Err(unterminated(open));
        }

        let c = self.cursor.current_char();
        let decoded = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            _ => {
                return Err(LexError::InvalidEscape {
                    ch: c,
                    position: backslash,
                })
            },
        };
        self.cursor.advance();

        Ok((decoded, 2))
    }
}
