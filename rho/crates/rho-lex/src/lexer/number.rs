//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.
//!
//! # Number Formats
//!
//! - Integer: `0`, `42`, `123456`
//! - Float: `3.14`, `0.5`
//!
//! A `.` only joins a literal when a digit follows it, and only once. In
//! `1.2.3` the scanner stops after `1.2`; the second `.` is lexed again as
//! punctuation and `3` as a new integer. This is a recovery, not an error.

use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Returns
    ///
    /// Either `TokenKind::Int` with an `i64` value or `TokenKind::Float`
    /// with an `f64` value
    pub(crate) fn lex_number(&mut self) -> Result<Token> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let is_float =
            self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();

        if !is_float {
            let text = self.cursor.slice_from(self.token_start.offset);
            return match text.parse::<i64>() {
                Ok(value) => Ok(self.make_literal(TokenKind::Int, TokenValue::Int(value))),
                Err(_) => Err(self.number_out_of_range(text)),
            };
        }

        self.cursor.advance();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let text = self.cursor.slice_from(self.token_start.offset);
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Ok(self.make_literal(TokenKind::Float, TokenValue::Float(value)))
            },
            _ => Err(self.number_out_of_range(text)),
        }
    }

    fn number_out_of_range(&self, text: &str) -> LexError {
        LexError::NumberOutOfRange {
            text: text.to_string(),
            position: self.token_start,
        }
    }
}
