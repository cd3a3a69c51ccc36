//! Operator and punctuation lexing.
//!
//! Operators are matched by maximal munch against the operator table, which
//! is ordered longest spelling first: `<=` wins over `<`.

use super::core::invalid_character;
use crate::error::Result;
use crate::token::{longest_operator, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest operator or punctuation at the cursor.
    ///
    /// `current` is the character under the cursor, reported if no
    /// operator starts with it.
    pub(crate) fn lex_operator(&mut self, current: char) -> Result<Token> {
        let (symbol, kind) = longest_operator(self.cursor.remaining())
            .ok_or_else(|| invalid_character(current, self.token_start))?;

        // Operator spellings are ASCII, so bytes and characters agree.
        self.cursor.advance_n(symbol.len());
        Ok(self.make_token(kind))
    }
}
