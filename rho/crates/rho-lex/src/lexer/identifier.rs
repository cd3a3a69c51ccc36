//! Identifier and keyword lexing.
//!
//! Identifiers and keywords share one scanning rule. The keyword table is
//! consulted only after the maximal run has been consumed, so `class1` is an
//! identifier and never `class` followed by `1`.

use super::core::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// # Returns
    ///
    /// A keyword token (e.g. `TokenKind::Class`) or `TokenKind::Ident`
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start.offset);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Ident);
        self.make_token(kind)
    }
}
