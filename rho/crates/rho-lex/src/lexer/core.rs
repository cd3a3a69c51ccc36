//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-character dispatch and
//! the scanning pass that collects the token sequence.

use rho_util::{Position, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind, TokenValue};

/// Lexer for Rho source.
///
/// A lexer is built over exactly one source string. [`Lexer::scan`] runs a
/// single pass over it and keeps the resulting tokens; later calls return
/// the same tokens. [`Lexer::reset`] discards them and rewinds to the start.
///
/// # Example
///
/// ```
/// use rho_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("a <= 1");
/// let kinds: Vec<_> = lexer.scan().unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Ident,
///         TokenKind::Whitespace,
///         TokenKind::LessEquiv,
///         TokenKind::Whitespace,
///         TokenKind::Int,
///         TokenKind::Eof,
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Where the token being lexed starts.
    pub(crate) token_start: Position,

    /// Tokens produced by the last successful scan.
    tokens: Vec<Token>,

    /// Whether `tokens` holds a complete scan.
    scanned: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: Position::START,
            tokens: Vec::new(),
            scanned: false,
        }
    }

    /// Scans the whole source and returns the token sequence.
    ///
    /// The sequence ends with exactly one [`TokenKind::Eof`]. On error no
    /// tokens are kept and the error describes the first problem found.
    pub fn scan(&mut self) -> Result<&[Token]> {
        if self.scanned {
            return Ok(&self.tokens);
        }

        self.reset();
        debug!(bytes = self.cursor.source().len(), "scanning rho source");

        loop {
            match self.next_token() {
                Ok(token) => {
                    let is_eof = token.is_eof();
                    self.tokens.push(token);
                    if is_eof {
                        break;
                    }
                },
                Err(err) => {
                    debug!(error = %err, "lexical error");
                    self.tokens.clear();
                    return Err(err);
                },
            }
        }

        self.scanned = true;
        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(&self.tokens)
    }

    /// Returns the next token from the source.
    ///
    /// This is the per-token step of [`Lexer::scan`]: it dispatches on the
    /// current character to the matching sub-scanner. At end of input it
    /// returns a zero-length `Eof` token, and keeps doing so.
    pub fn next_token(&mut self) -> Result<Token> {
        self.token_start = self.cursor.snapshot();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let token = match self.cursor.current_char() {
            '\n' => {
                self.cursor.advance();
                self.make_token(TokenKind::NewLine)
            },
            c if is_inline_whitespace(c) => self.lex_whitespace(),
            '/' if self.cursor.peek_char(1) == '/' => self.lex_comment(),
            '"' => self.lex_string()?,
            '\'' => self.lex_char()?,
            '{' => self.lex_pi_slice()?,
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number()?,
            c => self.lex_operator(c)?,
        };

        trace!(kind = %token.kind, span = %token.span, "token");
        Ok(token)
    }

    /// Returns the tokens of the last successful scan.
    ///
    /// Empty before [`Lexer::scan`] succeeds.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the lexer, returning the tokens of the last successful scan.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Discards all tokens and rewinds the cursor to offset zero.
    pub fn reset(&mut self) {
        self.cursor.restore(Position::START);
        self.token_start = Position::START;
        self.tokens.clear();
        self.scanned = false;
    }

    /// Returns the source being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::from_position(self.token_start, self.cursor.position())
    }

    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_span())
    }

    pub(crate) fn make_literal(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::literal(kind, self.token_span(), value)
    }
}

/// Whitespace other than the newline, which is a token of its own.
pub(crate) fn is_inline_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Letters and underscore start identifiers.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Letters, digits and underscore continue identifiers.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Iterator over the tokens of a [`Lexer`], produced by its
/// [`IntoIterator`] impl. Iteration starts from offset zero, whatever the
/// lexer had already scanned.
///
/// Yields tokens up to and including `Eof`, or up to the first error.
///
/// # Example
///
/// ```
/// use rho_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("a b")
///     .into_iter()
///     .map(|token| token.unwrap().kind)
///     .collect();
/// assert_eq!(kinds.last(), Some(&TokenKind::Eof));
/// ```
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.lexer.next_token();
        if item.as_ref().map_or(true, Token::is_eof) {
            self.done = true;
        }
        Some(item)
    }
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Result<Token>;
    type IntoIter = Tokens<'a>;

    fn into_iter(mut self) -> Tokens<'a> {
        self.reset();
        Tokens {
            lexer: self,
            done: false,
        }
    }
}

/// Tokenizes `source` in one pass.
///
/// # Example
///
/// ```
/// use rho_lex::{tokenize, TokenKind, TokenValue};
///
/// let tokens = tokenize("1.5").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Float);
/// assert_eq!(tokens[0].value, Some(TokenValue::Float(1.5)));
/// assert!(tokens[1].is_eof());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    lexer.scan()?;
    Ok(lexer.into_tokens())
}

/// Shorthand for the error raised on a character no rule accepts.
pub(crate) fn invalid_character(ch: char, position: Position) -> LexError {
    LexError::InvalidCharacter { ch, position }
}
