//! rho-lex - Lexical Analyzer for the Rho Programming Language
//!
//! This crate turns Rho source text into a flat sequence of classified,
//! positioned tokens. It is the lexing core shared by the editor
//! highlighter and by any later parser.
//!
//! # Example Usage
//!
//! ```
//! use rho_lex::{Lexer, TokenKind};
//!
//! let source = "fun add(a, b) -> a + b";
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.scan().unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Fun);
//! assert_eq!(tokens[0].text(source), "fun");
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, values and the keyword/operator tables
//! - [`lexer`] - Scanning loop and sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical errors
//!
//! # Lossless Output
//!
//! Whitespace, newlines and `//` comments are tokens too, and every token
//! covers its delimiters. Concatenating the text of all tokens of a
//! successful scan reproduces the source exactly, so consumers can restyle
//! a buffer without losing a byte.
//!
//! ## Keywords
//!
//! `fun`, `class`, `assert`, `return`, `if`, `else`, `for`, `in`, `while`,
//! `break`, `continue`, `yield`, `new`, `self`, `true`, `false`
//!
//! ## Literals
//!
//! - **Integer**: `42` (fits `i64`)
//! - **Float**: `2.5`
//! - **String**: `"hello\n"`, may span lines
//! - **Char**: `'a'`, `'\''`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`, `^`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`
//! - **Other**: `->`, `(`, `)`, `[`, `]`, `,`, `;`, `:`, `.`
//!
//! ## Pi Slices
//!
//! `{ ... }` embeds code in the Pi stack language. It is kept as one opaque
//! `PiSlice` token; nested braces are matched.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, Result};
pub use lexer::{tokenize, Lexer, Tokens};
pub use token::{
    keyword_from_ident, longest_operator, Token, TokenKind, TokenValue, UnknownTokenKind,
};
