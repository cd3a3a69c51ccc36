//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `trivia` - Whitespace runs and line comments
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and float literal lexing
//! - `string` - String and character literal lexing
//! - `pi_slice` - Embedded Pi code spans
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;
mod pi_slice;
mod string;
mod trivia;

pub use self::core::{tokenize, Lexer, Tokens};
