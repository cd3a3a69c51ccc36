//! Lexical errors.
//!
//! Every error here is fatal to the scan that raised it: the lexer stops and
//! no partial token sequence is kept. Malformed decimals such as `1.2.3` are
//! not errors; the numeric scanner stops early and the rest is lexed again.

use rho_util::Position;
use thiserror::Error;

/// A lexical error: what went wrong and where.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A string literal reached end of input before its closing `"`.
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString {
        /// The opening quote.
        position: Position,
    },

    /// A character literal reached end of input before its closing `'`.
    #[error("unterminated character literal starting at {position}")]
    UnterminatedChar {
        /// The opening quote.
        position: Position,
    },

    /// A Pi slice reached end of input before its matching `}`.
    #[error("unterminated Pi slice starting at {position}")]
    UnterminatedPiSlice {
        /// The opening brace.
        position: Position,
    },

    /// A character that starts no token.
    #[error("invalid character {ch:?} at {position}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Where the character appears.
        position: Position,
    },

    /// A backslash followed by an unsupported character.
    #[error("invalid escape sequence '\\{ch}' at {position}")]
    InvalidEscape {
        /// The character after the backslash.
        ch: char,
        /// The backslash.
        position: Position,
    },

    /// A character literal that is empty or holds more than one character.
    #[error("character literal must hold exactly one character at {position}")]
    InvalidCharLiteral {
        /// The opening quote.
        position: Position,
    },

    /// A numeric literal whose value is not representable.
    #[error("numeric literal '{text}' is out of range at {position}")]
    NumberOutOfRange {
        /// The literal as written.
        text: String,
        /// Start of the literal.
        position: Position,
    },
}

/// The kind of a [`LexError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::UnterminatedString`]
    UnterminatedString,
    /// See [`LexError::UnterminatedChar`]
    UnterminatedChar,
    /// See [`LexError::UnterminatedPiSlice`]
    UnterminatedPiSlice,
    /// See [`LexError::InvalidCharacter`]
    InvalidCharacter,
    /// See [`LexError::InvalidEscape`]
    InvalidEscape,
    /// See [`LexError::InvalidCharLiteral`]
    InvalidCharLiteral,
    /// See [`LexError::NumberOutOfRange`]
    NumberOutOfRange,
}

impl LexError {
    /// Where the error was detected. For unterminated literals this is the
    /// opening delimiter.
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnterminatedChar { position }
            | LexError::UnterminatedPiSlice { position }
            | LexError::InvalidCharacter { position, .. }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidCharLiteral { position }
            | LexError::NumberOutOfRange { position, .. } => *position,
        }
    }

    /// The error kind.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::UnterminatedString { .. } => LexErrorKind::UnterminatedString,
            LexError::UnterminatedChar { .. } => LexErrorKind::UnterminatedChar,
            LexError::UnterminatedPiSlice { .. } => LexErrorKind::UnterminatedPiSlice,
            LexError::InvalidCharacter { .. } => LexErrorKind::InvalidCharacter,
            LexError::InvalidEscape { .. } => LexErrorKind::InvalidEscape,
            LexError::InvalidCharLiteral { .. } => LexErrorKind::InvalidCharLiteral,
            LexError::NumberOutOfRange { .. } => LexErrorKind::NumberOutOfRange,
        }
    }
}

/// Result type alias for lexing operations.
pub type Result<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LexError::InvalidCharacter {
            ch: '@',
            position: Position::new(4, 1, 5),
        };
        assert_eq!(err.to_string(), "invalid character '@' at 1:5");

        let err = LexError::InvalidEscape {
            ch: 'q',
            position: Position::new(1, 1, 2),
        };
        assert_eq!(err.to_string(), "invalid escape sequence '\\q' at 1:2");
    }

    #[test]
    fn test_position_and_kind() {
        let err = LexError::UnterminatedString {
            position: Position::START,
        };
        assert_eq!(err.position(), Position::START);
        assert_eq!(err.kind(), LexErrorKind::UnterminatedString);

        let err = LexError::NumberOutOfRange {
            text: "99999999999999999999".to_string(),
            position: Position::new(2, 1, 3),
        };
        assert_eq!(err.position().offset, 2);
        assert_eq!(err.kind(), LexErrorKind::NumberOutOfRange);
    }
}
