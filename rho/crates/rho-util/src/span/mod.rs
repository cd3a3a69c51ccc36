//! Span module - Source location tracking.
//!
//! This module provides types for representing locations in Rho source text:
//! a [`Position`] names a single character, a [`Span`] names a contiguous
//! range of characters.
//!
//! Offsets are byte offsets into the source string and always fall on
//! character boundaries. Spans are half-open (`start..end`), so a span over
//! `n` bytes has `end == start + n`. Lines and columns are 1-based; columns
//! count characters, not bytes.
//!
//! # Examples
//!
//! ```
//! use rho_util::span::Span;
//!
//! let source = "fun main";
//! let span = Span::new(4, 8, 1, 5);
//! assert_eq!(span.slice(source), "main");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SpanError, SpanResult};

/// A single location in source text.
///
/// # Examples
///
/// ```
/// use rho_util::span::Position;
///
/// let pos = Position::new(6, 2, 3);
/// assert_eq!(pos.to_string(), "2:3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset in source
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Create a new position
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a range in source text, identified by:
/// - Byte offsets (start, end), half-open
/// - Line and column of the first character (for human-readable output)
///
/// # Examples
///
/// ```
/// use rho_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
/// assert_eq!(span.slice("0123456789abcdefghijklm"), "abcdefghij");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use rho_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span that starts at `start` and ends at byte offset `end`
    #[inline]
    pub fn from_position(start: Position, end: usize) -> Self {
        Self::new(start.offset, end, start.line, start.column)
    }

    /// Returns true if this span covers no text
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use rho_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Shrink the span by one single-byte delimiter on each end
    ///
    /// Used for quoted and braced tokens, whose delimiters are always ASCII.
    ///
    /// # Examples
    ///
    /// ```
    /// use rho_util::span::Span;
    ///
    /// let span = Span::new(4, 9, 1, 5);
    /// let inner = span.shrink_delimiters();
    /// assert_eq!((inner.start, inner.end, inner.column), (5, 8, 6));
    /// ```
    #[inline]
    pub fn shrink_delimiters(self) -> Span {
        if self.len() < 2 {
            return Span {
                start: self.end,
                ..self
            };
        }
        Span {
            start: self.start + 1,
            end: self.end - 1,
            column: self.column + 1,
            ..self
        }
    }

    /// Slice the source text covered by this span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not belong to `source`. Use
    /// [`Span::checked_slice`] for spans of unknown origin.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }

    /// Slice the source text covered by this span, validating the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rho_util::span::Span;
    /// use rho_util::SpanError;
    ///
    /// let span = Span::new(2, 10, 1, 3);
    /// assert!(matches!(span.checked_slice("abc"), Err(SpanError::OutOfBounds { .. })));
    /// ```
    pub fn checked_slice<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        for offset in [self.start, self.end] {
            if !source.is_char_boundary(offset) {
                return Err(SpanError::NotCharBoundary { offset });
            }
        }
        Ok(&source[self.start..self.end])
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} [{}..{})", self.line, self.column, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(0, 1, 1).to_string(), "1:1");
        assert_eq!(Position::START, Position::new(0, 1, 1));
    }

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_from_position() {
        let span = Span::from_position(Position::new(3, 2, 1), 7);
        assert_eq!(span, Span::new(3, 7, 2, 1));
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(10, 10, 1, 5).is_empty());
        assert!(!Span::new(10, 20, 1, 5).is_empty());
    }

    #[test]
    fn test_shrink_delimiters_of_empty_quotes() {
        let inner = Span::new(0, 2, 1, 1).shrink_delimiters();
        assert!(inner.is_empty());
        assert_eq!(inner.slice("\"\""), "");
    }

    #[test]
    fn test_slice_multibyte() {
        let source = "αβγ";
        let span = Span::new(2, 4, 1, 2);
        assert_eq!(span.slice(source), "β");
    }

    #[test]
    fn test_checked_slice_errors() {
        let source = "αβ";
        assert_eq!(
            Span::new(3, 1, 1, 1).checked_slice(source),
            Err(SpanError::InvalidSpan { start: 3, end: 1 })
        );
        assert_eq!(
            Span::new(1, 2, 1, 1).checked_slice(source),
            Err(SpanError::NotCharBoundary { offset: 1 })
        );
        assert_eq!(Span::new(0, 4, 1, 1).checked_slice(source), Ok("αβ"));
    }

    #[test]
    fn test_span_serde() {
        let span = Span::new(1, 4, 2, 3);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start":1,"end":4,"line":2,"column":3}"#);
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
