//! Core error types for rho-util crate

use thiserror::Error;

/// Error type for slicing source text by a span
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start is past its end
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start offset of the span
        start: usize,
        /// End offset of the span
        end: usize,
    },

    /// Span out of bounds for the source
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    OutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Start offset of the span
        span_start: usize,
        /// End offset of the span
        span_end: usize,
    },

    /// Span boundary falls inside a multi-byte character
    #[error("Span boundary {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending byte offset
        offset: usize,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
