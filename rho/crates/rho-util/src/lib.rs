//! rho-util - Foundation types shared by the Rho tooling.
//!
//! Source positions live here so that the lexer and every consumer of its
//! tokens (highlighters, a future parser) agree on one convention:
//! byte offsets on character boundaries, half-open ranges, 1-based lines
//! and character columns.
//!
//! # Example
//!
//! ```
//! use rho_util::{Position, Span};
//!
//! let span = Span::from_position(Position::START, 3);
//! assert_eq!(span.slice("fun f"), "fun");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{SpanError, SpanResult};
pub use span::{Position, Span};
