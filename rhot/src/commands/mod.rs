//! Command modules for the rhot CLI.
//!
//! Each subcommand lives in its own file and implements [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod highlight;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use highlight::{HighlightArgs, HighlightCommand};
pub use tokens::{TokensArgs, TokensCommand};
pub use traits::Command;
