//! Tokens command implementation.
//!
//! Dumps the token sequence of one Rho source, as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use rho_lex::{tokenize, TokenKind};

use crate::commands::common::read_source;
use crate::commands::traits::Command;
use crate::config::TokenFormat;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file, or `-` for stdin.
    pub input: PathBuf,
    /// Output format.
    pub format: TokenFormat,
    /// Leave whitespace tokens out.
    pub skip_whitespace: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }
}

impl Command for TokensCommand {
    fn name(&self) -> &'static str {
        "tokens"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let source = read_source(&self.args.input)?;
        let mut tokens = tokenize(&source)?;
        if self.args.skip_whitespace {
            tokens.retain(|t| t.kind != TokenKind::Whitespace);
        }

        match self.args.format {
            TokenFormat::Text => {
                for token in &tokens {
                    writeln!(out, "{}", token)?;
                }
            },
            TokenFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &tokens)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}
