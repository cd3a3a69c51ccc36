//! Check command implementation.
//!
//! Lexes each input and reports the first lexical error per file as
//! `path:line:column: message`.

use std::io::Write;
use std::path::{Path, PathBuf};

use rho_lex::tokenize;
use tracing::{debug, info};

use crate::commands::common::{display_name, read_source};
use crate::commands::traits::Command;
use crate::error::{Result, RhotError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files to check; `-` reads stdin.
    pub input: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Checks one file. Returns the diagnostic line on failure.
    fn check_file(&self, path: &Path) -> Option<String> {
        let name = display_name(path);
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => return Some(format!("{}: {}", name, err)),
        };

        match tokenize(&source) {
            Ok(tokens) => {
                debug!(file = %name, tokens = tokens.len(), "ok");
                None
            },
            Err(err) => {
                let position = err.position();
                Some(format!(
                    "{}:{}:{}: {}",
                    name, position.line, position.column, err
                ))
            },
        }
    }
}

impl Command for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        if self.args.input.is_empty() {
            return Err(RhotError::Validation("no input files".to_string()));
        }

        let mut failed = 0;
        for path in &self.args.input {
            if let Some(diagnostic) = self.check_file(path) {
                writeln!(out, "{}", diagnostic)?;
                failed += 1;
            }
        }

        info!(
            checked = self.args.input.len(),
            failed, "check finished"
        );

        if failed > 0 {
            return Err(RhotError::Validation(format!(
                "{} of {} files failed to lex",
                failed,
                self.args.input.len()
            )));
        }
        Ok(())
    }
}
