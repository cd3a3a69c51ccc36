//! Command trait shared by all rhot subcommands.

use std::io::Write;

use crate::error::Result;

/// A runnable subcommand.
///
/// Commands write their normal output to `out` so tests can capture it;
/// diagnostics go through `tracing`.
pub trait Command {
    /// The command name, as typed on the command line.
    fn name(&self) -> &'static str;

    /// Runs the command.
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// Runs `command`, logging its name first.
pub fn dispatch(command: &dyn Command, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(command = command.name(), "running command");
    command.run(out)
}
