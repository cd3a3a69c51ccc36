//! Common utilities for rhot commands.

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Path argument that means standard input.
pub const STDIN_PATH: &str = "-";

/// Reads Rho source from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Name to show for `path` in diagnostics.
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
