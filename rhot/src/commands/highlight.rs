//! Highlight command implementation.
//!
//! Prints a Rho source as `<color=...>` rich text.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::common::read_source;
use crate::commands::traits::Command;
use crate::error::Result;
use crate::highlight::{Highlighter, Theme};

/// Arguments for the highlight command.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    /// Source file, or `-` for stdin.
    pub input: PathBuf,
    /// Fallback color for unnamed token kinds.
    pub default_color: String,
    /// JSON theme layered over the built-in colors.
    pub theme: Option<PathBuf>,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl HighlightCommand {
    /// Create a new HighlightCommand.
    pub fn new(args: HighlightArgs) -> Self {
        Self { args }
    }

    fn theme(&self) -> Result<Theme> {
        let theme = Theme::with_default_color(self.args.default_color.clone());
        match &self.args.theme {
            Some(path) => theme.merge_file(path),
            None => Ok(theme),
        }
    }
}

impl Command for HighlightCommand {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let highlighter = Highlighter::new(self.theme()?);
        let source = read_source(&self.args.input)?;
        out.write_all(highlighter.colorize(&source).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RhotError;
    use tempfile::TempDir;

    fn args(dir: &TempDir, source: &str) -> HighlightArgs {
        let input = dir.path().join("input.rho");
        std::fs::write(&input, source).unwrap();
        HighlightArgs {
            input,
            default_color: "white".to_string(),
            theme: None,
        }
    }

    fn run(args: HighlightArgs) -> Result<String> {
        let mut out = Vec::new();
        HighlightCommand::new(args).run(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_highlight_with_builtin_theme() {
        let dir = TempDir::new().unwrap();
        let out = run(args(&dir, "a <= b\n")).unwrap();
        assert_eq!(
            out,
            "<color=white>a</color> <color=#707070><=</color> <color=white>b</color>\n"
        );
    }

    #[test]
    fn test_highlight_with_theme_file() {
        let dir = TempDir::new().unwrap();
        let theme = dir.path().join("theme.json");
        std::fs::write(&theme, r##"{"Fun": "#0000FF"}"##).unwrap();

        let mut args = args(&dir, "fun");
        args.theme = Some(theme);
        assert_eq!(run(args).unwrap(), "<color=#0000FF>fun</color>");
    }

    #[test]
    fn test_missing_theme_file() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, "fun");
        args.theme = Some(dir.path().join("missing.json"));
        assert!(matches!(run(args), Err(RhotError::Theme(_))));
    }

    #[test]
    fn test_unlexable_source_is_verbatim() {
        let dir = TempDir::new().unwrap();
        assert_eq!(run(args(&dir, "x = 'ab'")).unwrap(), "x = 'ab'");
    }
}
