//! Rich-text highlighting of Rho source.
//!
//! Styling is kept apart from lexing: the lexer classifies, the [`Theme`]
//! picks a color per [`TokenKind`], and the [`Highlighter`] stitches the
//! source back together with `<color=...>` markup.

use std::collections::BTreeMap;
use std::path::Path;

use rho_lex::{tokenize, TokenKind};
use tracing::{debug, warn};

use crate::error::{Result, RhotError};

/// Color used for token kinds a theme does not name.
pub const DEFAULT_COLOR: &str = "white";

/// Theme key that sets the default color instead of naming a token kind.
const DEFAULT_KEY: &str = "default";

/// Colors for token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    default_color: String,
    colors: BTreeMap<TokenKind, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = [
            (TokenKind::LessEquiv, "#707070"),
            (TokenKind::String, "#FFA500"),
            (TokenKind::PiSlice, "#FFA5FF"),
        ]
        .into_iter()
        .map(|(kind, color)| (kind, color.to_string()))
        .collect();

        Self {
            default_color: DEFAULT_COLOR.to_string(),
            colors,
        }
    }
}

impl Theme {
    /// The built-in theme with another fallback color.
    pub fn with_default_color(color: impl Into<String>) -> Self {
        Self {
            default_color: color.into(),
            ..Self::default()
        }
    }

    /// Layers a JSON theme over `self`.
    ///
    /// The JSON is an object from token kind names to colors, e.g.
    /// `{"Ident": "#00FF00", "default": "grey"}`. The `default` key sets the
    /// fallback color.
    pub fn merge_json(mut self, json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;

        for (key, color) in entries {
            if key == DEFAULT_KEY {
                self.default_color = color;
                continue;
            }

            let kind = key
                .parse::<TokenKind>()
                .map_err(|e| RhotError::Theme(e.to_string()))?;
            self.colors.insert(kind, color);
        }

        Ok(self)
    }

    /// Layers the JSON theme file at `path` over `self`.
    pub fn merge_file(self, path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            RhotError::Theme(format!("cannot read theme {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loading theme");
        self.merge_json(&json)
    }

    /// The color for `kind`.
    pub fn color_for(&self, kind: TokenKind) -> &str {
        self.colors
            .get(&kind)
            .map_or(self.default_color.as_str(), String::as_str)
    }
}

/// Turns Rho source into color-tagged rich text.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    /// Creates a highlighter using `theme`.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Colorizes `source`.
    ///
    /// Every token except whitespace, newlines and `Eof` is wrapped as
    /// `<color=C>text</color>`. Whitespace is copied verbatim and each
    /// newline becomes `\n`. Source that does not lex is returned unchanged.
    pub fn colorize(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let tokens = match tokenize(source) {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!(error = %err, "cannot lex source, leaving it unstyled");
                return source.to_string();
            },
        };

        let mut out = String::with_capacity(source.len() * 2);
        for token in &tokens {
            match token.kind {
                TokenKind::Eof => {},
                TokenKind::NewLine => out.push('\n'),
                TokenKind::Whitespace => out.push_str(token.text(source)),
                kind => {
                    out.push_str("<color=");
                    out.push_str(self.theme.color_for(kind));
                    out.push('>');
                    out.push_str(token.text(source));
                    out.push_str("</color>");
                },
            }
        }
        out
    }
}
