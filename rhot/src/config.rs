//! Configuration module for the rhot CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the rhot application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RhotError};
use crate::highlight::DEFAULT_COLOR;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "rhot.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Highlight-specific configuration.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Token dump configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Highlight-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Color for token kinds the theme does not name.
    #[serde(default = "default_color")]
    pub default_color: String,

    /// JSON theme file layered over the built-in colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<PathBuf>,
}

/// Token dump configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Output format for `rhot tokens`.
    #[serde(default)]
    pub format: TokenFormat,

    /// Leave `Whitespace` tokens out of dumps.
    #[serde(default)]
    pub skip_whitespace: bool,
}

/// How `rhot tokens` prints tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    /// One token per line.
    #[default]
    Text,
    /// A JSON array of tokens.
    Json,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            theme: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/rhot/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RhotError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| RhotError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("rhot").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("rhot").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
