//! Rhot CLI - command-line tools for Rho source.
//!
//! This is the main entry point for the rhot CLI application.
//! It uses clap for argument parsing and dispatches to the matching
//! command handler.

mod commands;
mod config;
mod error;
mod highlight;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use commands::{
    traits::dispatch, CheckArgs, CheckCommand, Command, HighlightArgs, HighlightCommand,
    TokensArgs, TokensCommand,
};
use config::{Config, TokenFormat};
use error::{Result, RhotError};

/// Rhot - tools for the Rho language
///
/// Rhot dumps the token stream of Rho sources, checks them for lexical
/// errors and renders them as color-tagged rich text.
#[derive(Parser, Debug)]
#[command(name = "rhot")]
#[command(author = "Rho Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line tools for Rho source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "RHOT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RHOT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors in log output (highlight markup is unaffected)
    #[arg(long, global = true, env = "RHOT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the rhot CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a Rho source
    Tokens(TokensCli),

    /// Check Rho sources for lexical errors
    ///
    /// Prints `path:line:column: message` for each file that fails and
    /// exits with a non-zero status if any did.
    Check(CheckCli),

    /// Render a Rho source as `<color=...>` rich text
    Highlight(HighlightCli),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCli {
    /// Source file (`-` for stdin)
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<TokenFormat>,

    /// Leave whitespace tokens out
    #[arg(long)]
    skip_whitespace: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCli {
    /// Source files to check (`-` for stdin)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCli {
    /// Source file (`-` for stdin)
    input: PathBuf,

    /// JSON theme file (default: from config)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Color for token kinds the theme does not name
    #[arg(long)]
    default_color: Option<String>,
}

/// Main entry point for the rhot CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    if config.verbose && !cli.verbose {
        log_level
            .reload(log_filter(true))
            .map_err(|e| RhotError::Config(format!("Failed to raise log level: {}", e)))?;
    }

    let command = build_command(cli.command, &config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(command.as_ref(), &mut out)
}

/// Handle for changing the log filter after startup.
type LogLevel = reload::Handle<EnvFilter, Registry>;

/// Initialize the logging system.
///
/// Logs go to stderr so that command output on stdout stays clean. The
/// returned handle lets a `verbose = true` configuration raise the level
/// once the configuration has been read.
fn init_logging(verbose: bool, no_color: bool) -> Result<LogLevel> {
    let (filter, handle) = reload::Layer::new(log_filter(verbose));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| RhotError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(handle)
}

fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Build the handler for the selected command, filling unset options from
/// the configuration.
fn build_command(command: Commands, config: &Config) -> Box<dyn Command> {
    match command {
        Commands::Tokens(args) => Box::new(TokensCommand::new(TokensArgs {
            input: args.input,
            format: args.format.unwrap_or(config.tokens.format),
            skip_whitespace: args.skip_whitespace || config.tokens.skip_whitespace,
        })),
        Commands::Check(args) => Box::new(CheckCommand::new(CheckArgs { input: args.input })),
        Commands::Highlight(args) => Box::new(HighlightCommand::new(HighlightArgs {
            input: args.input,
            default_color: args
                .default_color
                .unwrap_or_else(|| config.highlight.default_color.clone()),
            theme: args.theme.or_else(|| config.highlight.theme.clone()),
        })),
    }
}
