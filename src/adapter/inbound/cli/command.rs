//! Command-line interface definitions.
//!
//! Defines the CLI structure for the patentcat application using `clap`.
//! The CLI supports one-shot lookups, an interactive prompt, a small web
//! server, and configuration management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Patent lookup and LLM classification CLI
#[derive(Parser, Debug)]
#[command(name = "patentcat")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.patentcat/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration file to read, and whether it was named explicitly.
    ///
    /// Only an explicitly named file is required to exist.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (paths::default_config(), false),
        }
    }
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the patentcat CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up and classify one patent
    Lookup(LookupArgs),

    /// Prompt for patent numbers until an empty line
    Interactive,

    /// Serve the lookup form over HTTP
    Serve(ServeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `lookup` subcommand.
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Patent number, e.g. 11234567
    pub patent: String,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen address (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,
}

/// Subcommands for `patentcat config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate configuration and check the API key is set.
    Validate,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
