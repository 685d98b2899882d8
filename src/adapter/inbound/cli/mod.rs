//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod interactive;
pub mod lookup;
pub mod output;
pub mod paths;
pub mod render;
pub mod serve;

use std::io::IsTerminal;
use std::path::Path;

use tracing::debug;

use self::command::{Cli, ColorChoice, Commands, ConfigCommand};
use self::output::OutputConfig;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::build_lookup_service;

/// Output settings from the global flags.
pub fn output_config(cli: &Cli) -> OutputConfig {
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    };
    OutputConfig::new(cli.json, cli.quiet, color)
}

/// Load the configuration named by `--config`, or the default file.
///
/// A missing default file means built-in defaults; a missing explicit file
/// is an error.
#[allow(clippy::result_large_err)]
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (path, explicit) = cli.config_path();
    let mut config = if explicit {
        Config::load(&path)?
    } else {
        Config::load_or_default(&path)?
    };

    match (cli.quiet, cli.verbose) {
        (true, _) => config.logging.level = "warn".into(),
        (false, 0) => {}
        (false, 1) => config.logging.level = "debug".into(),
        (false, _) => config.logging.level = "trace".into(),
    }
    Ok(config)
}

/// Run a parsed command line.
///
/// `config init` runs before any configuration is loaded; every other
/// command loads the configuration and initializes logging first.
///
/// # Errors
///
/// Returns configuration errors (including a missing API key) before any
/// lookup, and storage errors from one-shot lookups.
pub async fn run(cli: Cli) -> Result<()> {
    let (config_path, _) = cli.config_path();
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        return config::execute_init(&config_path, args.force);
    }

    let config = load_config(&cli)?;
    config.init_logging();
    debug!(path = %config_path.display(), "configuration loaded");

    dispatch(cli.command, &config, &config_path).await
}

async fn dispatch(command: Commands, config: &Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Lookup(args) => {
            let service = build_lookup_service(config)?;
            lookup::execute(service.as_ref(), &args.patent).await?;
            Ok(())
        }
        Commands::Interactive => {
            let service = build_lookup_service(config)?;
            interactive::execute(service.as_ref()).await
        }
        Commands::Serve(args) => serve::execute(config, args.bind).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(config_path, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(config_path, config),
    }
}
