//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set OPENAI_API_KEY (or the key for your provider)");
    output::note("3. Run: patentcat lookup 11234567");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        let value = serde_json::to_value(config)?;
        output::json_output(&value);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Database", &config.database);
    output::field("Log level", &config.logging.level);

    output::section("Search");
    output::field("Endpoint", &config.search.base_url);
    output::field("Timeout", format!("{}s", config.search.timeout_secs));

    output::section("LLM");
    output::field("Provider", config.llm.provider);
    output::field("Model", config.llm.model());
    if config.llm.provider == LlmProvider::Chat {
        output::field("Endpoint", &config.llm.chat.base_url);
    }
    if config.llm.api_key.is_some() {
        output::success(&format!("API key loaded from {}", config.llm.api_key_env()));
    } else {
        output::warning(&format!("{} not set", config.llm.api_key_env()));
    }
    output::field(
        "Strict schema",
        if config.classifier.strict_schema {
            "yes"
        } else {
            "no"
        },
    );

    output::section("Server");
    output::field("Bind", &config.server.bind);

    output::section("TOML");
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the values; this also requires the API key.
pub fn execute_validate(path: &Path, config: &Config) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    config.api_key()?;
    output::success("Configuration is valid");
    Ok(())
}
