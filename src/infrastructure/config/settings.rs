//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the LLM API key is read from the
//! environment and never from the file.
//!
//! # Example
//!
//! ```no_run
//! use patentcat::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::llm::{LlmConfig, LlmProvider};
use super::logging::LoggingConfig;
use super::service::{ClassifierConfig, SearchConfig, ServerConfig};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Built once at startup and handed to the factories. Load from a TOML file
/// using [`Config::load`] or parse directly with [`Config::parse_toml`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite cache database.
    ///
    /// Defaults to "patents_cache.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Patent search API settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// LLM provider configuration for classification.
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Web server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
            llm: LlmConfig::default(),
            classifier: ClassifierConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

fn default_database_path() -> String {
    "patents_cache.db".to_string()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Resolves the selected provider's API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., temperature out of range)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Secrets only ever come from the environment.
        config.llm.api_key = std::env::var(config.llm.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty());

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path`, or use built-in defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// API key for the selected LLM provider.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] naming the variable to set.
    #[allow(clippy::result_large_err)]
    pub fn api_key(&self) -> Result<&str> {
        self.llm.api_key.as_deref().ok_or_else(|| {
            ConfigError::MissingEnv {
                var: self.llm.api_key_env().to_string(),
            }
            .into()
        })
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges. The API key is checked separately by
    /// [`Config::api_key`] so that `config show` works without one.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        if self.search.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "search.base_url",
            }
            .into());
        }
        Url::parse(&self.search.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "search.base_url",
            reason: e.to_string(),
        })?;
        if self.search.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.validate_llm()?;
        self.server.socket_addr()?;

        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn validate_llm(&self) -> Result<()> {
        if self.llm.model().trim().is_empty() {
            return Err(ConfigError::MissingField { field: "llm.model" }.into());
        }

        let (temperature, max_temperature, max_tokens, timeout_secs) = match self.llm.provider {
            LlmProvider::OpenAi => {
                let c = &self.llm.openai;
                (c.temperature, 2.0, c.max_tokens, c.timeout_secs)
            }
            LlmProvider::Chat => {
                let c = &self.llm.chat;
                if c.api_key_env.trim().is_empty() {
                    return Err(ConfigError::MissingField {
                        field: "llm.chat.api_key_env",
                    }
                    .into());
                }
                Url::parse(&c.base_url).map_err(|e| ConfigError::InvalidValue {
                    field: "llm.chat.base_url",
                    reason: e.to_string(),
                })?;
                (c.temperature, 2.0, Some(c.max_tokens), c.timeout_secs)
            }
            LlmProvider::Anthropic => {
                let c = &self.llm.anthropic;
                (c.temperature, 1.0, Some(c.max_tokens), c.timeout_secs)
            }
        };

        if !(0.0..=max_temperature).contains(&temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature",
                reason: format!("must be between 0 and {max_temperature}"),
            }
            .into());
        }
        if max_tokens == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Render the effective configuration as TOML (without secrets).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::Error::Parse(e.to_string()))
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
