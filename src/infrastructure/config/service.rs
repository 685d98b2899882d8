//! Service configuration for the patent search API, the classifier and the
//! web server.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::patentsview::DEFAULT_BASE_URL;
use crate::error::{ConfigError, Result};

/// Patent search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Query endpoint. Defaults to the legacy PatentsView patents endpoint.
    #[serde(default = "default_search_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_url(),
            timeout_secs: default_search_timeout(),
        }
    }
}

/// Classifier behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Reject model replies that leave out any of the five requested fields.
    #[serde(default)]
    pub strict_schema: bool,
}

/// Web server settings for `serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address. Defaults to `127.0.0.1:8501`.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl ServerConfig {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `bind` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                field: "server.bind",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_search_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_search_timeout() -> u64 {
    30
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}
