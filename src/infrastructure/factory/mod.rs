//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured infrastructure
//! components from application configuration. These factories handle
//! dependency injection and wiring.
//!
//! # Submodules
//!
//! - [`llm`] - LLM client construction
//! - [`persistence`] - Patent cache construction
//! - [`service`] - Lookup service wiring

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

pub mod llm;
pub mod persistence;
pub mod service;

pub use service::build_lookup_service;

/// HTTP client with a request timeout.
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}
