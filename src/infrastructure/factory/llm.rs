//! LLM client factory.

use std::sync::Arc;

use tracing::info;

use super::http_client;
use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::chat::ChatCompletions;
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;

/// Build the configured LLM client.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnv`](crate::error::ConfigError::MissingEnv)
/// if the provider's API key is not set, so a missing credential stops the
/// process before any lookup is attempted.
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let api_key = config.api_key()?;

    let client: Arc<dyn Llm> = match config.llm.provider {
        LlmProvider::OpenAi => {
            let c = &config.llm.openai;
            Arc::new(
                OpenAi::new(api_key, &c.model, c.max_tokens, c.temperature)
                    .with_client(http_client(c.timeout_secs)?)
                    .with_json_mode(c.json_mode),
            )
        }
        LlmProvider::Chat => {
            let c = &config.llm.chat;
            Arc::new(
                ChatCompletions::new(&c.base_url, api_key, &c.model, c.max_tokens, c.temperature)?
                    .with_client(http_client(c.timeout_secs)?)
                    .with_json_mode(c.json_mode),
            )
        }
        LlmProvider::Anthropic => {
            let c = &config.llm.anthropic;
            Arc::new(
                Anthropic::new(api_key, &c.model, c.max_tokens, c.temperature)
                    .with_client(http_client(c.timeout_secs)?),
            )
        }
    };

    info!(
        provider = client.name(),
        model = config.llm.model(),
        "LLM client initialized"
    );
    Ok(client)
}
