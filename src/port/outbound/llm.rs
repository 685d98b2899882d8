//! LLM completion port for classification adapters.
//!
//! Defines a generic interface for chat-style completion requests made of
//! one system instruction and one user message.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model chat completion.
///
/// Implementations wrap specific LLM providers (OpenAI, OpenAI-compatible
/// endpoints, Anthropic) and handle authentication and response parsing.
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for network
/// failures, non-success statuses or undecodable response envelopes. The
/// returned text itself is never interpreted here.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Arguments
    ///
    /// * `system` - Instruction framing the assistant's role.
    /// * `prompt` - The user message.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}
