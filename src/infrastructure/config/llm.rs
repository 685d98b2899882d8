//! LLM provider configuration.
//!
//! Provides configuration for the Large Language Model backends used for
//! patent classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// LLM provider configuration.
///
/// Configures which LLM provider to use and provider-specific settings.
/// API keys are never read from the file: they come from `OPENAI_API_KEY`,
/// `ANTHROPIC_API_KEY` or the variable named by `chat.api_key_env`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfig {
    /// LLM provider to use for classification.
    ///
    /// Defaults to OpenAI.
    #[serde(default)]
    pub provider: LlmProvider,

    /// OpenAI-specific settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Settings for any OpenAI-compatible chat-completions endpoint.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Anthropic-specific settings.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// API key for the selected provider, resolved from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl LlmConfig {
    /// Environment variable holding the selected provider's API key.
    #[must_use]
    pub fn api_key_env(&self) -> &str {
        match self.provider {
            LlmProvider::OpenAi => "OPENAI_API_KEY",
            LlmProvider::Chat => &self.chat.api_key_env,
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Model of the selected provider.
    #[must_use]
    pub fn model(&self) -> &str {
        match self.provider {
            LlmProvider::OpenAi => &self.openai.model,
            LlmProvider::Chat => &self.chat.model,
            LlmProvider::Anthropic => &self.anthropic.model,
        }
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// OpenAI GPT models.
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    /// Any OpenAI-compatible chat-completions endpoint.
    Chat,
    /// Anthropic Claude models.
    Anthropic,
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenAi => "openai",
            Self::Chat => "chat",
            Self::Anthropic => "anthropic",
        })
    }
}

/// OpenAI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Model identifier. Defaults to "gpt-4".
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Sampling temperature. Defaults to 0.2.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Left to the API default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// Ask for `response_format: json_object`.
    #[serde(default)]
    pub json_mode: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: None,
            json_mode: false,
            timeout_secs: default_llm_timeout(),
        }
    }
}

/// OpenAI-compatible chat-completions configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Full chat-completions endpoint URL.
    #[serde(default = "default_chat_url")]
    pub base_url: String,

    #[serde(default = "default_chat_model")]
    pub model: String,

    /// Name of the environment variable holding the bearer token.
    #[serde(default = "default_chat_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 1000.
    #[serde(default = "default_chat_max_tokens")]
    pub max_tokens: usize,

    #[serde(default)]
    pub json_mode: bool,

    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_url(),
            model: default_chat_model(),
            api_key_env: default_chat_key_env(),
            temperature: default_temperature(),
            max_tokens: default_chat_max_tokens(),
            json_mode: false,
            timeout_secs: default_llm_timeout(),
        }
    }
}

/// Anthropic-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// Model identifier.
    ///
    /// Defaults to "claude-3-5-sonnet-20241022".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Sampling temperature, 0.0 to 1.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response. Defaults to 1024.
    #[serde(default = "default_anthropic_max_tokens")]
    pub max_tokens: usize,

    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_anthropic_max_tokens(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

fn default_openai_model() -> String {
    "gpt-4".into()
}

fn default_chat_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".into()
}

fn default_chat_model() -> String {
    "llama-3.1-70b-versatile".into()
}

fn default_chat_key_env() -> String {
    "LLM_API_KEY".into()
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-20241022".into()
}

fn default_temperature() -> f64 {
    0.2
}

const fn default_chat_max_tokens() -> usize {
    1000
}

const fn default_anthropic_max_tokens() -> usize {
    1024
}

const fn default_llm_timeout() -> u64 {
    120
}
