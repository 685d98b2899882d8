//! OpenAI LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the OpenAI
//! Chat Completions API. The request and response envelopes are shared with
//! the OpenAI-compatible [`ChatCompletions`](super::chat::ChatCompletions)
//! client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::Llm;

/// OpenAI Chat Completions API endpoint.
pub(crate) const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI API client.
///
/// Implements the [`Llm`] trait for making chat completion requests
/// to the OpenAI API.
#[derive(Debug)]
pub struct OpenAi {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Model identifier (e.g., "gpt-4", "gpt-4o").
    model: String,
    /// Maximum tokens to generate; the API default applies when unset.
    max_tokens: Option<usize>,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
    /// Ask the API to constrain output to a JSON object.
    json_mode: bool,
}

impl OpenAi {
    /// Create a new OpenAI client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: Option<usize>,
        temperature: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
            json_mode: false,
        }
    }

    /// Create a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Config(ConfigError::MissingEnv {
                var: "OPENAI_API_KEY".into(),
            })
        })?;
        Ok(Self::new(api_key, model, None, 0.2))
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Request `response_format: {"type": "json_object"}`.
    #[must_use]
    pub fn with_json_mode(mut self, enabled: bool) -> Self {
        self.json_mode = enabled;
        self
    }

    fn request(&self, system: &str, prompt: &str) -> Request {
        Request::new(
            &self.model,
            self.max_tokens,
            self.temperature,
            system,
            prompt,
            self.json_mode,
        )
    }
}

#[derive(Serialize)]
pub(crate) struct Request {
    pub(crate) model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_tokens: Option<usize>,
    pub(crate) temperature: f64,
    pub(crate) messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) response_format: Option<ResponseFormat>,
}

impl Request {
    pub(crate) fn new(
        model: &str,
        max_tokens: Option<usize>,
        temperature: f64,
        system: &str,
        prompt: &str,
        json_mode: bool,
    ) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            temperature,
            messages: vec![
                Message {
                    role: "system",
                    content: system.to_string(),
                },
                Message {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            response_format: json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Message {
    pub(crate) role: &'static str,
    pub(crate) content: String,
}

#[derive(Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}

#[derive(Deserialize)]
pub(crate) struct Response {
    pub(crate) choices: Vec<Choice>,
}

impl Response {
    /// Text of the first choice; empty when the model returned nothing.
    pub(crate) fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub(crate) struct Choice {
    pub(crate) message: ChoiceMessage,
}

#[derive(Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub(crate) content: Option<String>,
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = self.request(system, prompt);

        let response = self
            .client
            .post(API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<Response>()
            .await?;

        Ok(response.into_text())
    }
}


/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;
    use std::time::Duration;

    /// Helper to create a client from environment.
    /// Requires OPENAI_API_KEY to be set.
    fn create_test_client() -> Option<OpenAi> {
        match OpenAi::from_env("gpt-4o-mini") {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!("Skipping OpenAI integration test: {}", e);
                None
            }
        }
    }

    #[tokio::test]
    #[ignore = "requires OPENAI_API_KEY and network access"]
    async fn test_json_mode_returns_object() {
        let Some(client) = create_test_client() else {
            return;
        };
        let client = client.with_json_mode(true);

        let result = tokio::time::timeout(
            Duration::from_secs(60),
            client.complete(
                "You are a patent analyst.",
                r#"Respond with exactly this JSON: {"status": "ok"}"#,
            ),
        )
        .await
        .expect("Request timed out")
        .expect("API call failed");

        let parsed: serde_json::Value =
            serde_json::from_str(&result).expect("Expected valid JSON response");
        assert_eq!(parsed["status"], "ok");
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_invalid_api_key_error() {
        let client = OpenAi::new("invalid-key-12345", "gpt-4o-mini", Some(16), 0.1);

        let result = client.complete("system", "test").await;
        assert!(
            matches!(result, Err(Error::Connection(_) | Error::Http(_))),
            "Expected connection or HTTP error, got: {:?}",
            result
        );
    }
}
