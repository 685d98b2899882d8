//! OpenAI-compatible chat completions client.
//!
//! Talks to any endpoint that accepts the OpenAI chat-completions wire
//! format (hosted inference providers, local gateways). Unlike [`OpenAi`],
//! it always sends `max_tokens` and reports a non-success status together
//! with the response body, since compatible servers put the useful part of
//! the error there.
//!
//! [`OpenAi`]: super::openai::OpenAi

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::openai::{Request, Response};
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug)]
pub struct ChatCompletions {
    client: Client,
    endpoint: Url,
    /// Bearer token sent in the `Authorization` header.
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f64,
    json_mode: bool,
}

impl ChatCompletions {
    /// Create a new client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn new(
        endpoint: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: usize,
        temperature: f64,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
            json_mode: false,
        })
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
            Some(self.max_tokens),
            self.temperature,
            system,
            prompt,
            self.json_mode,
        )
    }
}

#[async_trait]
impl Llm for ChatCompletions {
    fn name(&self) -> &'static str {
        "chat"
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = self.request(system, prompt);

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Response>().await?.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

    #[test]
    fn request_always_carries_max_tokens() {
        let client = ChatCompletions::new(ENDPOINT, "key", "llama3-70b-8192", 1000, 0.2).unwrap();
        let json = serde_json::to_value(client.request("You are a patent analyst.", "p")).unwrap();

        assert_eq!(json["model"], "llama3-70b-8192");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn json_mode_adds_response_format() {
        let client = ChatCompletions::new(ENDPOINT, "key", "m", 10, 0.0)
            .unwrap()
            .with_json_mode(true);
        let json = serde_json::to_value(client.request("s", "p")).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let result = ChatCompletions::new("not a url", "key", "m", 10, 0.2);
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn client_name() {
        let client = ChatCompletions::new(ENDPOINT, "key", "m", 10, 0.2).unwrap();
        assert_eq!(client.name(), "chat");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine.
        let client =
            ChatCompletions::new("http://127.0.0.1:9/v1/chat/completions", "key", "m", 10, 0.2)
                .unwrap();
        let result = client.complete("s", "p").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn error_status_carries_code_and_body() {
        use axum::http::StatusCode;
        use axum::routing::post;

        let app = axum::Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let endpoint = format!("http://{addr}/v1/chat/completions");
        let client = ChatCompletions::new(&endpoint, "bad", "m", 10, 0.2).unwrap();

        match client.complete("s", "p").await {
            Err(Error::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
