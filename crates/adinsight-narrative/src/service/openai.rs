//! HTTP client for OpenAI-compatible chat-completion endpoints.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/";

/// Client for the `v1/chat/completions` API shape.
///
/// Use [`OpenAiClient::new`] for production or
/// [`OpenAiClient::with_base_url`] to point at a mock server in tests.
pub struct OpenAiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenAiClient {
    /// Creates a new client pointed at the production OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, NarrativeError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NarrativeError::Unavailable`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NarrativeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("adinsight/0.1 (insight-reporting)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("v1/chat/completions"))
            .map_err(|e| {
                NarrativeError::Unavailable(format!("invalid OpenAI base URL '{base_url}': {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
        })
    }

    /// Send one prompt as a single user message and return the first choice.
    ///
    /// # Errors
    ///
    /// - [`NarrativeError::Http`] on network failure or timeout.
    /// - [`NarrativeError::Status`] on a non-2xx response.
    /// - [`NarrativeError::Malformed`] if the body is not the expected shape
    ///   or contains no choices.
    pub(crate) async fn generate_text(&self, prompt: &str) -> Result<String, NarrativeError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

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
            return Err(NarrativeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            NarrativeError::Malformed(format!("chat completion response did not parse: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                NarrativeError::Malformed("chat completion response contained no choices".to_owned())
            })
    }
}
