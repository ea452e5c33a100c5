//! Interchangeable narrative-service backends.
//!
//! Both backends satisfy the same contract: prompt text in, raw narrative
//! text out. Selection happens once, from configuration; the rest of the
//! crate only sees [`NarrativeService`].

use adinsight_core::{AppConfig, NarrativeBackend};

use crate::error::NarrativeError;

mod gemini;
mod openai;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// A configured narrative backend.
pub enum NarrativeService {
    Gemini(GeminiClient),
    OpenAi(OpenAiClient),
}

impl NarrativeService {
    /// Build the backend selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeError::Unavailable`] when no backend is selected or
    /// the selected backend has no API key, and [`NarrativeError::Http`] if
    /// the underlying `reqwest::Client` cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, NarrativeError> {
        match config.narrative_backend {
            NarrativeBackend::None => Err(NarrativeError::Unavailable(
                "no narrative backend configured".to_owned(),
            )),
            NarrativeBackend::Gemini => {
                let api_key = config.gemini_api_key.as_deref().ok_or_else(|| {
                    NarrativeError::Unavailable("GEMINI_API_KEY is not set".to_owned())
                })?;
                Ok(Self::Gemini(GeminiClient::new(
                    api_key,
                    &config.gemini_model,
                    config.request_timeout_secs,
                )?))
            }
            NarrativeBackend::OpenAi => {
                let api_key = config.openai_api_key.as_deref().ok_or_else(|| {
                    NarrativeError::Unavailable("OPENAI_API_KEY is not set".to_owned())
                })?;
                Ok(Self::OpenAi(OpenAiClient::new(
                    api_key,
                    &config.openai_model,
                    config.request_timeout_secs,
                )?))
            }
        }
    }

    /// Backend name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NarrativeService::Gemini(_) => "gemini",
            NarrativeService::OpenAi(_) => "openai",
        }
    }

    /// Send one prompt and return the raw response text.
    pub(crate) async fn generate_text(&self, prompt: &str) -> Result<String, NarrativeError> {
        match self {
            NarrativeService::Gemini(client) => client.generate_text(prompt).await,
            NarrativeService::OpenAi(client) => client.generate_text(prompt).await,
        }
    }
}
