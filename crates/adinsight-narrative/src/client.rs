use adinsight_core::{AppConfig, MetricsSummary};

use crate::error::NarrativeError;
use crate::parse::parse_bullets;
use crate::prompt::build_prompt;
use crate::retry::retry_with_backoff;
use crate::service::NarrativeService;

/// Narrative-service caller with bounded retries and per-attempt timeouts.
///
/// Wraps a [`NarrativeService`] backend with the retry policy and the strict
/// 3-bullet response contract. The per-attempt timeout lives on the backend's
/// `reqwest::Client`, so a hung service cannot stall the pipeline past
/// `attempts × timeout`.
pub struct NarrativeClient {
    service: NarrativeService,
    max_attempts: u32,
    backoff_base_ms: u64,
}

impl NarrativeClient {
    #[must_use]
    pub fn new(service: NarrativeService, max_attempts: u32, backoff_base_ms: u64) -> Self {
        Self {
            service,
            max_attempts: max_attempts.max(1),
            backoff_base_ms,
        }
    }

    /// Build a client for the backend selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeError::Unavailable`] when no backend or credentials
    /// are configured, or [`NarrativeError::Http`] if the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, NarrativeError> {
        Ok(Self::new(
            NarrativeService::from_config(config)?,
            config.retry_attempts,
            config.backoff_base_ms,
        ))
    }

    /// Backend name for logging.
    #[must_use]
    pub fn service_name(&self) -> &'static str {
        self.service.name()
    }

    /// Generate exactly 3 narrative bullets from the aggregated summary.
    ///
    /// Retries transient service failures up to the configured attempt bound,
    /// sequentially. A response violating the 3-bullet contract is rejected
    /// without a retry.
    ///
    /// # Errors
    ///
    /// - [`NarrativeError::Status`] / [`NarrativeError::Http`] once retries
    ///   are exhausted.
    /// - [`NarrativeError::Malformed`] if the response does not reduce to
    ///   exactly 3 non-empty lines.
    pub async fn generate(
        &self,
        summary: &MetricsSummary,
        context: Option<&str>,
    ) -> Result<[String; 3], NarrativeError> {
        let prompt = build_prompt(summary, context)?;
        let raw = retry_with_backoff(self.max_attempts, self.backoff_base_ms, || {
            self.service.generate_text(&prompt)
        })
        .await?;
        parse_bullets(&raw)
    }
}
