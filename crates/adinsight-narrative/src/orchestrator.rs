//! Insight orchestration state machine.
//!
//! Two live states: attempt the external service, or fall back to the
//! rule-based narrator. Every narrative-service failure is absorbed here;
//! `produce_insights` cannot fail and always returns exactly 3 bullets with
//! their provenance. Which path ran, and why the service path was skipped or
//! abandoned, is reported through `tracing` for the injected subscriber.

use std::time::Duration;

use adinsight_core::{AppConfig, InsightResult, MetricsSummary};

use crate::client::NarrativeClient;
use crate::error::NarrativeError;
use crate::fallback::FallbackNarrator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AttemptLlm,
    Fallback,
}

/// Decides which narrator produces the run's bullets.
pub struct InsightOrchestrator {
    client: Option<NarrativeClient>,
    fallback: FallbackNarrator,
    overall_deadline: Option<Duration>,
}

impl InsightOrchestrator {
    #[must_use]
    pub fn new(
        client: Option<NarrativeClient>,
        fallback: FallbackNarrator,
        overall_deadline: Option<Duration>,
    ) -> Self {
        Self {
            client,
            fallback,
            overall_deadline,
        }
    }

    /// Build an orchestrator from configuration. Total: a missing or broken
    /// service configuration downgrades to fallback-only mode rather than
    /// failing, since the pipeline must always complete.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = match NarrativeClient::from_config(config) {
            Ok(client) => {
                tracing::info!(service = client.service_name(), "narrative service configured");
                Some(client)
            }
            Err(e) => {
                tracing::info!(
                    kind = e.kind(),
                    error = %e,
                    "narrative service not configured, running in fallback mode"
                );
                None
            }
        };
        Self::new(
            client,
            FallbackNarrator::from_config(config),
            config.overall_deadline_secs.map(Duration::from_secs),
        )
    }

    /// Produce the run's insight bullets. Never fails.
    ///
    /// Starts at `AttemptLlm` when a service is configured, `Fallback`
    /// otherwise. Any service error transitions to `Fallback`; the fallback
    /// path is total.
    pub async fn produce_insights(
        &self,
        summary: &MetricsSummary,
        context: Option<&str>,
    ) -> InsightResult {
        let mut state = if self.client.is_some() {
            State::AttemptLlm
        } else {
            State::Fallback
        };

        loop {
            match state {
                State::AttemptLlm => {
                    let Some(client) = self.client.as_ref() else {
                        state = State::Fallback;
                        continue;
                    };
                    match self.attempt_llm(client, summary, context).await {
                        Ok(bullets) => {
                            tracing::info!(
                                service = client.service_name(),
                                provenance = "llm",
                                "insights generated by narrative service"
                            );
                            return InsightResult::llm(bullets);
                        }
                        Err(e) => {
                            tracing::warn!(
                                service = client.service_name(),
                                kind = e.kind(),
                                error = %e,
                                "narrative service failed, switching to fallback"
                            );
                            state = State::Fallback;
                        }
                    }
                }
                State::Fallback => {
                    let bullets = self.fallback.generate(summary, context);
                    tracing::info!(
                        provenance = "fallback",
                        "insights generated by rule-based narrator"
                    );
                    return InsightResult::fallback(bullets);
                }
            }
        }
    }

    /// One full service attempt (including its internal retries), bounded by
    /// the overall deadline when one is configured.
    async fn attempt_llm(
        &self,
        client: &NarrativeClient,
        summary: &MetricsSummary,
        context: Option<&str>,
    ) -> Result<[String; 3], NarrativeError> {
        match self.overall_deadline {
            Some(deadline) => tokio::time::timeout(deadline, client.generate(summary, context))
                .await
                .map_err(|_| NarrativeError::Deadline(deadline))?,
            None => client.generate(summary, context).await,
        }
    }
}
