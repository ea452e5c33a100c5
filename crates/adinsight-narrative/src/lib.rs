//! Narrative generation for the adinsight pipeline.
//!
//! Turns a `MetricsSummary` into exactly three executive-summary bullets.
//! The orchestrator first attempts the configured external text-generation
//! service (Gemini or an OpenAI-compatible endpoint) with bounded retries and
//! timeouts, then drops to a deterministic rule-based narrator on any failure.
//! The public entry point never fails: degraded output is signalled through
//! [`adinsight_core::Provenance`], not through errors.

pub mod error;
pub mod fallback;
pub mod orchestrator;
pub mod service;

mod client;
mod parse;
mod prompt;
mod retry;

pub use client::NarrativeClient;
pub use error::NarrativeError;
pub use fallback::FallbackNarrator;
pub use orchestrator::InsightOrchestrator;
pub use service::{GeminiClient, NarrativeService, OpenAiClient};
