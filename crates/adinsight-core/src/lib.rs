//! Shared value types and configuration for the adinsight pipeline.
//!
//! Every cross-crate boundary passes these types by value: the aggregator
//! produces a [`MetricsSummary`], the orchestrator produces an
//! [`InsightResult`]. Nothing here is mutated after construction.

use thiserror::Error;

mod app_config;
pub mod config;
mod types;

pub use app_config::{AppConfig, NarrativeBackend};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{InsightResult, MetricsSummary, PlatformStats, Provenance, Row};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
