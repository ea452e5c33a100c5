use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One advertising-performance observation from the ingestion boundary.
///
/// `clicks <= impressions` is expected but not enforced upstream; the
/// aggregator guards every division instead of validating input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
    pub platform: String,
    #[serde(default)]
    pub campaign_id: Option<String>,
}

/// Per-platform accumulation inside a [`MetricsSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub platform: String,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
}

impl PlatformStats {
    /// Click-through rate in percent. `0.0` when no impressions were served.
    #[must_use]
    pub fn ctr(&self) -> f64 {
        if self.impressions == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ctr = self.clicks as f64 / self.impressions as f64 * 100.0;
        ctr
    }

    /// Cost per click. `0` when no clicks were recorded.
    #[must_use]
    pub fn cpc(&self) -> Decimal {
        if self.clicks == 0 {
            return Decimal::ZERO;
        }
        self.spend / Decimal::from(self.clicks)
    }
}

/// Immutable snapshot of one pipeline run's aggregated metrics.
///
/// Created once by the aggregator and passed by value downstream.
/// `per_platform` preserves first-seen platform order so that narrative
/// output and serialization are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// `(earliest, latest)` row date; `None` for an empty row set.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_spend: Decimal,
    /// Overall CTR in percent. Always finite; `0.0` with no impressions.
    pub average_ctr: f64,
    /// Overall CPC. `0` with no clicks.
    pub average_cpc: Decimal,
    pub per_platform: Vec<PlatformStats>,
}

/// Whether the narrative text came from the external service or the
/// deterministic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Llm,
    Fallback,
}

/// Exactly three executive-summary bullets plus their provenance.
///
/// Produced once per run and consumed by document assembly; not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResult {
    pub bullets: [String; 3],
    pub provenance: Provenance,
}

impl InsightResult {
    #[must_use]
    pub fn llm(bullets: [String; 3]) -> Self {
        Self {
            bullets,
            provenance: Provenance::Llm,
        }
    }

    #[must_use]
    pub fn fallback(bullets: [String; 3]) -> Self {
        Self {
            bullets,
            provenance: Provenance::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_ctr_guards_zero_impressions() {
        let stats = PlatformStats {
            platform: "Google".to_owned(),
            impressions: 0,
            clicks: 0,
            spend: Decimal::ZERO,
        };
        assert_eq!(stats.ctr(), 0.0);
    }

    #[test]
    fn platform_cpc_guards_zero_clicks() {
        let stats = PlatformStats {
            platform: "Google".to_owned(),
            impressions: 100,
            clicks: 0,
            spend: Decimal::from(10),
        };
        assert_eq!(stats.cpc(), Decimal::ZERO);
    }

    #[test]
    fn platform_ctr_and_cpc_compute() {
        let stats = PlatformStats {
            platform: "Google".to_owned(),
            impressions: 1000,
            clicks: 50,
            spend: Decimal::from(25),
        };
        assert!((stats.ctr() - 5.0).abs() < f64::EPSILON);
        assert_eq!(stats.cpc(), Decimal::new(5, 1));
    }

    #[test]
    fn provenance_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Provenance::Llm).unwrap(),
            "\"llm\""
        );
        assert_eq!(
            serde_json::to_string(&Provenance::Fallback).unwrap(),
            "\"fallback\""
        );
    }
}
