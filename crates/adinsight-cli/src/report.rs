//! Report bundle handed to the document-assembly collaborator.

use std::path::PathBuf;

use adinsight_core::{InsightResult, MetricsSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the downstream assembler needs for one slide deck: the
/// aggregated summary, the three insight bullets with provenance, and the
/// chart artifact reference passed through untouched. The pipeline does not
/// know the final document layout.
#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub generated_at: DateTime<Utc>,
    pub summary: MetricsSummary,
    pub insights: InsightResult,
    pub chart: Option<PathBuf>,
}

impl ReportBundle {
    pub fn new(
        summary: MetricsSummary,
        insights: InsightResult,
        chart: Option<PathBuf>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            summary,
            insights,
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn bundle() -> ReportBundle {
        let summary = MetricsSummary {
            date_range: None,
            total_impressions: 1500,
            total_clicks: 60,
            total_spend: Decimal::from(45),
            average_ctr: 4.0,
            average_cpc: Decimal::new(75, 2),
            per_platform: Vec::new(),
        };
        let insights = InsightResult::fallback([
            "volume bullet".to_owned(),
            "platform bullet".to_owned(),
            "cost bullet".to_owned(),
        ]);
        ReportBundle::new(summary, insights, Some(PathBuf::from("plots/trend.png")))
    }

    #[test]
    fn bundle_serializes_provenance_and_chart_reference() {
        let json = serde_json::to_value(bundle()).unwrap();
        assert_eq!(json["insights"]["provenance"], "fallback");
        assert_eq!(json["insights"]["bullets"][0], "volume bullet");
        assert_eq!(json["chart"], "plots/trend.png");
        assert_eq!(json["summary"]["total_impressions"], 1500);
    }
}
