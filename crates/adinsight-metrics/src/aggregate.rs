use adinsight_core::{MetricsSummary, PlatformStats, Row};
use rust_decimal::Decimal;

/// Reduce a row set into a [`MetricsSummary`].
///
/// - CTR = total clicks / total impressions × 100, `0.0` with no impressions.
/// - CPC = total spend / total clicks, `0` with no clicks.
/// - Per-platform groups use case-sensitive exact matching and are ordered
///   by first appearance in `rows` for deterministic output.
///
/// Empty input yields an all-zero summary with `date_range = None`.
/// Validation belongs to the ingestion boundary; rows are accepted as-is.
#[must_use]
pub fn aggregate(rows: &[Row]) -> MetricsSummary {
    let mut total_impressions = 0u64;
    let mut total_clicks = 0u64;
    let mut total_spend = Decimal::ZERO;
    let mut date_range: Option<(chrono::NaiveDate, chrono::NaiveDate)> = None;
    let mut per_platform: Vec<PlatformStats> = Vec::new();

    for row in rows {
        total_impressions += row.impressions;
        total_clicks += row.clicks;
        total_spend += row.spend;

        date_range = Some(match date_range {
            None => (row.date, row.date),
            Some((start, end)) => (start.min(row.date), end.max(row.date)),
        });

        match per_platform
            .iter_mut()
            .find(|p| p.platform == row.platform)
        {
            Some(group) => {
                group.impressions += row.impressions;
                group.clicks += row.clicks;
                group.spend += row.spend;
            }
            None => per_platform.push(PlatformStats {
                platform: row.platform.clone(),
                impressions: row.impressions,
                clicks: row.clicks,
                spend: row.spend,
            }),
        }
    }

    let average_ctr = if total_impressions == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let ctr = total_clicks as f64 / total_impressions as f64 * 100.0;
        ctr
    };

    let average_cpc = if total_clicks == 0 {
        Decimal::ZERO
    } else {
        total_spend / Decimal::from(total_clicks)
    };

    MetricsSummary {
        date_range,
        total_impressions,
        total_clicks,
        total_spend,
        average_ctr,
        average_cpc,
        per_platform,
    }
}
