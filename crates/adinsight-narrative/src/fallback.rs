//! Deterministic rule-based narrator.
//!
//! Used whenever the external service is unconfigured or fails. Pure
//! function of the summary, the optional context, and the configured CTR
//! health threshold: the same inputs always produce the same three bullets,
//! and no input can make it fail.

use adinsight_core::{AppConfig, MetricsSummary, PlatformStats};

/// Rule-based bullet generator.
pub struct FallbackNarrator {
    ctr_health_threshold: f64,
}

impl FallbackNarrator {
    /// `ctr_health_threshold` is the CTR percentage above which the period
    /// is described as strong.
    #[must_use]
    pub fn new(ctr_health_threshold: f64) -> Self {
        Self {
            ctr_health_threshold,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.ctr_health_threshold)
    }

    /// Produce exactly 3 bullets for any summary, including the all-zero one.
    #[must_use]
    pub fn generate(&self, summary: &MetricsSummary, context: Option<&str>) -> [String; 3] {
        [
            self.volume_bullet(summary),
            Self::platform_bullet(summary),
            Self::cost_bullet(summary, context),
        ]
    }

    /// Bullet 1: headline volume and overall CTR against the health benchmark.
    fn volume_bullet(&self, summary: &MetricsSummary) -> String {
        if summary.total_impressions == 0 && summary.total_clicks == 0 {
            return "No activity was recorded in this period: zero impressions and zero clicks \
                    across all platforms."
                .to_owned();
        }

        let (position, verdict) = if summary.average_ctr >= self.ctr_health_threshold {
            ("above", "a strong engagement period")
        } else {
            ("below", "a weak engagement period")
        };
        format!(
            "The period delivered {} impressions and {} clicks for an overall CTR of {:.2}%, \
             {position} the {:.2}% health benchmark and {verdict}.",
            summary.total_impressions,
            summary.total_clicks,
            summary.average_ctr,
            self.ctr_health_threshold,
        )
    }

    /// Bullet 2: best vs worst platform by CTR, first-seen order breaking ties.
    fn platform_bullet(summary: &MetricsSummary) -> String {
        let platforms = &summary.per_platform;
        match platforms.len() {
            0 => "No per-platform breakdown is available, so channel efficiency cannot be \
                  compared for this period."
                .to_owned(),
            1 => {
                let only = &platforms[0];
                format!(
                    "{} was the only active platform, delivering a CTR of {:.2}% on {} impressions.",
                    only.platform,
                    only.ctr(),
                    only.impressions,
                )
            }
            _ => {
                // Strict comparisons keep the first-seen platform on ties.
                let best = platforms
                    .iter()
                    .fold(&platforms[0], |acc: &PlatformStats, p| {
                        if p.ctr() > acc.ctr() {
                            p
                        } else {
                            acc
                        }
                    });
                let worst = platforms
                    .iter()
                    .fold(&platforms[0], |acc: &PlatformStats, p| {
                        if p.ctr() < acc.ctr() {
                            p
                        } else {
                            acc
                        }
                    });
                if best.platform == worst.platform {
                    format!(
                        "CTR was uniform at {:.2}% across all {} platforms; no single channel \
                         stands out this period.",
                        best.ctr(),
                        platforms.len(),
                    )
                } else {
                    format!(
                        "{} was the most efficient platform at {:.2}% CTR, while {} trailed at \
                         {:.2}% CTR; consider shifting budget toward the stronger channel.",
                        best.platform,
                        best.ctr(),
                        worst.platform,
                        worst.ctr(),
                    )
                }
            }
        }
    }

    /// Bullet 3: CPC cost efficiency, acknowledging client context if present.
    fn cost_bullet(summary: &MetricsSummary, context: Option<&str>) -> String {
        let spend = summary.total_spend.round_dp(2);
        let cost_stmt = if summary.total_clicks == 0 {
            format!("Cost per click is not measurable with no clicks recorded; total spend was ${spend}")
        } else {
            format!(
                "Average cost per click came in at ${} on ${spend} total spend",
                summary.average_cpc.round_dp(2),
            )
        };

        match context.map(first_sentence).filter(|s| !s.is_empty()) {
            Some(sentence) => {
                format!("{cost_stmt}; client feedback flagged: \"{sentence}\".")
            }
            None => format!(
                "{cost_stmt}; review spend pacing against next period's delivery targets."
            ),
        }
    }
}

/// First sentence of a free-text blob, kept verbatim.
fn first_sentence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.find(['.', '!', '?']) {
        Some(idx) => trimmed[..=idx].trim_end(),
        None => trimmed,
    }
}
