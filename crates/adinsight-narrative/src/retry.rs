//! Retry with exponential back-off and jitter for narrative-service calls.
//!
//! [`retry_with_backoff`] wraps a fallible async operation and retries on
//! transient errors (network failures, 5xx). Attempts are sequential, never
//! parallel, so a flaky service is not hit with duplicate billable calls.
//! Contract violations ([`NarrativeError::Malformed`]) and missing
//! configuration ([`NarrativeError::Unavailable`]) are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::NarrativeError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection reset.
/// - HTTP 5xx responses: transient server/infrastructure errors.
///
/// **Not retriable (immediate fallback):**
/// - [`NarrativeError::Unavailable`]: no credentials; retrying won't mint any.
/// - [`NarrativeError::Status`] with a 4xx: the request itself is rejected.
/// - [`NarrativeError::Malformed`]: the 3-bullet contract was violated.
/// - [`NarrativeError::Payload`]: our own serialization failed.
pub(crate) fn is_retriable(err: &NarrativeError) -> bool {
    match err {
        NarrativeError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        NarrativeError::Status { status, .. } => *status >= 500,
        NarrativeError::Unavailable(_)
        | NarrativeError::Payload(_)
        | NarrativeError::Deadline(_)
        | NarrativeError::Malformed(_) => false,
    }
}

/// Runs `operation` up to `max_attempts` times, sleeping between attempts.
///
/// Back-off schedule with `backoff_base_ms = 500`:
///
/// | Failed attempt | Sleep before next attempt |
/// |----------------|---------------------------|
/// | 1              | 500 ms × 2⁰ ± 25 % jitter |
/// | 2              | 500 ms × 2¹ ± 25 % jitter |
///
/// Delay is capped at 30 s. Non-retriable errors are returned immediately.
/// `max_attempts` counts the first attempt; it is always at least 1.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, NarrativeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, NarrativeError>>,
{
    const MAX_DELAY_MS: u64 = 30_000;
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_attempts {
                    return Err(err);
                }
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms,
                    error = %err,
                    "narrative service transient error, retrying after back-off"
                );
                attempt += 1;
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
