use thiserror::Error;

/// Errors raised by the narrative-service path.
///
/// All variants are absorbed at the orchestrator boundary; none propagate to
/// the pipeline caller. [`NarrativeError::kind`] maps each variant onto the
/// three failure categories the orchestrator logs.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// No backend configured or credentials missing. Never retried.
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx HTTP status.
    #[error("narrative service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized.
    #[error("request payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),

    /// The caller's overall deadline elapsed before the service answered.
    /// Treated like a transient service failure, but never retried: the
    /// wall-clock budget is already spent.
    #[error("overall narrative deadline of {0:?} exceeded")]
    Deadline(std::time::Duration),

    /// The service responded but violated the 3-bullet contract.
    /// Never retried: a data-contract violation is not a transient fault.
    #[error("malformed narrative response: {0}")]
    Malformed(String),
}

impl NarrativeError {
    /// Coarse failure category used for observability at the orchestrator.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            NarrativeError::Unavailable(_) => "service_unavailable",
            NarrativeError::Http(_)
            | NarrativeError::Status { .. }
            | NarrativeError::Payload(_)
            | NarrativeError::Deadline(_) => "service_error",
            NarrativeError::Malformed(_) => "malformed_response",
        }
    }
}
