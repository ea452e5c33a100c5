/// Which external narrative service the orchestrator should attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeBackend {
    /// No service configured: the pipeline runs in full fallback mode.
    None,
    Gemini,
    OpenAi,
}

impl std::fmt::Display for NarrativeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NarrativeBackend::None => write!(f, "none"),
            NarrativeBackend::Gemini => write!(f, "gemini"),
            NarrativeBackend::OpenAi => write!(f, "openai"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub narrative_backend: NarrativeBackend,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_model: String,
    /// Total narrative-request attempts, including the first one.
    pub retry_attempts: u32,
    pub request_timeout_secs: u64,
    pub backoff_base_ms: u64,
    /// Overall wall-clock budget for the narrative path; `None` = unbounded.
    pub overall_deadline_secs: Option<u64>,
    /// CTR (percent) above which the fallback narrator calls a period healthy.
    pub ctr_health_threshold: f64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("narrative_backend", &self.narrative_backend)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("openai_model", &self.openai_model)
            .field("retry_attempts", &self.retry_attempts)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .field("overall_deadline_secs", &self.overall_deadline_secs)
            .field("ctr_health_threshold", &self.ctr_health_threshold)
            .field("log_level", &self.log_level)
            .finish()
    }
}
