use crate::app_config::{AppConfig, NarrativeBackend};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable has a default, so an empty environment yields a valid config
/// running in full fallback mode.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let narrative_backend = parse_backend(&or_default("ADINSIGHT_NARRATIVE_BACKEND", "none"))?;
    let gemini_api_key = lookup("GEMINI_API_KEY").ok();
    let openai_api_key = lookup("OPENAI_API_KEY").ok();
    let gemini_model = or_default("ADINSIGHT_GEMINI_MODEL", "gemini-pro");
    let openai_model = or_default("ADINSIGHT_OPENAI_MODEL", "gpt-4o-mini");

    let retry_attempts = parse_u32("ADINSIGHT_NARRATIVE_RETRY_ATTEMPTS", "2")?;
    if retry_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ADINSIGHT_NARRATIVE_RETRY_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let request_timeout_secs = parse_u64("ADINSIGHT_NARRATIVE_TIMEOUT_SECS", "10")?;
    let backoff_base_ms = parse_u64("ADINSIGHT_NARRATIVE_BACKOFF_BASE_MS", "500")?;
    let overall_deadline_secs = match lookup("ADINSIGHT_OVERALL_DEADLINE_SECS") {
        Ok(raw) => Some(raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "ADINSIGHT_OVERALL_DEADLINE_SECS".to_string(),
            reason: e.to_string(),
        })?),
        Err(_) => None,
    };
    let ctr_health_threshold = parse_f64("ADINSIGHT_CTR_HEALTH_THRESHOLD", "2.0")?;
    let log_level = or_default("ADINSIGHT_LOG_LEVEL", "info");

    Ok(AppConfig {
        narrative_backend,
        gemini_api_key,
        openai_api_key,
        gemini_model,
        openai_model,
        retry_attempts,
        request_timeout_secs,
        backoff_base_ms,
        overall_deadline_secs,
        ctr_health_threshold,
        log_level,
    })
}

/// Parse a string into a `NarrativeBackend` selector.
///
/// Unlike most defaults, an unrecognized value here is an error: silently
/// dropping to fallback mode would hide a misconfigured service name.
fn parse_backend(s: &str) -> Result<NarrativeBackend, ConfigError> {
    match s {
        "none" => Ok(NarrativeBackend::None),
        "gemini" => Ok(NarrativeBackend::Gemini),
        "openai" => Ok(NarrativeBackend::OpenAi),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ADINSIGHT_NARRATIVE_BACKEND".to_string(),
            reason: format!("unknown backend '{other}' (expected none, gemini, or openai)"),
        }),
    }
}
