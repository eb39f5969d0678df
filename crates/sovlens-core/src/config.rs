use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables already in the process.
///
/// Does NOT load `.env` files; the binary does that before argument parsing
/// so `.env` values also reach clap's `env` fallbacks.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Provider credentials are optional here: a missing key surfaces later as a
/// failed call, which every pipeline stage already degrades from.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let serpapi_api_key = optional("SERPAPI_API_KEY");
    let openai_api_key = optional("OPENAI_API_KEY");
    let openai_model = or_default("OPENAI_MODEL_NAME", "gpt-4o");

    let serpapi_base_url = or_default("SOVLENS_SERPAPI_BASE_URL", "https://serpapi.com");
    let openai_base_url = or_default("SOVLENS_OPENAI_BASE_URL", "https://api.openai.com/v1");

    let request_timeout_secs = parse_u64("SOVLENS_REQUEST_TIMEOUT_SECS", "60")?;
    let result_limit = parse_usize("SOVLENS_RESULT_LIMIT", "10")?;
    let keyword_count = parse_usize("SOVLENS_KEYWORD_COUNT", "5")?;
    let max_concurrent_keywords = parse_usize("SOVLENS_MAX_CONCURRENT_KEYWORDS", "1")?;

    if keyword_count == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOVLENS_KEYWORD_COUNT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let user_agent = or_default("SOVLENS_USER_AGENT", "sovlens/0.1 (share-of-voice)");
    let log_level = or_default("SOVLENS_LOG_LEVEL", "info");

    Ok(AppConfig {
        serpapi_api_key,
        openai_api_key,
        openai_model,
        serpapi_base_url,
        openai_base_url,
        request_timeout_secs,
        result_limit,
        keyword_count,
        max_concurrent_keywords,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
        assert!(cfg.serpapi_api_key.is_none());
        assert!(cfg.openai_api_key.is_none());
        assert_eq!(cfg.openai_model, "gpt-4o");
        assert_eq!(cfg.serpapi_base_url, "https://serpapi.com");
        assert_eq!(cfg.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.result_limit, 10);
        assert_eq!(cfg.keyword_count, 5);
        assert_eq!(cfg.max_concurrent_keywords, 1);
        assert_eq!(cfg.user_agent, "sovlens/0.1 (share-of-voice)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_app_config_reads_credentials() {
        let mut map = HashMap::new();
        map.insert("SERPAPI_API_KEY", "serp-key");
        map.insert("OPENAI_API_KEY", "sk-test");
        map.insert("OPENAI_MODEL_NAME", "gpt-4o-mini");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.serpapi_api_key.as_deref(), Some("serp-key"));
        assert_eq!(cfg.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.openai_model, "gpt-4o-mini");
    }

    #[test]
    fn blank_credentials_are_treated_as_missing() {
        let mut map = HashMap::new();
        map.insert("SERPAPI_API_KEY", "   ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.serpapi_api_key.is_none());
    }

    #[test]
    fn request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("SOVLENS_REQUEST_TIMEOUT_SECS", "15");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 15);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("SOVLENS_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOVLENS_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SOVLENS_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn max_concurrent_keywords_override() {
        let mut map = HashMap::new();
        map.insert("SOVLENS_MAX_CONCURRENT_KEYWORDS", "4");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_concurrent_keywords, 4);
    }

    #[test]
    fn zero_keyword_count_is_rejected() {
        let mut map = HashMap::new();
        map.insert("SOVLENS_KEYWORD_COUNT", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOVLENS_KEYWORD_COUNT"),
            "expected InvalidEnvVar(SOVLENS_KEYWORD_COUNT), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_credentials() {
        let mut map = HashMap::new();
        map.insert("OPENAI_API_KEY", "sk-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
