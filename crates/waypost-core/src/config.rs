use thiserror::Error;

use crate::app_config::AppConfig;
use crate::validate::Bounds;

/// Errors produced while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let geocode_api_key = require("WAYPOST_GEOCODE_API_KEY")?;
    let geocode_base_url = or_default(
        "WAYPOST_GEOCODE_BASE_URL",
        "https://maps.googleapis.com/maps/api/geocode/json",
    );
    let request_timeout_secs = parse_u64("WAYPOST_REQUEST_TIMEOUT_SECS", "30")?;
    let max_concurrent_lookups = parse_usize("WAYPOST_MAX_CONCURRENT_LOOKUPS", "8")?;
    let max_retries = parse_u32("WAYPOST_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("WAYPOST_RETRY_BACKOFF_BASE_MS", "500")?;
    let log_level = or_default("WAYPOST_LOG_LEVEL", "info");

    Ok(AppConfig {
        geocode_api_key,
        geocode_base_url,
        request_timeout_secs,
        max_concurrent_lookups,
        max_retries,
        retry_backoff_base_ms,
        log_level,
        bounds: Bounds::CONTIGUOUS_US,
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

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("WAYPOST_GEOCODE_API_KEY", "test-key");
        m
    }

    #[test]
    fn fails_without_the_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "WAYPOST_GEOCODE_API_KEY"),
            "expected MissingEnvVar(WAYPOST_GEOCODE_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_only_the_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.geocode_api_key, "test-key");
        assert_eq!(
            cfg.geocode_base_url,
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.max_concurrent_lookups, 8);
        assert_eq!(cfg.max_retries, 2);
        assert_eq!(cfg.retry_backoff_base_ms, 500);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.bounds, Bounds::CONTIGUOUS_US);
    }

    #[test]
    fn overrides_are_applied() {
        let mut map = full_env();
        map.insert("WAYPOST_GEOCODE_BASE_URL", "http://localhost:9999");
        map.insert("WAYPOST_MAX_CONCURRENT_LOOKUPS", "2");
        map.insert("WAYPOST_MAX_RETRIES", "0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.geocode_base_url, "http://localhost:9999");
        assert_eq!(cfg.max_concurrent_lookups, 2);
        assert_eq!(cfg.max_retries, 0);
    }

    #[test]
    fn invalid_numeric_value_is_rejected() {
        let mut map = full_env();
        map.insert("WAYPOST_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WAYPOST_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(WAYPOST_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
