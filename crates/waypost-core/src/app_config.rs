use crate::validate::Bounds;

/// Runtime configuration for the tracker, loaded from environment variables
/// by [`crate::config::load_app_config`].
#[derive(Clone)]
pub struct AppConfig {
    /// Credential for the reverse-geocoding service.
    pub geocode_api_key: String,
    pub geocode_base_url: String,
    pub request_timeout_secs: u64,
    /// Upper bound on in-flight enrichment lookups per pipeline run.
    pub max_concurrent_lookups: usize,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub log_level: String,
    /// Accepted region for new coordinates.
    pub bounds: Bounds,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("geocode_api_key", &"[redacted]")
            .field("geocode_base_url", &self.geocode_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("log_level", &self.log_level)
            .field("bounds", &self.bounds)
            .finish()
    }
}
