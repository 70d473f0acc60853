//! HTTP client for the reverse-geocoding REST API.
//!
//! Wraps `reqwest` with typed response deserialization, API key management,
//! and the service's status-envelope error handling. A missing match is a
//! normal outcome (`Ok(None)`), not an error.

use std::time::Duration;

use reqwest::{Client, Url};
use waypost_core::{Coordinate, LocationInfo};

use crate::error::GeocodeError;
use crate::extract::location_info_from;
use crate::types::GeocodeResponse;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Client for the reverse-geocoding REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`GeocodeClient::new`]
/// for production or [`GeocodeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a new client pointed at the production geocoding API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("waypost/0.1 (coordinate-tracker)")
            .build()?;

        let base_url =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| GeocodeError::Api {
                status: "INVALID_BASE_URL".to_owned(),
                message: format!("invalid base URL '{base_url}': {e}"),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Looks up the place information for one coordinate.
    ///
    /// Returns `Ok(None)` when the service is reachable but has no match for
    /// the coordinate (empty `results` or `ZERO_RESULTS` status). Only the
    /// first result is consulted.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or a non-2xx HTTP status.
    /// - [`GeocodeError::Api`] if the service reports a non-OK status.
    /// - [`GeocodeError::Deserialize`] if the response body does not match
    ///   the expected shape.
    pub async fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<LocationInfo>, GeocodeError> {
        let url = self.build_url(coordinate);
        let response = self.request_json(&url).await?;

        if response.status != STATUS_OK && response.status != STATUS_ZERO_RESULTS {
            return Err(GeocodeError::Api {
                status: response.status,
                message: response
                    .error_message
                    .unwrap_or_else(|| "unknown error".to_owned()),
            });
        }

        Ok(response.results.first().map(location_info_from))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters: `latlng={lat},{lng}` plus the API key.
    fn build_url(&self, coordinate: Coordinate) -> Url {
        let latlng = format!("{},{}", coordinate.latitude, coordinate.longitude);
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("latlng", &latlng);
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as a [`GeocodeResponse`].
    async fn request_json(&self, url: &Url) -> Result<GeocodeResponse, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            // The key is in the query string; log only the path.
            context: url.path().to_owned(),
            source: e,
        })
    }
}
