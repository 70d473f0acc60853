use thiserror::Error;

/// Errors returned by the geocoding client.
///
/// None of these reach the user as errors — the pipeline contains each one to
/// its own marker, which simply renders without place details.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-OK status (denied key, over quota, ...).
    #[error("geocoding API error ({status}): {message}")]
    Api { status: String, message: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
