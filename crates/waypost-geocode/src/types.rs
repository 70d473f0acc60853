//! Geocoding API response types.
//!
//! Models the JSON returned by the reverse-geocoding endpoint: a top-level
//! `status` string plus a `results` array of candidate addresses, each made
//! of labelled address components. Only the fields the tracker reads are
//! modelled; everything else is ignored.

use serde::Deserialize;

/// Top-level envelope of a geocoding response.
///
/// `status` is `"OK"` on success and `"ZERO_RESULTS"` when the service is
/// reachable but has no match for the coordinate — the latter is not an
/// error. Any other value indicates an API-level failure, with the detail in
/// `error_message`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One candidate address for the looked-up coordinate.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: String,
}

/// One address component, tagged with one or more type labels.
#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
