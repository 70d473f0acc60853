//! Core domain types for coordinates, markers, and selection.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair identifying a point on Earth.
///
/// Immutable once accepted into the store; identified only by its position
/// in the coordinate list (there is no stable id across removals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Place attributes produced by one reverse-geocoding lookup.
///
/// `city` and `state` are empty strings when the service returned no matching
/// address component for them, mirroring the wire behaviour; the remaining
/// fields are absent instead. A later pipeline run replaces the whole value,
/// it is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationInfo {
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    /// Human-readable wall-clock time at which enrichment completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// A coordinate plus its optional enrichment result — the display-ready
/// projection rendered as a map pin.
///
/// One `MarkerInfo` exists per stored coordinate, at the same ordinal
/// position. `location` is `None` when the lookup failed or found no match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerInfo {
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
}

impl MarkerInfo {
    #[must_use]
    pub fn new(coordinate: Coordinate, location: Option<LocationInfo>) -> Self {
        Self {
            coordinate,
            location,
        }
    }
}

/// The marker currently open for detail display, plus the index it was
/// selected at.
///
/// This is a copy taken at selection time, not a live reference — it does not
/// track later re-enrichment of the same position unless re-derived from the
/// latest marker list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedMarker {
    pub index: usize,
    pub marker: MarkerInfo,
}

/// Five seed cities for a freshly opened tracker.
#[must_use]
pub fn sample_coordinates() -> Vec<Coordinate> {
    vec![
        Coordinate::new(40.730_61, -73.935_242),  // New York
        Coordinate::new(34.0522, -118.2437),      // Los Angeles
        Coordinate::new(41.8781, -87.6298),       // Chicago
        Coordinate::new(29.7604, -95.3698),       // Houston
        Coordinate::new(39.9526, -75.1652),       // Philadelphia
    ]
}
