//! Projection from a raw geocoding result to a typed [`LocationInfo`].

use waypost_core::LocationInfo;

use crate::types::GeocodeResult;

/// Component type labels the tracker projects into [`LocationInfo`] fields.
const CITY: &str = "locality";
const STATE: &str = "administrative_area_level_1";
const NEIGHBORHOOD: &str = "neighborhood";
const ZIP_CODE: &str = "postal_code";

/// Builds a [`LocationInfo`] from one geocoding result.
///
/// For each output field, the first component whose `types` list contains the
/// matching label wins; a label with no matching component yields an empty or
/// absent field, never an error. The enrichment timestamp is stamped by the
/// pipeline at completion, not here.
#[must_use]
pub(crate) fn location_info_from(result: &GeocodeResult) -> LocationInfo {
    LocationInfo {
        city: component(result, CITY).unwrap_or_default(),
        state: component(result, STATE).unwrap_or_default(),
        neighborhood: component(result, NEIGHBORHOOD),
        zip_code: component(result, ZIP_CODE),
        formatted_address: if result.formatted_address.is_empty() {
            None
        } else {
            Some(result.formatted_address.clone())
        },
        timestamp: None,
    }
}

fn component(result: &GeocodeResult, label: &str) -> Option<String> {
    result
        .address_components
        .iter()
        .find(|c| c.types.iter().any(|t| t == label))
        .map(|c| c.long_name.clone())
}
