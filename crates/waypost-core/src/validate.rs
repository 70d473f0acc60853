//! Coordinate validation: free-text input to an admitted [`Coordinate`].
//!
//! Pure functions — errors are returned to the caller for user-facing
//! messaging and never trigger any side effect themselves.

use thiserror::Error;

use crate::types::Coordinate;

/// Which of the two inputs failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Latitude => write!(f, "latitude"),
            Field::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors produced while validating a proposed coordinate pair.
///
/// Both variants block admission to the store entirely.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The input text could not be parsed as a finite decimal number.
    #[error("{field} is not a number: \"{raw}\"")]
    NotANumber { field: Field, raw: String },

    /// Both inputs parsed but the point lies outside the accepted region.
    #[error("({latitude}, {longitude}) is outside the accepted region")]
    OutOfBounds { latitude: f64, longitude: f64 },
}

/// An inclusive bounded rectangle over both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Bounds {
    /// The contiguous United States, the region the tracker accepts by default.
    pub const CONTIGUOUS_US: Bounds = Bounds {
        lat_min: 24.396_308,
        lat_max: 49.384_358,
        lng_min: -125.0,
        lng_max: -66.934_57,
    };

    /// Inclusive containment check on both axes.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.latitude >= self.lat_min
            && coord.latitude <= self.lat_max
            && coord.longitude >= self.lng_min
            && coord.longitude <= self.lng_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::CONTIGUOUS_US
    }
}

/// Parses both inputs as decimal numbers and checks them against `bounds`.
///
/// Values are retained at full floating precision — display rounding is a
/// view concern. `NaN` and infinities are rejected as [`ValidationError::NotANumber`]
/// even though `f64::from_str` accepts them.
///
/// # Errors
///
/// - [`ValidationError::NotANumber`] if either input fails to parse.
/// - [`ValidationError::OutOfBounds`] if the parsed point lies outside `bounds`.
pub fn validate(
    raw_lat: &str,
    raw_lng: &str,
    bounds: &Bounds,
) -> Result<Coordinate, ValidationError> {
    let latitude = parse_finite(raw_lat, Field::Latitude)?;
    let longitude = parse_finite(raw_lng, Field::Longitude)?;

    let coord = Coordinate::new(latitude, longitude);
    if !bounds.contains(coord) {
        return Err(ValidationError::OutOfBounds {
            latitude,
            longitude,
        });
    }
    Ok(coord)
}

fn parse_finite(raw: &str, field: Field) -> Result<f64, ValidationError> {
    let not_a_number = || ValidationError::NotANumber {
        field,
        raw: raw.to_owned(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const US: &Bounds = &Bounds::CONTIGUOUS_US;

    #[test]
    fn point_strictly_inside_is_accepted() {
        let coord = validate("40.7306", "-73.9352", US).unwrap();
        assert!((coord.latitude - 40.7306).abs() < f64::EPSILON);
        assert!((coord.longitude - -73.9352).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_corner_is_accepted() {
        assert!(validate("24.396308", "-125.0", US).is_ok());
        assert!(validate("49.384358", "-66.93457", US).is_ok());
    }

    #[test]
    fn just_outside_one_axis_is_rejected() {
        let result = validate("50.0", "-73.9352", US);
        assert!(
            matches!(result, Err(ValidationError::OutOfBounds { .. })),
            "expected OutOfBounds, got: {result:?}"
        );
        let result = validate("40.7306", "-66.0", US);
        assert!(matches!(result, Err(ValidationError::OutOfBounds { .. })));
    }

    #[test]
    fn non_numeric_latitude_is_rejected() {
        let result = validate("abc", "10", US);
        assert!(
            matches!(
                result,
                Err(ValidationError::NotANumber {
                    field: Field::Latitude,
                    ..
                })
            ),
            "expected NotANumber(latitude), got: {result:?}"
        );
    }

    #[test]
    fn non_numeric_longitude_is_rejected() {
        let result = validate("10", "xyz", US);
        assert!(matches!(
            result,
            Err(ValidationError::NotANumber {
                field: Field::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn nan_and_infinity_are_rejected_as_not_a_number() {
        assert!(matches!(
            validate("NaN", "-73.9352", US),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            validate("40.0", "-inf", US),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(validate(" 40.7306 ", "\t-73.9352", US).is_ok());
    }

    #[test]
    fn full_precision_is_retained() {
        let coord = validate("40.730610123456", "-73.935242987654", US).unwrap();
        assert!((coord.latitude - 40.730_610_123_456).abs() < 1e-12);
    }
}
