//! Coordinate-entry verification strategy
//!
//! The participant transcribes decimal-degree coordinates from a physical
//! clue. Malformed or out-of-range input is a validation error, distinct
//! from a wrong answer; only a well-formed pair is compared to the target.

use crate::types::{CoordinateCheck, CoordinateInputError, GeoPoint};
use crate::KM_PER_DEGREE;

/// Parse and range-validate a latitude string
pub fn parse_latitude(input: &str) -> Result<f64, CoordinateInputError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CoordinateInputError::UnparseableLatitude)?;
    if !(-90.0..=90.0).contains(&value) {
        return Err(CoordinateInputError::LatitudeOutOfRange);
    }
    Ok(value)
}

/// Parse and range-validate a longitude string
pub fn parse_longitude(input: &str) -> Result<f64, CoordinateInputError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CoordinateInputError::UnparseableLongitude)?;
    if !(-180.0..=180.0).contains(&value) {
        return Err(CoordinateInputError::LongitudeOutOfRange);
    }
    Ok(value)
}

/// Compare a validated pair against the target with independent per-axis
/// tolerance (not distance-based)
///
/// The mismatch distance is a flat-projection estimate,
/// `sqrt(dlat² + dlng²) * 111` km. Deliberately not Haversine: it is
/// display-only feedback and the coarser figure is the contract.
pub fn check(entered: GeoPoint, target: GeoPoint, tolerance_deg: f64) -> CoordinateCheck {
    let lat_diff = (entered.lat - target.lat).abs();
    let lng_diff = (entered.lng - target.lng).abs();

    if lat_diff <= tolerance_deg && lng_diff <= tolerance_deg {
        CoordinateCheck::Match
    } else {
        let distance_km = (lat_diff.powi(2) + lng_diff.powi(2)).sqrt() * KM_PER_DEGREE;
        CoordinateCheck::Mismatch { distance_km }
    }
}

/// Full path: parse both components, then check against the target
pub fn verify(
    lat_input: &str,
    lng_input: &str,
    target: GeoPoint,
    tolerance_deg: f64,
) -> Result<CoordinateCheck, CoordinateInputError> {
    let lat = parse_latitude(lat_input)?;
    let lng = parse_longitude(lng_input)?;
    Ok(check(GeoPoint::new(lat, lng), target, tolerance_deg))
}

// =============================================================================
// TESTS
// =============================================================================
