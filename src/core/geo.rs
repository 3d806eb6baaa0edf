//! Great-circle distance and signal-quality classification

use crate::types::{GeoPoint, SignalQuality};
use crate::EARTH_RADIUS_M;

/// Haversine distance between two coordinate pairs, meters
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Is the position within `radius_m` of the target?
pub fn is_within_radius(position: GeoPoint, target: GeoPoint, radius_m: f64) -> bool {
    distance_meters(position, target) <= radius_m
}

/// Format a distance for display: meters under 1 km, otherwise one-decimal km
///
/// The unit branch looks at the rounded value, so 999.5 m crosses into
/// "1.0km" rather than printing "1000m".
pub fn format_distance(meters: f64) -> String {
    let rounded = meters.round() as i64;
    if rounded < 1000 {
        format!("{}m", rounded)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Classify a fix-accuracy radius into a quality bucket
pub fn accuracy_quality(accuracy_m: f64) -> SignalQuality {
    if accuracy_m <= 10.0 {
        SignalQuality::Excellent
    } else if accuracy_m <= 30.0 {
        SignalQuality::Good
    } else if accuracy_m <= 100.0 {
        SignalQuality::Fair
    } else {
        SignalQuality::Poor
    }
}

// =============================================================================
// TESTS
// =============================================================================
