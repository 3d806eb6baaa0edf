//! Proximity (gps) verification strategy
//!
//! Pure predicate over (live position, stage target): in range iff the
//! Haversine distance is within the stage radius. A missing position means
//! "not yet satisfied", never an error.

use crate::core::geo;
use crate::types::{GeoPoint, GpsPosition, ProximityReport, Stage, UnlockSpec};

/// Evaluate the proximity condition for a stage
///
/// Returns `None` if the stage is not gps-guarded.
pub fn evaluate(stage: &Stage, position: Option<&GpsPosition>) -> Option<ProximityReport> {
    let UnlockSpec::Gps {
        latitude,
        longitude,
        radius_meters,
    } = stage.spec
    else {
        return None;
    };

    let target = GeoPoint::new(latitude, longitude);
    Some(check(position, target, radius_meters))
}

/// Evaluate against an explicit target and radius
pub fn check(position: Option<&GpsPosition>, target: GeoPoint, radius_m: f64) -> ProximityReport {
    match position {
        None => ProximityReport::pending(),
        Some(fix) => {
            let distance_m = geo::distance_meters(fix.point(), target);
            ProximityReport {
                distance_m: Some(distance_m),
                in_range: distance_m <= radius_m,
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
