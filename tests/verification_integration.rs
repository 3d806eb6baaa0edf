//! Integration tests for the verification strategies
//!
//! Exercises each strategy against the reference catalog's parameters and
//! the sensor substitution point.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use waylock::core::{
    catalog, coordinate, engine, frequency, proximity, timegate, FixOptions, GpsWatch,
    MockPositionSource, PositionSource,
};
use waylock::types::{CoordinateCheck, GeoPoint, UnlockSpec};

#[test]
fn test_mock_source_unlocks_the_active_gps_stage() {
    let stages = engine::initialize(&catalog::initial_stages());
    let active = engine::active_stage(&stages).unwrap();

    let UnlockSpec::Gps {
        latitude,
        longitude,
        ..
    } = active.spec
    else {
        panic!("stage 1 is gps-guarded");
    };

    // The mock source simulates standing at the active stage's target
    let source = MockPositionSource::at(latitude, longitude);
    let fix = source.acquire(&FixOptions::default()).unwrap();

    let report = proximity::evaluate(active, Some(&fix)).unwrap();
    assert!(report.in_range);
    assert!(report.distance_m.unwrap() < 1.0);
}

#[test]
fn test_coordinate_entry_against_catalog_target() {
    let stages = catalog::initial_stages();
    let cipher = stages.iter().find(|s| s.id == 8).unwrap();

    let UnlockSpec::CoordinateEntry {
        latitude,
        longitude,
        tolerance_degrees,
    } = cipher.spec
    else {
        panic!("stage 8 is coordinate entry");
    };
    let target = GeoPoint::new(latitude, longitude);

    // Validation errors are not wrong answers
    assert!(coordinate::verify("91", "-84.446", target, tolerance_degrees).is_err());
    assert!(coordinate::verify("39.15", "181", target, tolerance_degrees).is_err());

    // Slightly-off transcription still matches within tolerance
    let near = coordinate::verify("39.1516", "-84.4459", target, tolerance_degrees).unwrap();
    assert!(near.is_match());

    // A wrong answer reports closeness
    match coordinate::verify("39.16", "-84.44", target, tolerance_degrees).unwrap() {
        CoordinateCheck::Mismatch { distance_km } => assert!(distance_km > 0.0),
        CoordinateCheck::Match => panic!("should mismatch"),
    }
}

#[test]
fn test_frequency_against_catalog_target() {
    let stages = catalog::initial_stages();
    let radio = stages.iter().find(|s| s.id == 3).unwrap();

    let UnlockSpec::Frequency {
        target_mhz,
        tolerance_mhz,
    } = radio.spec
    else {
        panic!("stage 3 is the frequency puzzle");
    };

    assert!(frequency::evaluate(20.505, target_mhz, tolerance_mhz).matched);
    assert!(!frequency::evaluate(20.52, target_mhz, tolerance_mhz).matched);
    assert_eq!(
        frequency::evaluate(target_mhz, target_mhz, tolerance_mhz).signal_strength_pct,
        100.0
    );
}

#[test]
fn test_time_gate_against_catalog_target() {
    let stages = catalog::initial_stages();
    let safe_house = stages.iter().find(|s| s.id == 11).unwrap();

    let UnlockSpec::Time { ref target_time } = safe_house.spec else {
        panic!("stage 11 is time-locked");
    };
    let target = timegate::parse_target(target_time).unwrap();

    // Pure evaluation at both sides of the threshold
    use chrono::TimeZone;
    let before = chrono::Local.with_ymd_and_hms(2026, 6, 14, 12, 0, 0).unwrap();
    let after = chrono::Local.with_ymd_and_hms(2026, 6, 14, 18, 0, 0).unwrap();

    let closed = timegate::evaluate(target, before);
    assert!(!closed.reached);
    assert_eq!(closed.hours, 5);

    let open = timegate::evaluate(target, after);
    assert!(open.reached);

    // Past the target, the next occurrence is tomorrow, under 24h away
    assert_eq!(
        open.opens_at.date_naive(),
        after.date_naive() + chrono::Duration::days(1)
    );
}

#[tokio::test]
async fn test_watch_subscription_reaches_in_range() {
    let stages = engine::initialize(&catalog::initial_stages());
    let active = engine::active_stage(&stages).unwrap().clone();

    let UnlockSpec::Gps {
        latitude,
        longitude,
        radius_meters,
    } = active.spec
    else {
        panic!("stage 1 is gps-guarded");
    };

    let source: Arc<dyn PositionSource> = Arc::new(MockPositionSource::at(latitude, longitude));
    let watch = GpsWatch::spawn_with_interval(
        source,
        FixOptions::default(),
        Duration::from_millis(10),
    );

    let mut rx = watch.subscribe();
    rx.changed().await.unwrap();
    let fix = rx.borrow().clone().unwrap().unwrap();

    let report = proximity::check(
        Some(&fix),
        GeoPoint::new(latitude, longitude),
        radius_meters,
    );
    assert!(report.in_range);

    watch.cancel();
}
