//! Waylock: sequential unlock and progression engine for location-based hunts
//!
//! Core path: catalog → engine → store, with verification strategies
//! (proximity, coordinate entry, frequency, time lock, scan) deciding when
//! a stage's unlock condition is met.

pub mod core;
pub mod types;

// =============================================================================
// GEODESY [C]
// =============================================================================

/// Mean Earth radius in meters (Haversine)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Kilometers per degree, flat-projection closeness estimate
pub const KM_PER_DEGREE: f64 = 111.0;

// =============================================================================
// VERIFICATION TOLERANCES [C]
// =============================================================================

/// Coordinate-entry tolerance per axis, degrees (~111 m)
pub const COORD_TOLERANCE_DEG: f64 = 0.001;

/// Frequency-match tolerance, MHz
pub const FREQ_TOLERANCE_MHZ: f64 = 0.01;

/// Tunable band lower bound, MHz
pub const FREQ_BAND_MIN_MHZ: f64 = 10.0;

/// Tunable band upper bound, MHz
pub const FREQ_BAND_MAX_MHZ: f64 = 30.0;

/// Tuning step, MHz
pub const FREQ_STEP_MHZ: f64 = 0.01;

/// Offset at which reported signal strength decays to zero, MHz
pub const FREQ_FALLOFF_MHZ: f64 = 5.0;

/// Simulated scan duration for the scan placeholder, seconds
pub const SCAN_DURATION_SECS: u64 = 3;

// =============================================================================
// SENSOR THRESHOLDS [C]
// =============================================================================

/// Worst acceptable fix accuracy before a reading is flagged, meters
pub const MIN_ACCURACY_M: f64 = 500.0;

/// Position acquisition timeout (milliseconds)
pub const FIX_TIMEOUT_MS: u64 = 10_000;

/// Continuous watch polling interval (milliseconds)
pub const WATCH_INTERVAL_MS: u64 = 5_000;

/// Countdown tick interval (milliseconds)
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Accuracy reported by the mock position source, meters
pub const MOCK_ACCURACY_M: f64 = 10.0;

// =============================================================================
// PERSISTENCE [C]
// =============================================================================

/// Persisted snapshot schema version
pub const STORAGE_VERSION: &str = "1.0";

/// Hints a stage carries
pub const HINTS_PER_STAGE: u8 = 3;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
