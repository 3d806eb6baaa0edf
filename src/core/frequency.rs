//! Frequency-tuning verification strategy
//!
//! A continuous value tuned within [10.0, 30.0] MHz is compared to a target;
//! the derived signal strength gives the participant feedback long before
//! the tolerance band is reached.

use crate::types::FrequencyReading;
use crate::{FREQ_BAND_MAX_MHZ, FREQ_BAND_MIN_MHZ, FREQ_FALLOFF_MHZ, FREQ_STEP_MHZ};

/// Evaluate a tuned value against the target
pub fn evaluate(value_mhz: f64, target_mhz: f64, tolerance_mhz: f64) -> FrequencyReading {
    let offset_mhz = (value_mhz - target_mhz).abs();
    FrequencyReading {
        offset_mhz,
        matched: offset_mhz <= tolerance_mhz,
        signal_strength_pct: signal_strength(offset_mhz),
    }
}

/// Feedback percentage: 100 at the target, linearly decaying to 0 at
/// `FREQ_FALLOFF_MHZ` away
pub fn signal_strength(offset_mhz: f64) -> f64 {
    (100.0 - (offset_mhz / FREQ_FALLOFF_MHZ) * 100.0).max(0.0)
}

/// Clamp a tuned value to the dial's band
pub fn clamp_to_band(value_mhz: f64) -> f64 {
    value_mhz.clamp(FREQ_BAND_MIN_MHZ, FREQ_BAND_MAX_MHZ)
}

/// Snap a tuned value to the dial's step grid (nearest 0.01 MHz)
pub fn snap_to_step(value_mhz: f64) -> f64 {
    (value_mhz / FREQ_STEP_MHZ).round() * FREQ_STEP_MHZ
}

/// Full tuning path for free-form input: clamp to the band, then snap to
/// the step grid the dial can actually express
pub fn tune(value_mhz: f64) -> f64 {
    snap_to_step(clamp_to_band(value_mhz))
}

// =============================================================================
// TESTS
// =============================================================================
