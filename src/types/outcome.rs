//! Verification strategy outputs
//!
//! Each strategy returns a predicate result plus enough derived data
//! (distance, closeness, remaining time) to drive presentation by the
//! caller. Strategies never mutate stage status.

use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Serialize};

/// Proximity strategy result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityReport {
    /// Haversine distance to the target, meters; `None` until a fix exists
    pub distance_m: Option<f64>,
    /// Unlock condition satisfied (distance ≤ radius)
    pub in_range: bool,
}

impl ProximityReport {
    /// No fix acquired yet: not satisfied, not an error
    pub fn pending() -> Self {
        Self {
            distance_m: None,
            in_range: false,
        }
    }
}

/// Malformed coordinate input — distinct from a wrong answer, never
/// counted as an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateInputError {
    /// Not parseable as a decimal-degree number
    UnparseableLatitude,
    UnparseableLongitude,
    /// Outside [-90, 90]
    LatitudeOutOfRange,
    /// Outside [-180, 180]
    LongitudeOutOfRange,
}

impl CoordinateInputError {
    /// User-facing message, reported immediately
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnparseableLatitude | Self::LatitudeOutOfRange => {
                "Invalid latitude. Must be between -90 and 90."
            }
            Self::UnparseableLongitude | Self::LongitudeOutOfRange => {
                "Invalid longitude. Must be between -180 and 180."
            }
        }
    }
}

impl std::fmt::Display for CoordinateInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CoordinateInputError {}

/// Well-formed coordinate entry, checked against the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CoordinateCheck {
    /// Both axis deltas within tolerance
    Match,
    /// Wrong answer, with a flat-projection closeness estimate in km
    Mismatch { distance_km: f64 },
}

impl CoordinateCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, CoordinateCheck::Match)
    }
}

/// Frequency strategy result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReading {
    /// Absolute offset from the target, MHz
    pub offset_mhz: f64,
    /// Within the tolerance band
    pub matched: bool,
    /// Feedback percentage: 100 at the target, 0 at 5+ MHz away
    pub signal_strength_pct: f64,
}

/// Time-lock strategy result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGateStatus {
    /// Target time-of-day
    pub target: NaiveTime,
    /// The next future occurrence the gate evaluates against
    pub opens_at: DateTime<Local>,
    /// Gate open (now ≥ target occurrence)
    pub reached: bool,
    /// Whole hours remaining
    pub hours: u32,
    /// Whole minutes remaining
    pub minutes: u32,
    /// Whole seconds remaining
    pub seconds: u32,
}

impl TimeGateStatus {
    /// Countdown string, zero-padded "HH:MM:SS"
    pub fn countdown(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
