//! Core types for Waylock

mod outcome;
mod position;
mod progress;
mod stage;

pub use outcome::{
    CoordinateCheck, CoordinateInputError, FrequencyReading, ProximityReport, TimeGateStatus,
};
pub use position::{GeoPoint, GpsError, GpsErrorKind, GpsPosition, SignalQuality};
pub use progress::{ProgressSnapshot, ProgressSummary};
pub use stage::{Stage, StageStatus, UnlockSpec, UnlockType};
