//! Position and sensor-quality types

use serde::{Deserialize, Serialize};

/// A coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lng >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.6}° {} {:.6}° {}",
            self.lat.abs(),
            ns,
            self.lng.abs(),
            ew
        )
    }
}

/// One fix from a position source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported accuracy radius, meters
    pub accuracy_m: f64,
    /// Fix timestamp, Unix milliseconds
    pub timestamp_ms: i64,
}

impl GpsPosition {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Sensor failure classes, mirroring the platform geolocation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpsErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unsupported,
}

/// A sensor error with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpsError {
    pub kind: GpsErrorKind,
    pub message: String,
}

impl GpsError {
    pub fn new(kind: GpsErrorKind) -> Self {
        let message = match kind {
            GpsErrorKind::PermissionDenied => {
                "Location access denied. Please enable location services."
            }
            GpsErrorKind::PositionUnavailable => "Location unavailable. Check your GPS settings.",
            GpsErrorKind::Timeout => "Location request timed out. Retrying...",
            GpsErrorKind::Unsupported => "Positioning is not supported on this device.",
        };
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for GpsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GpsError {}

/// Fix-accuracy quality buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalQuality {
    /// ≤ 10 m
    Excellent,
    /// ≤ 30 m
    Good,
    /// ≤ 100 m
    Fair,
    /// > 100 m
    Poor,
}

impl SignalQuality {
    /// User-facing description
    pub fn description(&self) -> &'static str {
        match self {
            SignalQuality::Excellent => "GPS signal excellent",
            SignalQuality::Good => "GPS signal good",
            SignalQuality::Fair => "GPS signal fair",
            SignalQuality::Poor => "GPS signal poor",
        }
    }
}

impl std::fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignalQuality::Excellent => "excellent",
            SignalQuality::Good => "good",
            SignalQuality::Fair => "fair",
            SignalQuality::Poor => "poor",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
