//! Stage definitions: status, unlock condition, narrative content

use serde::{Deserialize, Serialize};

/// The three possible states of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Not yet reachable
    Locked,
    /// The current frontier, verification in progress
    Active,
    /// Unlock condition satisfied
    Completed,
}

impl StageStatus {
    /// Get glyph for state
    pub fn glyph(&self) -> &'static str {
        match self {
            StageStatus::Locked => "🔒",
            StageStatus::Active => "▶",
            StageStatus::Completed => "✓",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StageStatus::Locked => "LOCKED",
            StageStatus::Active => "ACTIVE",
            StageStatus::Completed => "COMPLETED",
        };
        write!(f, "{}", name)
    }
}

/// Public unlock-type classes — which verification strategy applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockType {
    Gps,
    Puzzle,
    Scan,
    Time,
}

impl std::fmt::Display for UnlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnlockType::Gps => "gps",
            UnlockType::Puzzle => "puzzle",
            UnlockType::Scan => "scan",
            UnlockType::Time => "time",
        };
        write!(f, "{}", name)
    }
}

/// Type-specific unlock parameters
///
/// Both puzzle variants (coordinate entry, frequency tuning) collapse to
/// `UnlockType::Puzzle` through `kind()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unlock", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UnlockSpec {
    /// Proximity: Haversine distance to target must be within the radius
    Gps {
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
    },
    /// Participant enters decimal-degree coordinates found in a physical clue
    CoordinateEntry {
        latitude: f64,
        longitude: f64,
        tolerance_degrees: f64,
    },
    /// Participant tunes a continuous value into a tolerance band
    Frequency { target_mhz: f64, tolerance_mhz: f64 },
    /// Placeholder: succeeds after a simulated scan duration
    Scan { duration_secs: u64 },
    /// Unlocks at the next occurrence of a time-of-day, "HH:MM" 24-hour
    Time { target_time: String },
}

impl UnlockSpec {
    /// Collapse to the public unlock-type class
    pub fn kind(&self) -> UnlockType {
        match self {
            UnlockSpec::Gps { .. } => UnlockType::Gps,
            UnlockSpec::CoordinateEntry { .. } | UnlockSpec::Frequency { .. } => UnlockType::Puzzle,
            UnlockSpec::Scan { .. } => UnlockType::Scan,
            UnlockSpec::Time { .. } => UnlockType::Time,
        }
    }
}

/// One ordered unit of the progression
///
/// Immutable except for `status`; `id` defines the total order (1..=N).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Positive, unique, ordering key
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    /// Human-readable place name
    pub location: String,
    /// Scheduled arrival time, display only
    pub time: String,
    pub description: String,
    /// The in-fiction clue shown while the stage is active
    pub clue: String,
    /// Unlock condition, flattened into the stage record
    #[serde(flatten)]
    pub spec: UnlockSpec,
    /// Exactly 3 progressive hints
    pub hints: [String; 3],
    pub status: StageStatus,
}

impl Stage {
    /// Which verification strategy applies
    pub fn unlock_type(&self) -> UnlockType {
        self.spec.kind()
    }

    pub fn is_locked(&self) -> bool {
        self.status == StageStatus::Locked
    }

    pub fn is_active(&self) -> bool {
        self.status == StageStatus::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == StageStatus::Completed
    }
}

// =============================================================================
// TESTS
// =============================================================================
