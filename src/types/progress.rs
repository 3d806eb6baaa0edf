//! Persisted snapshot layout and aggregate progress

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Stage;

/// The persisted record: schema version, full stage list, last write time
///
/// Owned by the persistence layer; the engine only hands stage lists across
/// the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub version: String,
    pub stages: Vec<Stage>,
    pub last_updated: DateTime<Utc>,
}

impl ProgressSnapshot {
    /// Wrap a stage list with the current schema version and timestamp
    pub fn now(version: &str, stages: Vec<Stage>) -> Self {
        Self {
            version: version.to_string(),
            stages,
            last_updated: Utc::now(),
        }
    }
}

/// Aggregate completion numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// round(100 * completed / total), half-up
    pub percentage: u8,
}

impl std::fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} stages ({}%)",
            self.completed, self.total, self.percentage
        )
    }
}
