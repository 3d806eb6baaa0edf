//! Durable progress store
//!
//! The full stage-list-with-status snapshot is persisted as JSON under a
//! single well-known file in the store directory, tagged with the schema
//! version. Load validates the structure and self-heals on corruption by
//! wiping the store and returning nothing, which triggers re-initialization
//! upstream. Nothing in here is fatal; the worst case is loss of saved
//! progress.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::types::{ProgressSnapshot, Stage};
use crate::STORAGE_VERSION;

/// Snapshot filename under the store root
const PROGRESS_FILE: &str = "progress.json";

/// Reason codes for store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum StoreError {
    /// Failed to serialize the snapshot
    S001_SERIALIZE_ERROR,
    /// Failed to write to durable storage
    S002_WRITE_ERROR,
    /// Stored data is unparseable or structurally invalid
    S003_CORRUPT_DATA,
    /// Stored schema version has no registered migration
    S004_VERSION_MISMATCH,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::S001_SERIALIZE_ERROR => "S001_SERIALIZE_ERROR",
            Self::S002_WRITE_ERROR => "S002_WRITE_ERROR",
            Self::S003_CORRUPT_DATA => "S003_CORRUPT_DATA",
            Self::S004_VERSION_MISMATCH => "S004_VERSION_MISMATCH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::S001_SERIALIZE_ERROR => "Failed to serialize progress snapshot",
            Self::S002_WRITE_ERROR => "Failed to write progress snapshot",
            Self::S003_CORRUPT_DATA => "Stored progress is corrupt",
            Self::S004_VERSION_MISMATCH => "Stored schema version has no migration",
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl std::error::Error for StoreError {}

/// A migration from one stored schema version to the current one
pub type Migration = fn(Value) -> Option<Vec<Stage>>;

/// File-backed progress store rooted at a directory
#[derive(Debug)]
pub struct ProgressStore {
    root: PathBuf,
    /// Registered migrations, keyed by the stored version they accept
    migrations: Vec<(String, Migration)>,
}

impl ProgressStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            migrations: Vec::new(),
        }
    }

    /// Register a migration for snapshots stored under `version`
    pub fn with_migration(mut self, version: &str, migration: Migration) -> Self {
        self.migrations.push((version.to_string(), migration));
        self
    }

    fn progress_path(&self) -> PathBuf {
        self.root.join(PROGRESS_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist the stage list, wrapped in a versioned snapshot
    ///
    /// Callers treat a failure as non-fatal: progress continues in memory
    /// for the session.
    pub fn save(&self, stages: &[Stage]) -> Result<(), StoreError> {
        let snapshot = ProgressSnapshot::now(STORAGE_VERSION, stages.to_vec());
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|_| StoreError::S001_SERIALIZE_ERROR)?;

        std::fs::create_dir_all(&self.root).map_err(|_| StoreError::S002_WRITE_ERROR)?;
        std::fs::write(self.progress_path(), json).map_err(|_| StoreError::S002_WRITE_ERROR)
    }

    /// Load the saved stage list, or `None` if absent or unrecoverable
    ///
    /// Any parse failure or structural invalidity wipes the store before
    /// returning `None`. A schema version mismatch goes through the
    /// registered migrations; with none matching, the store resets to
    /// fresh rather than trusting old-shaped data.
    pub fn load(&self) -> Option<Vec<Stage>> {
        let raw = std::fs::read_to_string(self.progress_path()).ok()?;
        match self.decode(&raw) {
            Ok(stages) => Some(stages),
            Err(reason) => {
                eprintln!("Discarding saved progress ({})", reason);
                self.clear();
                None
            }
        }
    }

    /// Decode a raw snapshot into the stage list, classifying the failure
    fn decode(&self, raw: &str) -> Result<Vec<Stage>, StoreError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|_| StoreError::S003_CORRUPT_DATA)?;

        // Structural validation: version present, stages array-shaped
        let Some(version) = value.get("version").and_then(Value::as_str) else {
            return Err(StoreError::S003_CORRUPT_DATA);
        };
        if !value.get("stages").is_some_and(Value::is_array) {
            return Err(StoreError::S003_CORRUPT_DATA);
        }

        if version != STORAGE_VERSION {
            let migration = self
                .migrations
                .iter()
                .find(|(v, _)| v == version)
                .map(|(_, migrate)| *migrate);
            return migration
                .and_then(|migrate| migrate(value))
                .ok_or(StoreError::S004_VERSION_MISMATCH);
        }

        serde_json::from_value::<ProgressSnapshot>(value)
            .map(|snapshot| snapshot.stages)
            .map_err(|_| StoreError::S003_CORRUPT_DATA)
    }

    /// Remove the stored snapshot unconditionally; failures are swallowed
    pub fn clear(&self) {
        let _ = std::fs::remove_file(self.progress_path());
    }

    /// Is a saved snapshot present? (No deserialization of the stage list.)
    pub fn has_saved(&self) -> bool {
        self.progress_path().exists()
    }

    /// Last-write timestamp from the envelope, without deserializing the
    /// stage list
    pub fn last_updated(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let raw = std::fs::read_to_string(self.progress_path()).ok()?;
        let value: Value = serde_json::from_str(&raw).ok()?;
        let ts = value.get("lastUpdated")?.as_str()?;
        chrono::DateTime::parse_from_rfc3339(ts)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{catalog, engine};
    use tempfile::tempdir;

    fn seeded() -> Vec<Stage> {
        engine::initialize(&catalog::initial_stages())
    }

    #[test]
    fn test_round_trip_deep_equal() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        let stages = engine::complete(&seeded(), 1);
        store.save(&stages).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, stages);
    }

    #[test]
    fn test_load_absent_returns_none() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());
        assert_eq!(store.load(), None);
        assert!(!store.has_saved());
    }

    #[test]
    fn test_invalid_json_self_heals() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        std::fs::write(dir.path().join(PROGRESS_FILE), "not json {{{").unwrap();
        assert_eq!(store.load(), None);
        // Store wiped: the second load is also None, not a crash
        assert_eq!(store.load(), None);
        assert!(!store.has_saved());
    }

    #[test]
    fn test_missing_stages_field_self_heals() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        std::fs::write(
            dir.path().join(PROGRESS_FILE),
            r#"{"version":"1.0","lastUpdated":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.has_saved());
    }

    #[test]
    fn test_missing_version_self_heals() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        std::fs::write(
            dir.path().join(PROGRESS_FILE),
            r#"{"stages":[],"lastUpdated":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.has_saved());
    }

    #[test]
    fn test_version_mismatch_without_migration_resets() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        std::fs::write(
            dir.path().join(PROGRESS_FILE),
            r#"{"version":"0.9","stages":[],"lastUpdated":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.has_saved());
    }

    #[test]
    fn test_version_mismatch_with_migration_applies_it() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path()).with_migration("0.9", |_value| {
            Some(engine::initialize(&catalog::initial_stages()))
        });

        std::fs::write(
            dir.path().join(PROGRESS_FILE),
            r#"{"version":"0.9","stages":[],"lastUpdated":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 15);
    }

    #[test]
    fn test_decode_classifies_corrupt_data() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        assert_eq!(
            store.decode("not json {{{"),
            Err(StoreError::S003_CORRUPT_DATA)
        );
        assert_eq!(
            store.decode(r#"{"stages":[]}"#),
            Err(StoreError::S003_CORRUPT_DATA)
        );
        assert_eq!(
            store.decode(r#"{"version":"1.0","lastUpdated":"2026-01-01T00:00:00Z"}"#),
            Err(StoreError::S003_CORRUPT_DATA)
        );
    }

    #[test]
    fn test_decode_classifies_unmigratable_version() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        assert_eq!(
            store.decode(r#"{"version":"0.9","stages":[],"lastUpdated":"2026-01-01T00:00:00Z"}"#),
            Err(StoreError::S004_VERSION_MISMATCH)
        );
    }

    #[test]
    fn test_clear_and_introspection() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        assert!(store.last_updated().is_none());
        store.save(&seeded()).unwrap();
        assert!(store.has_saved());
        assert!(store.last_updated().is_some());

        store.clear();
        assert!(!store.has_saved());
        // Clearing twice is fine
        store.clear();
    }
}
