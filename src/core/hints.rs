//! Per-stage hint reveal ledger
//!
//! Each stage carries 3 progressive hints; the ledger tracks how many have
//! been revealed (0–3), sequential only. Records are keyed per stage id and
//! stored independently of the progress snapshot, so hint progress survives
//! a stage-progress wipe. A full reset clears both.

use std::path::{Path, PathBuf};

use crate::HINTS_PER_STAGE;

/// File-backed hint ledger rooted at the same directory as the store
#[derive(Debug)]
pub struct HintLedger {
    root: PathBuf,
}

impl HintLedger {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, stage_id: u32) -> PathBuf {
        self.root.join(format!("hints_{:02}.json", stage_id))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Revealed count for a stage; corrupt or absent records read as 0
    pub fn revealed(&self, stage_id: u32) -> u8 {
        std::fs::read_to_string(self.record_path(stage_id))
            .ok()
            .and_then(|raw| serde_json::from_str::<u8>(&raw).ok())
            .filter(|level| *level <= HINTS_PER_STAGE)
            .unwrap_or(0)
    }

    /// Reveal the next hint in sequence
    ///
    /// Only `revealed + 1` is accepted; skipping ahead or re-revealing is a
    /// no-op. Returns the new revealed count. Write failures are swallowed:
    /// the reveal still holds for the session.
    pub fn reveal(&self, stage_id: u32, level: u8) -> u8 {
        let current = self.revealed(stage_id);
        if level != current + 1 || level > HINTS_PER_STAGE {
            return current;
        }

        if std::fs::create_dir_all(&self.root).is_ok() {
            let _ = std::fs::write(self.record_path(stage_id), level.to_string());
        }
        level
    }

    /// Remove the record for one stage
    pub fn reset(&self, stage_id: u32) {
        let _ = std::fs::remove_file(self.record_path(stage_id));
    }

    /// Remove every hint record; a full progress reset must call this
    pub fn reset_all(&self, stage_ids: impl IntoIterator<Item = u32>) {
        for id in stage_ids {
            self.reset(id);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
