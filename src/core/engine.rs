//! Progression engine: the sequential unlock state machine
//!
//! Per-stage transitions:
//! - locked → active: predecessor completed (or `force_unlock`)
//! - active → completed: verification satisfied, caller invokes `complete`
//! - nothing returns to locked except a full `initialize`
//!
//! All operations are pure functions from (current list) → (new list).
//! Invariant: at most one stage is active in a well-formed list; only
//! `force_unlock` may transiently violate it.

use crate::types::{ProgressSummary, Stage, StageStatus};

/// Seed stage statuses: list position 0 active, all others locked
///
/// Ignores any statuses present in the input, so it serves both first-run
/// seeding and a full reset.
pub fn initialize(stages: &[Stage]) -> Vec<Stage> {
    stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let status = if index == 0 {
                StageStatus::Active
            } else {
                StageStatus::Locked
            };
            Stage {
                status,
                ..stage.clone()
            }
        })
        .collect()
}

/// Mark a stage completed and promote its successor from locked to active
///
/// An unknown id is a no-op: a stale or replayed completion request must not
/// corrupt state. Preconditions are not re-validated here; that belongs to
/// the verification strategies before this is invoked.
pub fn complete(stages: &[Stage], stage_id: u32) -> Vec<Stage> {
    stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            if stage.id == stage_id {
                return Stage {
                    status: StageStatus::Completed,
                    ..stage.clone()
                };
            }

            // Promote the successor only if it is still locked, so a
            // replayed completion never double-advances
            if index > 0 && stages[index - 1].id == stage_id && stage.status == StageStatus::Locked
            {
                return Stage {
                    status: StageStatus::Active,
                    ..stage.clone()
                };
            }

            stage.clone()
        })
        .collect()
}

/// Can this stage be unlocked? First stage always; otherwise the stage at
/// the preceding list position must be completed.
pub fn can_unlock(stages: &[Stage], stage_id: u32) -> bool {
    match stages.iter().position(|s| s.id == stage_id) {
        Some(0) => true,
        Some(index) => stages[index - 1].status == StageStatus::Completed,
        None => false,
    }
}

/// Administrative escape hatch: promote a locked stage directly to active
/// without consuming the predecessor precondition and without demoting any
/// other stage. Can transiently produce multiple active stages.
pub fn force_unlock(stages: &[Stage], stage_id: u32) -> Vec<Stage> {
    stages
        .iter()
        .map(|stage| {
            if stage.id == stage_id && stage.status == StageStatus::Locked {
                Stage {
                    status: StageStatus::Active,
                    ..stage.clone()
                }
            } else {
                stage.clone()
            }
        })
        .collect()
}

/// The current frontier, if any (first active stage by position)
pub fn active_stage(stages: &[Stage]) -> Option<&Stage> {
    stages.iter().find(|s| s.status == StageStatus::Active)
}

/// The first locked stage whose predecessor is completed
pub fn next_unlockable(stages: &[Stage]) -> Option<&Stage> {
    stages
        .iter()
        .find(|s| s.status == StageStatus::Locked && can_unlock(stages, s.id))
}

/// Aggregate completion numbers; percentage rounds half-up
pub fn progress(stages: &[Stage]) -> ProgressSummary {
    let completed = stages
        .iter()
        .filter(|s| s.status == StageStatus::Completed)
        .count();
    let total = stages.len();
    let percentage = if total == 0 {
        0
    } else {
        (100.0 * completed as f64 / total as f64).round() as u8
    };

    ProgressSummary {
        completed,
        total,
        percentage,
    }
}

/// True iff every stage is completed
pub fn is_complete(stages: &[Stage]) -> bool {
    stages.iter().all(|s| s.status == StageStatus::Completed)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;

    fn seeded() -> Vec<Stage> {
        initialize(&catalog::initial_stages())
    }

    #[test]
    fn test_initialize_single_active_frontier() {
        let stages = seeded();
        assert_eq!(stages[0].status, StageStatus::Active);
        assert!(stages[1..].iter().all(|s| s.status == StageStatus::Locked));
        assert_eq!(
            stages
                .iter()
                .filter(|s| s.status == StageStatus::Active)
                .count(),
            1
        );
    }

    #[test]
    fn test_initialize_ignores_input_statuses() {
        let mut stages = seeded();
        for s in &mut stages {
            s.status = StageStatus::Completed;
        }
        let fresh = initialize(&stages);
        assert_eq!(fresh[0].status, StageStatus::Active);
        assert!(fresh[1..].iter().all(|s| s.status == StageStatus::Locked));
    }

    #[test]
    fn test_complete_promotes_successor() {
        let stages = seeded();
        let stages = complete(&stages, 1);
        assert_eq!(stages[0].status, StageStatus::Completed);
        assert_eq!(stages[1].status, StageStatus::Active);
        assert_eq!(stages[2].status, StageStatus::Locked);
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let stages = seeded();
        let after = complete(&stages, 999);
        assert_eq!(after, stages);
    }

    #[test]
    fn test_complete_is_idempotent_for_successor_unlock() {
        let stages = seeded();
        let stages = complete(&stages, 1);
        // Advance the frontier to stage 2, then replay stage 1's completion
        let stages = complete(&stages, 2);
        let replayed = complete(&stages, 1);

        // Stage 2 stays completed, stage 3 stays active, no double-advance
        assert_eq!(replayed[1].status, StageStatus::Completed);
        assert_eq!(replayed[2].status, StageStatus::Active);
        assert_eq!(replayed[3].status, StageStatus::Locked);
    }

    #[test]
    fn test_ordering_invariant_under_ascending_completions() {
        let mut stages = seeded();
        for id in 1..=stages.len() as u32 {
            stages = complete(&stages, id);
            for i in 0..stages.len() {
                for j in (i + 1)..stages.len() {
                    if stages[j].status != StageStatus::Locked {
                        assert_ne!(
                            stages[i].status,
                            StageStatus::Locked,
                            "stage {} locked while stage {} is not",
                            stages[i].id,
                            stages[j].id
                        );
                    }
                }
            }
        }
        assert!(is_complete(&stages));
    }

    #[test]
    fn test_can_unlock_rules() {
        let stages = seeded();
        assert!(can_unlock(&stages, 1));
        assert!(!can_unlock(&stages, 2));
        assert!(!can_unlock(&stages, 999));

        let stages = complete(&stages, 1);
        assert!(can_unlock(&stages, 2));
        assert!(!can_unlock(&stages, 3));
    }

    #[test]
    fn test_force_unlock_skips_precondition() {
        let stages = seeded();
        let stages = force_unlock(&stages, 5);
        assert_eq!(stages[4].status, StageStatus::Active);
        // Stage 1 keeps its frontier: the invariant violation is sanctioned
        assert_eq!(stages[0].status, StageStatus::Active);
    }

    #[test]
    fn test_force_unlock_only_touches_locked() {
        let stages = seeded();
        let stages = complete(&stages, 1);
        let after = force_unlock(&stages, 1);
        assert_eq!(after[0].status, StageStatus::Completed);
    }

    #[test]
    fn test_progress_percentage_all_counts() {
        let mut stages = seeded();
        let total = stages.len();
        for done in 0..=total {
            let p = progress(&stages);
            assert_eq!(p.completed, done);
            assert_eq!(p.total, total);
            let expected = (100.0 * done as f64 / total as f64).round() as u8;
            assert_eq!(p.percentage, expected);
            if done < total {
                stages = complete(&stages, stages[done].id);
            }
        }
        assert_eq!(progress(&stages).percentage, 100);
    }

    #[test]
    fn test_active_stage_and_next_unlockable() {
        let stages = seeded();
        assert_eq!(active_stage(&stages).map(|s| s.id), Some(1));
        assert_eq!(next_unlockable(&stages), None);

        let stages = complete(&stages, 1);
        assert_eq!(active_stage(&stages).map(|s| s.id), Some(2));

        // Demote nothing, but if stage 2 were still locked it would be next
        let mut frozen = seeded();
        frozen[0].status = StageStatus::Completed;
        assert_eq!(next_unlockable(&frozen).map(|s| s.id), Some(2));
    }

    #[test]
    fn test_is_complete_boundaries() {
        let stages = seeded();
        assert!(!is_complete(&stages));
        let mut stages = stages;
        for id in 1..=stages.len() as u32 {
            stages = complete(&stages, id);
        }
        assert!(is_complete(&stages));
    }
}
