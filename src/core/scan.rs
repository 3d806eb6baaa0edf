//! Scan verification placeholder
//!
//! Stands in for real sensing: a scan always succeeds once a simulated
//! duration has elapsed since it started. No geometric or numeric
//! validation; it exists to complete the unlock-type enumeration.

use std::time::{Duration, Instant};

/// One in-flight simulated scan
#[derive(Debug, Clone, Copy)]
pub struct ScanSession {
    started_at: Instant,
    duration: Duration,
}

impl ScanSession {
    /// Begin a scan that completes after `duration_secs`
    pub fn start(duration_secs: u64) -> Self {
        Self {
            started_at: Instant::now(),
            duration: Duration::from_secs(duration_secs),
        }
    }

    /// Progress percentage for display, clamped to [0, 100]
    pub fn progress_pct(&self) -> f64 {
        if self.duration.is_zero() {
            return 100.0;
        }
        let elapsed = self.started_at.elapsed().as_secs_f64();
        (elapsed / self.duration.as_secs_f64() * 100.0).min(100.0)
    }

    /// Has the simulated duration elapsed?
    pub fn is_complete(&self) -> bool {
        self.started_at.elapsed() >= self.duration
    }

    /// Time left until the scan completes
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.started_at.elapsed())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_zero_duration_completes_immediately() {
        let scan = ScanSession::start(0);
        assert!(scan.is_complete());
        assert_eq!(scan.progress_pct(), 100.0);
    }

    #[test]
    fn test_scan_completes_after_duration() {
        let scan = ScanSession::start(1);
        assert!(!scan.is_complete());
        assert!(scan.progress_pct() < 100.0);

        sleep(Duration::from_millis(1100));
        assert!(scan.is_complete());
        assert_eq!(scan.progress_pct(), 100.0);
        assert_eq!(scan.remaining(), Duration::ZERO);
    }
}
