//! Time-threshold verification strategy
//!
//! The gate evaluates against the next future occurrence of a target
//! time-of-day: if 17:00 already passed today, the gate opens at 17:00
//! tomorrow. Pure in `now` so the whole thing is testable without a clock.

use chrono::{DateTime, Duration, Local, NaiveTime};

use crate::types::TimeGateStatus;

/// Parse an "HH:MM" 24-hour target time
pub fn parse_target(target: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(target, "%H:%M").ok()
}

/// The next occurrence of `target` at or after `now`
///
/// `now` exactly at the target counts as reached, not as tomorrow.
pub fn next_occurrence(target: NaiveTime, now: DateTime<Local>) -> DateTime<Local> {
    let today = now.date_naive().and_time(target);
    let candidate = match today.and_local_timezone(Local) {
        chrono::LocalResult::Single(dt) => dt,
        // DST gap or fold: take the earliest valid interpretation
        chrono::LocalResult::Ambiguous(earliest, _) => earliest,
        chrono::LocalResult::None => (today + Duration::hours(1))
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or(now),
    };

    if candidate < now {
        candidate + Duration::days(1)
    } else {
        candidate
    }
}

/// Evaluate the gate at `now`
pub fn evaluate(target: NaiveTime, now: DateTime<Local>) -> TimeGateStatus {
    // Evaluate the threshold first so an exactly-hit target reads as open
    let reached = now.time() >= target;

    let opens_at = next_occurrence(target, now);
    let remaining = (opens_at - now).max(Duration::zero());

    let total_secs = remaining.num_seconds().max(0);
    TimeGateStatus {
        target,
        opens_at,
        reached,
        hours: (total_secs / 3600) as u32,
        minutes: ((total_secs % 3600) / 60) as u32,
        seconds: (total_secs % 60) as u32,
    }
}

/// Evaluate against the wall clock
pub fn evaluate_now(target: NaiveTime) -> TimeGateStatus {
    evaluate(target, Local::now())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 6, 14, h, m, s).unwrap()
    }

    fn target(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("17:00"), Some(target(17, 0)));
        assert_eq!(parse_target("09:30"), Some(target(9, 30)));
        assert_eq!(parse_target("5pm"), None);
    }

    #[test]
    fn test_gate_closed_before_target() {
        let status = evaluate(target(17, 0), at(16, 0, 0));
        assert!(!status.reached);
        assert_eq!(status.hours, 1);
        assert_eq!(status.minutes, 0);
        assert_eq!(status.seconds, 0);
    }

    #[test]
    fn test_gate_open_at_exact_target() {
        let status = evaluate(target(17, 0), at(17, 0, 0));
        assert!(status.reached);
    }

    #[test]
    fn test_gate_open_after_target() {
        let status = evaluate(target(17, 0), at(18, 30, 0));
        assert!(status.reached);
    }

    #[test]
    fn test_passed_target_rolls_to_tomorrow() {
        let now = at(18, 0, 0);
        let opens = next_occurrence(target(17, 0), now);
        assert_eq!(opens.date_naive(), now.date_naive() + Duration::days(1));

        let status = evaluate(target(17, 0), now);
        // Remaining until tomorrow's occurrence: positive, under 24 h
        let remaining_secs =
            status.hours as i64 * 3600 + status.minutes as i64 * 60 + status.seconds as i64;
        assert!(remaining_secs > 0);
        assert!(remaining_secs < 24 * 3600);
        assert_eq!(status.hours, 23);
    }

    #[test]
    fn test_countdown_components() {
        let status = evaluate(target(17, 0), at(14, 30, 15));
        assert_eq!(status.hours, 2);
        assert_eq!(status.minutes, 29);
        assert_eq!(status.seconds, 45);
        assert_eq!(status.countdown(), "02:29:45");
    }
}
