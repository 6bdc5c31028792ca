//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Length-based**: SPN (total burst), SRT (remaining burst)
//! - **Aging**: HRRN (response ratio)
//! - **Priority**: PRIORITY (lowest value first)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::{ProcessRecord, Tick};

/// Response ratio of a process at `clock`: `1 + (clock − arrival) / burst`.
///
/// Equals 1.0 at arrival and grows with time spent waiting, faster for
/// short jobs.
pub fn response_ratio(record: &ProcessRecord, clock: Tick) -> f64 {
    let waited = (clock - record.process.arrival) as f64;
    1.0 + waited / record.process.burst as f64
}

// ======================== Length-based rules ========================

/// Shortest Process Next.
///
/// Ranks by *total* burst, ignoring progress already made.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn score(&self, record: &ProcessRecord, _clock: Tick) -> RuleScore {
        record.process.burst as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Process Next"
    }
}

/// Shortest Remaining Time.
///
/// Ranks by burst still outstanding. Re-evaluated every tick, which is
/// what makes SRT preemptive.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn score(&self, record: &ProcessRecord, _clock: Tick) -> RuleScore {
        record.remaining as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Aging rules ========================

/// Highest Response Ratio Next.
///
/// Returns the negated [`response_ratio`] so the greatest ratio wins.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl SelectionRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn score(&self, record: &ProcessRecord, clock: Tick) -> RuleScore {
        -response_ratio(record, clock)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

// ======================== Priority rules ========================

/// Lowest priority value first.
///
/// Processes without a priority rank last.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl SelectionRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn score(&self, record: &ProcessRecord, _clock: Tick) -> RuleScore {
        record.process.priority.unwrap_or(i32::MAX) as f64
    }

    fn description(&self) -> &'static str {
        "Non-preemptive Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn record(name: &str, arrival: i64, burst: i64) -> ProcessRecord {
        ProcessRecord::new(Process::new(name, arrival, burst))
    }

    #[test]
    fn test_response_ratio() {
        let r = record("A", 2, 4);
        assert!((response_ratio(&r, 2) - 1.0).abs() < 1e-10);
        // waited 6, burst 4 → 1 + 1.5
        assert!((response_ratio(&r, 8) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_spn_uses_total_burst() {
        let mut a = record("a", 0, 10);
        a.run(9, 0);
        let b = record("b", 0, 3);
        assert!(ShortestBurst.score(&b, 9) < ShortestBurst.score(&a, 9));
    }

    #[test]
    fn test_srt_uses_remaining() {
        let mut a = record("a", 0, 10);
        a.run(9, 0);
        let b = record("b", 0, 3);
        assert!(ShortestRemaining.score(&a, 9) < ShortestRemaining.score(&b, 9));
    }

    #[test]
    fn test_hrrn_favours_long_waiters() {
        let waited = record("old", 0, 6); // at t=6: 1 + 6/6 = 2.0
        let fresh = record("new", 5, 1); // at t=6: 1 + 1/1 = 2.0
        let fresher = record("newer", 6, 1); // at t=6: 1.0
        let h = HighestResponseRatio;
        assert!((h.score(&waited, 6) - h.score(&fresh, 6)).abs() < 1e-10);
        assert!(h.score(&waited, 6) < h.score(&fresher, 6));
    }

    #[test]
    fn test_priority() {
        let high = ProcessRecord::new(Process::new("high", 0, 1).with_priority(1));
        let low = ProcessRecord::new(Process::new("low", 0, 1).with_priority(9));
        let unset = record("unset", 0, 1);
        assert!(LowestPriority.score(&high, 0) < LowestPriority.score(&low, 0));
        assert!(LowestPriority.score(&low, 0) < LowestPriority.score(&unset, 0));
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestBurst.name(), "SPN");
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(HighestResponseRatio.description(), "Highest Response Ratio Next");
    }
}
