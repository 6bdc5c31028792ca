//! Shared clock, records and timeline for one policy run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Policy, RunKpi};
use crate::models::{GanttInterval, Process, ProcessMetrics, ProcessRecord, Tick, Timeline};

/// Mutable state owned by exactly one policy run.
///
/// Every policy advances the clock only through [`idle`](Self::idle) and
/// [`execute`](Self::execute), so the timeline always holds one slot per
/// elapsed tick and completion is recorded at the tick burst runs out.
#[derive(Debug, Clone)]
pub struct RunState {
    clock: Tick,
    records: Vec<ProcessRecord>,
    names: Vec<Arc<str>>,
    timeline: Timeline,
}

impl RunState {
    /// Builds fresh records for `processes` with the clock at 0.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            clock: 0,
            records: processes.iter().cloned().map(ProcessRecord::new).collect(),
            names: processes.iter().map(|p| Arc::from(p.name.as_str())).collect(),
            timeline: Timeline::new(),
        }
    }

    /// Current tick.
    #[inline]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// All records, in input order.
    #[inline]
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// One record by input index.
    #[inline]
    pub fn record(&self, idx: usize) -> &ProcessRecord {
        &self.records[idx]
    }

    /// The timeline so far.
    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Whether every process has finished.
    pub fn all_complete(&self) -> bool {
        self.records.iter().all(ProcessRecord::is_complete)
    }

    /// Emits one idle slot and advances the clock by one tick.
    pub fn idle(&mut self) {
        trace!(clock = self.clock, "cpu idle");
        self.timeline.push_idle();
        self.clock += 1;
    }

    /// Runs process `idx` for up to `ticks` and advances the clock.
    ///
    /// Emits one slot per tick actually run. If the process runs out of
    /// burst, it is completed at the new clock value. Returns the number
    /// of ticks run.
    ///
    /// # Panics
    ///
    /// In debug builds, if the process has no burst left to run. Policies
    /// only dispatch ready records, so this signals input that skipped
    /// validation (a non-positive burst or quantum).
    pub fn execute(&mut self, idx: usize, ticks: i64) -> i64 {
        let start = self.clock;
        let record = &mut self.records[idx];
        let ran = record.run(ticks, start);
        debug_assert!(
            ran > 0,
            "dispatched {} for {ticks} ticks with no burst left",
            record.process.name
        );

        self.timeline.push_busy(Arc::clone(&self.names[idx]), ran);
        self.clock += ran;

        debug!(
            process = %record.process.name,
            start,
            ticks = ran,
            remaining = record.remaining,
            "dispatched"
        );

        if record.is_complete() {
            record.complete(self.clock);
            debug!(
                process = %record.process.name,
                finish = self.clock,
                turnaround = record.turnaround,
                waiting = record.waiting,
                "completed"
            );
        }

        ran
    }

    /// Finalizes the run into an owned result.
    pub fn into_result(self, policy: Policy) -> RunResult {
        RunResult {
            policy,
            intervals: self.timeline.intervals(),
            metrics: self.records.iter().map(ProcessMetrics::from_record).collect(),
            timeline: self.timeline,
        }
    }
}

/// Output of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Raw per-tick timeline.
    pub timeline: Timeline,
    /// Compressed timeline (idle dropped), chronological.
    pub intervals: Vec<GanttInterval>,
    /// Per-process metrics in input order.
    pub metrics: Vec<ProcessMetrics>,
}

impl RunResult {
    /// Metrics row for a process by name.
    pub fn metrics_for(&self, name: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Final clock value (timeline length).
    pub fn makespan(&self) -> Tick {
        self.timeline.len() as Tick
    }

    /// Aggregate indicators for this run.
    pub fn kpi(&self) -> RunKpi {
        RunKpi::calculate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_advances_clock() {
        let mut state = RunState::new(&[Process::new("A", 2, 1)]);
        state.idle();
        state.idle();
        assert_eq!(state.clock(), 2);
        assert_eq!(state.timeline().idle_ticks(), 2);
    }

    #[test]
    fn test_execute_completes_at_zero_remaining() {
        let mut state = RunState::new(&[Process::new("A", 0, 3)]);
        assert_eq!(state.execute(0, 2), 2);
        assert!(!state.all_complete());
        assert_eq!(state.record(0).finish, None);

        assert_eq!(state.execute(0, 2), 1);
        assert!(state.all_complete());
        assert_eq!(state.clock(), 3);
        assert_eq!(state.record(0).finish, Some(3));
        assert_eq!(state.timeline().len(), 3);
    }

    #[test]
    fn test_into_result() {
        let mut state = RunState::new(&[Process::new("A", 0, 2), Process::new("B", 3, 1)]);
        state.execute(0, 2);
        state.idle();
        state.execute(1, 1);

        let result = state.into_result(Policy::Fcfs);
        assert_eq!(result.makespan(), 4);
        assert_eq!(result.intervals.len(), 2);
        assert_eq!(result.metrics_for("B").and_then(|m| m.waiting), Some(0));
        assert!(result.metrics_for("nope").is_none());
    }
}
