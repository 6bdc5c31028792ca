//! Per-process result row.

use serde::{Deserialize, Serialize};

use super::{ProcessRecord, Tick};

/// Final timing figures for one process after a policy run.
///
/// Timing fields are `None` when the snapshot was taken before the
/// process completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process name.
    pub name: String,
    /// Arrival tick.
    pub arrival: Tick,
    /// Total burst.
    pub burst: i64,
    /// Priority, passed through from input.
    pub priority: Option<i32>,
    /// First dispatch tick.
    pub start: Option<Tick>,
    /// Completion tick.
    pub finish: Option<Tick>,
    /// finish − arrival.
    pub turnaround: Option<i64>,
    /// turnaround − burst.
    pub waiting: Option<i64>,
}

impl ProcessMetrics {
    /// Snapshots a record at the end of a run.
    pub fn from_record(record: &ProcessRecord) -> Self {
        let done = record.finish.is_some();
        Self {
            name: record.process.name.clone(),
            arrival: record.process.arrival,
            burst: record.process.burst,
            priority: record.process.priority,
            start: record.start,
            finish: record.finish,
            turnaround: done.then_some(record.turnaround),
            waiting: done.then_some(record.waiting),
        }
    }

    /// Whether the process finished during the run.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.finish.is_some()
    }

    /// Time from arrival to first dispatch.
    pub fn response(&self) -> Option<i64> {
        self.start.map(|s| s - self.arrival)
    }
}
