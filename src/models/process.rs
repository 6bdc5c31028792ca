//! Process (job) model.
//!
//! A process is one simulated job: a name, the tick it arrives at, and
//! the amount of CPU time it needs. It is immutable input; all per-run
//! state lives in [`ProcessRecord`](super::ProcessRecord).
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation start (t=0).

use serde::{Deserialize, Serialize};

/// Discrete simulation time unit.
pub type Tick = i64;

/// A process to be simulated.
///
/// `priority` is optional and only consulted by the priority-aware policy.
/// Lower values mean more urgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process name.
    pub name: String,
    /// Tick at which the process becomes ready.
    pub arrival: Tick,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more urgent). `None` = not provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process.
    pub fn new(name: impl Into<String>, arrival: Tick, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: Tick) -> bool {
        self.arrival <= clock
    }
}
