//! Per-run process state and completion bookkeeping.
//!
//! A [`ProcessRecord`] wraps one [`Process`] with the mutable fields a
//! policy advances while it runs. Records are built fresh for every
//! policy run, so no run can observe another's state.
//!
//! # Completion
//!
//! When remaining burst reaches zero the owning policy calls
//! [`ProcessRecord::complete`], which fixes the finish tick and derives:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish − arrival |
//! | Waiting | turnaround − burst |

use serde::{Deserialize, Serialize};

use super::{Process, Tick};

/// Mutable simulation state for one process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// The immutable input definition.
    pub process: Process,
    /// CPU time still required. Zero = complete.
    pub remaining: i64,
    /// First tick the process was ever dispatched.
    pub start: Option<Tick>,
    /// Tick at which remaining reached zero.
    pub finish: Option<Tick>,
    /// finish − arrival (0 until complete).
    pub turnaround: i64,
    /// turnaround − burst (0 until complete).
    pub waiting: i64,
}

impl ProcessRecord {
    /// Creates a record in its initial (reset) state.
    pub fn new(process: Process) -> Self {
        Self {
            remaining: process.burst,
            process,
            start: None,
            finish: None,
            turnaround: 0,
            waiting: 0,
        }
    }

    /// Restores every mutable field to its initial value.
    pub fn reset(&mut self) {
        self.remaining = self.process.burst;
        self.start = None;
        self.finish = None;
        self.turnaround = 0;
        self.waiting = 0;
    }

    /// Process name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.process.name
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: Tick) -> bool {
        self.process.has_arrived(clock)
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process can be selected at `clock`.
    #[inline]
    pub fn is_ready(&self, clock: Tick) -> bool {
        self.has_arrived(clock) && !self.is_complete()
    }

    /// Runs the process for `ticks` starting at `clock`.
    ///
    /// Records `clock` as the start tick on first dispatch. `ticks` is
    /// clamped to the remaining burst; the number actually run is returned.
    pub fn run(&mut self, ticks: i64, clock: Tick) -> i64 {
        let ran = ticks.min(self.remaining).max(0);
        if self.start.is_none() {
            self.start = Some(clock);
        }
        self.remaining -= ran;
        ran
    }

    /// Marks the process finished at `clock` and derives its metrics.
    ///
    /// Must be called exactly once, at the tick remaining reaches zero.
    pub fn complete(&mut self, clock: Tick) {
        debug_assert!(self.is_complete(), "completing a process with burst left");
        debug_assert!(self.finish.is_none(), "process completed twice");
        self.finish = Some(clock);
        self.turnaround = clock - self.process.arrival;
        self.waiting = self.turnaround - self.process.burst;
    }
}
