//! Selection rules for choosing the next process to dispatch.
//!
//! The selective policies (SPN, SRT, HRRN, Priority) differ only in how
//! they rank ready processes. Each ranking is a [`SelectionRule`]; the
//! shared [`select_best`] applies it with a documented tie-break.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, select_best};
//! use u_cpu_schedule::models::{Process, ProcessRecord};
//!
//! let records = vec![
//!     ProcessRecord::new(Process::new("long", 0, 8)),
//!     ProcessRecord::new(Process::new("short", 0, 2)),
//! ];
//! assert_eq!(select_best(&rules::ShortestBurst, &records, 0), Some(1));
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod engine;
pub mod rules;

pub use engine::{select_best, TieBreak};

use crate::models::{ProcessRecord, Tick};
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// Ranks a ready process at the current clock.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that favour large values
/// (e.g. response ratio) return the negated value.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPN", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at `clock`.
    fn score(&self, record: &ProcessRecord, clock: Tick) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
