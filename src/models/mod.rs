//! CPU scheduling domain models.
//!
//! Provides the data types shared by every dispatch policy: the immutable
//! process definition, its per-run mutable record, the tick-level timeline
//! and the per-process result row.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated |
//! |------|---------|---------|
//! | Process | once, from input | never |
//! | ProcessRecord | fresh per policy run | by the running policy only |
//! | Timeline | fresh per policy run | one slot per tick |
//! | ProcessMetrics | at the end of a run | never |

mod metrics;
mod process;
mod record;
mod timeline;

pub use metrics::ProcessMetrics;
pub use process::{Process, Tick};
pub use record::ProcessRecord;
pub use timeline::{GanttInterval, Slot, Timeline};
