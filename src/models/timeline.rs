//! Execution timeline ("Gantt data").
//!
//! The raw form holds one [`Slot`] per simulated tick. [`Timeline::intervals`]
//! compresses it into contiguous [`GanttInterval`]s wherever the slot value
//! changes; idle stretches are dropped from the compressed form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Tick;

/// What occupied the CPU during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// No process was ready.
    Idle,
    /// The named process ran. Slots of one process share the name.
    Busy(Arc<str>),
}

impl Slot {
    /// The running process name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Slot::Idle => None,
            Slot::Busy(name) => Some(&**name),
        }
    }

    /// Whether this slot is idle.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }
}

/// A contiguous run of one process on the CPU, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttInterval {
    /// Process name.
    pub name: String,
    /// First tick (inclusive).
    pub start: Tick,
    /// Last tick (exclusive).
    pub end: Tick,
}

impl GanttInterval {
    /// Creates a new interval.
    pub fn new(name: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Per-tick record of CPU occupancy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// One entry per elapsed tick.
    pub slots: Vec<Slot>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one idle tick.
    pub fn push_idle(&mut self) {
        self.slots.push(Slot::Idle);
    }

    /// Appends `ticks` consecutive slots for `name`.
    pub fn push_busy(&mut self, name: impl Into<Arc<str>>, ticks: i64) {
        let name = name.into();
        for _ in 0..ticks {
            self.slots.push(Slot::Busy(Arc::clone(&name)));
        }
    }

    /// Number of elapsed ticks.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no tick has elapsed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ticks during which no process ran.
    pub fn idle_ticks(&self) -> i64 {
        self.slots.iter().filter(|s| s.is_idle()).count() as i64
    }

    /// Ticks during which some process ran.
    pub fn busy_ticks(&self) -> i64 {
        self.len() as i64 - self.idle_ticks()
    }

    /// Compresses the timeline into chronological intervals.
    ///
    /// A new interval starts wherever the slot value changes. Idle
    /// intervals are omitted.
    pub fn intervals(&self) -> Vec<GanttInterval> {
        let mut intervals = Vec::new();
        let mut start = 0usize;

        for i in 1..=self.slots.len() {
            let boundary = i == self.slots.len() || self.slots[i] != self.slots[start];
            if !boundary {
                continue;
            }
            if let Some(name) = self.slots[start].name() {
                intervals.push(GanttInterval::new(name, start as Tick, i as Tick));
            }
            start = i;
        }

        intervals
    }

    /// Number of times the CPU switched directly from one process to another.
    ///
    /// Transitions through an idle stretch are not counted.
    pub fn context_switches(&self) -> usize {
        self.slots
            .windows(2)
            .filter(|w| match (&w[0], &w[1]) {
                (Slot::Busy(a), Slot::Busy(b)) => a != b,
                _ => false,
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_len() {
        let mut t = Timeline::new();
        t.push_idle();
        t.push_busy("A", 3);
        assert_eq!(t.len(), 4);
        assert_eq!(t.idle_ticks(), 1);
        assert_eq!(t.busy_ticks(), 3);
    }

    #[test]
    fn test_intervals_drop_idle() {
        let mut t = Timeline::new();
        t.push_busy("A", 2);
        t.push_idle();
        t.push_idle();
        t.push_busy("B", 1);
        t.push_busy("A", 2);

        assert_eq!(
            t.intervals(),
            vec![
                GanttInterval::new("A", 0, 2),
                GanttInterval::new("B", 4, 5),
                GanttInterval::new("A", 5, 7),
            ]
        );
    }

    #[test]
    fn test_intervals_merge_adjacent_same_process() {
        let mut t = Timeline::new();
        t.push_busy("A", 2);
        t.push_busy("A", 3);
        assert_eq!(t.intervals(), vec![GanttInterval::new("A", 0, 5)]);
    }

    #[test]
    fn test_intervals_empty_and_all_idle() {
        assert!(Timeline::new().intervals().is_empty());

        let mut t = Timeline::new();
        t.push_idle();
        t.push_idle();
        assert!(t.intervals().is_empty());
    }

    #[test]
    fn test_context_switches() {
        let mut t = Timeline::new();
        t.push_busy("A", 2);
        t.push_busy("B", 2);
        t.push_idle();
        t.push_busy("A", 1);
        assert_eq!(t.context_switches(), 1);
    }

    #[test]
    fn test_busy_slots_share_name() {
        let mut t = Timeline::new();
        t.push_busy("A", 3);
        let (Slot::Busy(first), Slot::Busy(last)) = (&t.slots[0], &t.slots[2]) else {
            panic!("expected busy slots");
        };
        assert!(Arc::ptr_eq(first, last));
    }

    #[test]
    fn test_interval_duration() {
        assert_eq!(GanttInterval::new("A", 3, 7).duration(), 4);
    }
}
