//! Round-Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` not yet admitted, in
//!    input order, to the tail of a FIFO ready queue.
//! 2. If the queue is empty, idle one tick.
//! 3. Otherwise run the head for `min(quantum, remaining)` ticks.
//! 4. Admit arrivals again **before** requeueing the process just run, so
//!    a process arriving as a quantum expires queues ahead of it.
//! 5. Requeue the process at the tail if it still has burst left.
//!
//! The loop runs while `clock < end_time`, the queue is non-empty, or some
//! process has not been admitted yet. It therefore overruns `end_time`
//! until every process finishes, and idles up to `end_time` if all work
//! finishes earlier. No other policy reads `end_time`.

use std::collections::VecDeque;

use tracing::debug;

use super::RunState;
use crate::models::Tick;

/// Runs Round-Robin until every process is done and `end_time` is reached.
///
/// # Panics
///
/// In debug builds, if `quantum` is not positive. [`Simulator`] rejects
/// such quanta before calling this.
///
/// [`Simulator`]: super::Simulator
pub fn round_robin(state: &mut RunState, quantum: i64, end_time: Tick) {
    debug_assert!(quantum > 0, "round-robin quantum must be positive, got {quantum}");

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut admitted = vec![false; state.records().len()];

    while state.clock() < end_time
        || !queue.is_empty()
        || admitted.iter().any(|&a| !a)
    {
        admit_arrivals(state, &mut queue, &mut admitted);

        let Some(idx) = queue.pop_front() else {
            state.idle();
            continue;
        };

        state.execute(idx, quantum);
        admit_arrivals(state, &mut queue, &mut admitted);

        if !state.record(idx).is_complete() {
            queue.push_back(idx);
        }
    }

    let padding = state.timeline().slots.iter().rev().take_while(|s| s.is_idle()).count();
    if padding > 0 {
        debug!(padding, end_time, "round-robin idled out to end time");
    }
}

fn admit_arrivals(state: &RunState, queue: &mut VecDeque<usize>, admitted: &mut [bool]) {
    let clock = state.clock();
    for (idx, record) in state.records().iter().enumerate() {
        if !admitted[idx] && record.has_arrived(clock) {
            queue.push_back(idx);
            admitted[idx] = true;
        }
    }
}
