//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. For each in turn: idle until it has arrived, then run it to completion.
//!
//! No preemption and no re-evaluation once dispatched.

use super::RunState;

/// Runs FCFS to completion.
pub fn fcfs(state: &mut RunState) {
    let mut order: Vec<usize> = (0..state.records().len()).collect();
    order.sort_by_key(|&i| state.record(i).process.arrival);

    for idx in order {
        while state.clock() < state.record(idx).process.arrival {
            state.idle();
        }
        let burst = state.record(idx).remaining;
        state.execute(idx, burst);
    }
}
