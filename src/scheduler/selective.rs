//! Rule-driven policies: SPN, HRRN, Priority (non-preemptive) and SRT.
//!
//! # Algorithm
//!
//! At each decision point the [`SelectionRule`] ranks every arrived,
//! unfinished process via [`select_best`]. If nothing is ready the CPU
//! idles one tick. Non-preemptive policies then run the winner to
//! completion; SRT runs it for a single tick and decides again, which is
//! how preemption arises.

use tracing::debug;

use super::RunState;
use crate::dispatching::rules::ShortestRemaining;
use crate::dispatching::{select_best, SelectionRule};

/// Runs a non-preemptive policy ranked by `rule` to completion.
///
/// SPN uses [`ShortestBurst`](crate::dispatching::rules::ShortestBurst),
/// HRRN [`HighestResponseRatio`](crate::dispatching::rules::HighestResponseRatio)
/// and Priority [`LowestPriority`](crate::dispatching::rules::LowestPriority).
pub fn non_preemptive<R: SelectionRule + ?Sized>(state: &mut RunState, rule: &R) {
    debug!(rule = rule.name(), description = rule.description(), "non-preemptive run");
    while !state.all_complete() {
        match select_best(rule, state.records(), state.clock()) {
            Some(idx) => {
                let burst = state.record(idx).remaining;
                state.execute(idx, burst);
            }
            None => state.idle(),
        }
    }
}

/// Runs Shortest Remaining Time to completion, one tick per decision.
pub fn shortest_remaining_time(state: &mut RunState) {
    while !state.all_complete() {
        match select_best(&ShortestRemaining, state.records(), state.clock()) {
            Some(idx) => {
                state.execute(idx, 1);
            }
            None => state.idle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestResponseRatio, LowestPriority, ShortestBurst};
    use crate::models::{GanttInterval, Process, Slot};
    use crate::scheduler::{Policy, RunResult};
    use pretty_assertions::assert_eq;

    fn run_rule<R: SelectionRule>(processes: &[Process], rule: R, policy: Policy) -> RunResult {
        let mut state = RunState::new(processes);
        non_preemptive(&mut state, &rule);
        state.into_result(policy)
    }

    fn run_srt(processes: &[Process]) -> RunResult {
        let mut state = RunState::new(processes);
        shortest_remaining_time(&mut state);
        state.into_result(Policy::Srt)
    }

    fn order(result: &RunResult) -> Vec<&str> {
        result.intervals.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_spn_picks_shortest_ready() {
        let result = run_rule(
            &[
                Process::new("A", 0, 7),
                Process::new("B", 1, 4),
                Process::new("C", 2, 1),
                Process::new("D", 3, 4),
            ],
            ShortestBurst,
            Policy::Spn,
        );
        // A runs first (only one ready); at t=7 C (1) beats B and D (4); B beats D on tie.
        assert_eq!(order(&result), vec!["A", "C", "B", "D"]);
        assert_eq!(result.metrics_for("D").unwrap().finish, Some(16));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no burst left")]
    fn test_negative_burst_panics_in_debug() {
        run_rule(&[Process::new("A", 0, -1)], ShortestBurst, Policy::Spn);
    }

    #[test]
    fn test_spn_idles_when_nothing_arrived() {
        let result = run_rule(&[Process::new("A", 2, 1)], ShortestBurst, Policy::Spn);
        assert_eq!(&result.timeline.slots[..2], &[Slot::Idle, Slot::Idle]);
        assert_eq!(result.intervals, vec![GanttInterval::new("A", 2, 3)]);
    }

    #[test]
    fn test_srt_preempts_for_shorter_remaining() {
        let result = run_srt(&[Process::new("A", 0, 8), Process::new("B", 1, 4)]);
        assert_eq!(
            result.intervals,
            vec![
                GanttInterval::new("A", 0, 1),
                GanttInterval::new("B", 1, 5),
                GanttInterval::new("A", 5, 12),
            ]
        );
        let a = result.metrics_for("A").unwrap();
        assert_eq!(a.start, Some(0));
        assert_eq!(a.finish, Some(12));
        assert_eq!(a.waiting, Some(4));
    }

    #[test]
    fn test_srt_no_preemption_on_equal_remaining() {
        // At t=1 A has 3 left, B has 3: tie keeps A (earlier input).
        let result = run_srt(&[Process::new("A", 0, 4), Process::new("B", 1, 3)]);
        assert_eq!(order(&result), vec!["A", "B"]);
    }

    #[test]
    fn test_hrrn_tie_breaks_by_input_order() {
        let result = run_rule(
            &[Process::new("first", 0, 3), Process::new("second", 0, 3)],
            HighestResponseRatio,
            Policy::Hrrn,
        );
        assert_eq!(order(&result), vec!["first", "second"]);
    }

    #[test]
    fn test_hrrn_ages_long_waiters() {
        let result = run_rule(
            &[
                Process::new("A", 0, 3),
                Process::new("B", 1, 6),
                Process::new("C", 2, 1),
                Process::new("D", 3, 2),
            ],
            HighestResponseRatio,
            Policy::Hrrn,
        );
        // t=3: B=1+2/6≈1.33, C=1+1/1=2.0, D=1.0 → C
        // t=4: B=1+3/6=1.5, D=1+1/2=1.5 → tie, B first in input
        assert_eq!(order(&result), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_priority_lowest_value_first() {
        let result = run_rule(
            &[
                Process::new("A", 0, 2).with_priority(5),
                Process::new("B", 1, 2).with_priority(3),
                Process::new("C", 1, 2).with_priority(1),
                Process::new("D", 1, 2).with_priority(1),
            ],
            LowestPriority,
            Policy::Priority,
        );
        assert_eq!(order(&result), vec!["A", "C", "D", "B"]);
    }
}
