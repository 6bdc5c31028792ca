//! Run quality metrics (KPIs).
//!
//! Aggregates the per-process rows and the timeline of a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Final clock value (timeline length) |
//! | Busy / Idle ticks | Timeline slots with / without a process |
//! | CPU Utilization | busy / makespan |
//! | Throughput | completed processes per tick |
//! | Avg Turnaround | Mean (finish − arrival) |
//! | Avg Waiting | Mean (turnaround − burst) |
//! | Avg Response | Mean (first dispatch − arrival) |
//! | Context Switches | Direct process-to-process handovers |
//!
//! Averages cover completed processes only.

use serde::{Deserialize, Serialize};

use super::RunResult;

/// Run performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Final clock value.
    pub makespan: i64,
    /// Ticks with a process on the CPU.
    pub busy_ticks: i64,
    /// Ticks with no process on the CPU.
    pub idle_ticks: i64,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of processes that finished.
    pub completed: usize,
    /// Sum of turnaround times.
    pub total_turnaround: i64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Sum of waiting times.
    pub total_waiting: i64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response: f64,
    /// Process-to-process switches on the timeline.
    pub context_switches: usize,
}

impl RunKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(result: &RunResult) -> Self {
        let makespan = result.makespan();
        let busy_ticks = result.timeline.busy_ticks();
        let idle_ticks = result.timeline.idle_ticks();

        let mut completed = 0usize;
        let mut total_turnaround = 0i64;
        let mut total_waiting = 0i64;
        let mut total_response = 0i64;

        for m in &result.metrics {
            if let (Some(tat), Some(wt)) = (m.turnaround, m.waiting) {
                completed += 1;
                total_turnaround += tat;
                total_waiting += wt;
                total_response += m.response().unwrap_or(0);
            }
        }

        let mean = |total: i64| {
            if completed == 0 {
                0.0
            } else {
                total as f64 / completed as f64
            }
        };
        let per_tick = |count: f64| {
            if makespan == 0 {
                0.0
            } else {
                count / makespan as f64
            }
        };

        Self {
            makespan,
            busy_ticks,
            idle_ticks,
            cpu_utilization: per_tick(busy_ticks as f64),
            throughput: per_tick(completed as f64),
            completed,
            total_turnaround,
            avg_turnaround: mean(total_turnaround),
            total_waiting,
            avg_waiting: mean(total_waiting),
            avg_response: mean(total_response),
            context_switches: result.timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{fcfs, Policy, RunState};

    fn fcfs_sample() -> RunResult {
        let mut state = RunState::new(&[
            Process::new("A", 0, 5),
            Process::new("B", 1, 3),
            Process::new("C", 2, 1),
        ]);
        fcfs(&mut state);
        state.into_result(Policy::Fcfs)
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = fcfs_sample().kpi();
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.completed, 3);
        // TAT: 5, 7, 7 → 19; WT: 0, 4, 6 → 10
        assert_eq!(kpi.total_turnaround, 19);
        assert_eq!(kpi.total_waiting, 10);
        assert!((kpi.avg_turnaround - 19.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_response - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_idle_utilization() {
        let mut state = RunState::new(&[Process::new("A", 2, 2)]);
        fcfs(&mut state);
        let kpi = state.into_result(Policy::Fcfs).kpi();
        assert_eq!(kpi.idle_ticks, 2);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_skips_unfinished() {
        // Snapshot taken before the second process gets the CPU.
        let mut state = RunState::new(&[Process::new("A", 0, 1), Process::new("B", 0, 3)]);
        state.execute(0, 1);
        state.execute(1, 1);
        let kpi = state.into_result(Policy::round_robin(1)).kpi();
        assert_eq!(kpi.completed, 1);
        assert!((kpi.avg_turnaround - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = RunState::new(&[]).into_result(Policy::Fcfs).kpi();
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.completed, 0);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
    }
}
