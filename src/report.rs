//! Plain-text rendering of run results.
//!
//! Each run renders as:
//!
//! ```text
//! GANTT: A,0,5; B,5,8; C,8,9;
//! === FCFS ===
//! Gantt Chart:
//! | A | A | A | A | A | B | B | B | C |
//!
//! Process AT  BT  CT  TAT WT
//! A       0   5   5   5   0
//! ...
//! Total TAT: 19, Avg TAT: 6.33
//! Total WT: 10, Avg WT: 3.33
//! ```
//!
//! Columns in the metrics table are tab-separated.

use std::fmt;

use crate::models::{Slot, Timeline};
use crate::scheduler::{RunKpi, RunResult};

/// Final line printed after every requested policy has run.
pub const COMPLETION_LINE: &str = "Simulation complete.";

/// Machine-readable compressed timeline: `GANTT: A,0,5; B,5,8;`.
pub fn gantt_line(result: &RunResult) -> String {
    let mut line = String::from("GANTT:");
    for interval in &result.intervals {
        line.push_str(&format!(
            " {},{},{};",
            interval.name, interval.start, interval.end
        ));
    }
    line
}

/// One cell per tick; idle ticks render as a blank cell.
pub fn chart_row(timeline: &Timeline) -> String {
    let mut row = String::from("| ");
    for slot in &timeline.slots {
        match slot {
            Slot::Idle => row.push(' '),
            Slot::Busy(name) => row.push_str(name),
        }
        row.push_str(" | ");
    }
    row.trim_end().to_string()
}

/// Per-process table in input order. Unfinished processes show `-`.
pub fn metrics_table(result: &RunResult) -> String {
    let dash = |v: Option<i64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());

    let mut table = String::from("Process\tAT\tBT\tCT\tTAT\tWT\n");
    for m in &result.metrics {
        table.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            m.name,
            m.arrival,
            m.burst,
            dash(m.finish),
            dash(m.turnaround),
            dash(m.waiting)
        ));
    }
    table
}

/// Turnaround and waiting totals with two-decimal averages.
pub fn totals(kpi: &RunKpi) -> String {
    format!(
        "Total TAT: {}, Avg TAT: {:.2}\nTotal WT: {}, Avg WT: {:.2}",
        kpi.total_turnaround, kpi.avg_turnaround, kpi.total_waiting, kpi.avg_waiting
    )
}

/// Full text report for one run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    result: &'a RunResult,
}

impl<'a> RunReport<'a> {
    /// Wraps a run result for display.
    pub fn new(result: &'a RunResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "{}", gantt_line(result))?;
        writeln!(f, "=== {} ===", result.policy)?;
        writeln!(f, "Gantt Chart:")?;
        writeln!(f, "{}", chart_row(&result.timeline))?;
        writeln!(f)?;
        write!(f, "{}", metrics_table(result))?;
        writeln!(f, "{}", totals(&result.kpi()))
    }
}
