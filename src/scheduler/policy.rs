//! Dispatch policy tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// A scheduling discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served (non-preemptive, arrival order).
    Fcfs,
    /// Round-Robin with a fixed quantum (preemptive).
    RoundRobin {
        /// Ticks a process may run before it is requeued.
        quantum: i64,
    },
    /// Shortest Process Next (non-preemptive).
    Spn,
    /// Shortest Remaining Time (preemptive).
    Srt,
    /// Highest Response Ratio Next (non-preemptive).
    Hrrn,
    /// Lowest priority value first (non-preemptive).
    Priority,
}

impl Policy {
    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Policy::RoundRobin { quantum }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. } | Policy::Srt)
    }

    /// Whether the policy reads process priorities.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Policy::Priority)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            Policy::Spn => write!(f, "SPN"),
            Policy::Srt => write!(f, "SRT"),
            Policy::Hrrn => write!(f, "HRRN"),
            Policy::Priority => write!(f, "Priority"),
        }
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    /// Parses a policy token.
    ///
    /// Accepts the numeric menu codes (`1` FCFS, `2-<q>` RR, `3` SPN,
    /// `4` SRT, `5` HRRN) and names (`fcfs`, `rr:<q>`, `rr-<q>`,
    /// `spn`, `sjf`, `srt`, `hrrn`, `priority`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let invalid = || SimulationError::InvalidPolicy(s.trim().to_string());

        let rr_quantum = token
            .strip_prefix("2-")
            .or_else(|| token.strip_prefix("rr-"))
            .or_else(|| token.strip_prefix("rr:"));
        if let Some(q) = rr_quantum {
            return q.parse::<i64>().map(Policy::round_robin).map_err(|_| invalid());
        }

        match token.as_str() {
            "1" | "fcfs" => Ok(Policy::Fcfs),
            "3" | "spn" | "sjf" => Ok(Policy::Spn),
            "4" | "srt" => Ok(Policy::Srt),
            "5" | "hrrn" => Ok(Policy::Hrrn),
            "priority" => Ok(Policy::Priority),
            _ => Err(invalid()),
        }
    }
}

/// Parses a comma-separated policy list such as `"1,2-2,3"`.
///
/// Empty tokens are skipped.
pub fn parse_policy_list(list: &str) -> Result<Vec<Policy>, SimulationError> {
    list.split(',')
        .filter(|t| !t.trim().is_empty())
        .map(str::parse)
        .collect()
}
