//! Synthetic process-set generation.
//!
//! Produces a reproducible process set from a seed: arrivals uniform in
//! `[0, max_arrival]`, bursts uniform in `[min_burst, max_burst]` and,
//! optionally, priorities uniform in `[0, priority_levels)`.
//! Processes are named `P1..Pn` and returned in arrival order.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Process, Tick};

/// Parameters for a synthetic workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick.
    pub max_arrival: Tick,
    /// Shortest possible burst (clamped to at least 1).
    pub min_burst: i64,
    /// Longest possible burst.
    pub max_burst: i64,
    /// Number of distinct priority values. `None` = no priorities.
    pub priority_levels: Option<i32>,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 8,
            priority_levels: Some(5),
            seed: 0,
        }
    }
}

impl WorkloadSpec {
    /// Creates a spec with `count` processes and the given seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            ..Default::default()
        }
    }

    /// Sets the arrival window.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_bursts(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the number of priority levels (`None` disables priorities).
    pub fn with_priority_levels(mut self, levels: Option<i32>) -> Self {
        self.priority_levels = levels;
        self
    }

    /// Generates the process set.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let max_arrival = self.max_arrival.max(0);

        let mut arrivals: Vec<Tick> = (0..self.count)
            .map(|_| rng.random_range(0..=max_arrival))
            .collect();
        arrivals.sort_unstable();

        arrivals
            .into_iter()
            .enumerate()
            .map(|(i, arrival)| {
                let burst = rng.random_range(min_burst..=max_burst);
                let process = Process::new(format!("P{}", i + 1), arrival, burst);
                match self.priority_levels {
                    Some(levels) if levels > 0 => {
                        process.with_priority(rng.random_range(0..levels))
                    }
                    _ => process,
                }
            })
            .collect()
    }
}
