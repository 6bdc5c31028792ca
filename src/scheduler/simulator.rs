//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the whole request; report every problem before running.
//! 2. For each requested policy, in order, build a fresh [`RunState`]
//!    from the process set and run the policy to completion.
//! 3. Return one [`RunResult`] per policy.
//!
//! Runs share nothing but the immutable process definitions, so repeating
//! a policy on the same input reproduces the same timeline and metrics.

use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, instrument};

use super::{fcfs, non_preemptive, round_robin, shortest_remaining_time};
use super::{Policy, RunResult, RunState};
use crate::dispatching::rules::{HighestResponseRatio, LowestPriority, ShortestBurst};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Tick};
use crate::validation::{validate_policy, validate_processes, validate_request};

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policies to run, in order.
    ///
    /// In JSON each entry is either a tagged object
    /// (`{"kind": "round_robin", "quantum": 2}`) or a policy token
    /// (`"fcfs"`, `"2-2"`, ...).
    #[serde(deserialize_with = "deserialize_policies")]
    pub policies: Vec<Policy>,
    /// Bound consulted only by Round-Robin's termination guard.
    #[serde(default)]
    pub end_time: Tick,
    /// Process set, in definition order.
    pub processes: Vec<Process>,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            policies: Vec::new(),
            end_time: 0,
            processes,
        }
    }

    /// Adds a policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Sets the policies.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies.extend(policies);
        self
    }

    /// Sets the Round-Robin end-time bound.
    pub fn with_end_time(mut self, end_time: Tick) -> Self {
        self.end_time = end_time;
        self
    }

    /// Parses a request from JSON text.
    pub fn from_json_str(json: &str) -> SimulationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON request from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> SimulationResult<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }
}

fn deserialize_policies<'de, D>(deserializer: D) -> Result<Vec<Policy>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Token(String),
        Tagged(Policy),
    }

    Vec::<Entry>::deserialize(deserializer)?
        .into_iter()
        .map(|entry| match entry {
            Entry::Token(token) => token
                .parse()
                .map_err(|e: SimulationError| <D::Error as serde::de::Error>::custom(e)),
            Entry::Tagged(policy) => Ok(policy),
        })
        .collect()
}

/// Runs scheduling policies over a process set.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Policy, Simulator};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let result = Simulator::new().run(Policy::round_robin(2), &processes).unwrap();
/// assert_eq!(result.metrics_for("B").unwrap().finish, Some(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    end_time: Tick,
}

impl Simulator {
    /// Creates a simulator with end time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin end-time bound.
    pub fn with_end_time(mut self, end_time: Tick) -> Self {
        self.end_time = end_time;
        self
    }

    /// Validates and runs a single policy.
    pub fn run(&self, policy: Policy, processes: &[Process]) -> SimulationResult<RunResult> {
        validate_processes(processes)?;
        validate_policy(&policy, processes)?;
        Ok(self.run_unchecked(policy, processes))
    }

    /// Validates a request and runs every policy in order.
    pub fn run_request(request: &SimulationRequest) -> SimulationResult<Vec<RunResult>> {
        validate_request(&request.processes, &request.policies, request.end_time)?;

        let simulator = Self::new().with_end_time(request.end_time);
        let results = request
            .policies
            .iter()
            .map(|&policy| simulator.run_unchecked(policy, &request.processes))
            .collect();

        info!(policies = request.policies.len(), "simulation complete");
        Ok(results)
    }

    #[instrument(
        name = "run",
        skip(self, policy, processes),
        fields(policy = %policy, preemptive = policy.is_preemptive())
    )]
    fn run_unchecked(&self, policy: Policy, processes: &[Process]) -> RunResult {
        let mut state = RunState::new(processes);

        match policy {
            Policy::Fcfs => fcfs(&mut state),
            Policy::RoundRobin { quantum } => round_robin(&mut state, quantum, self.end_time),
            Policy::Spn => non_preemptive(&mut state, &ShortestBurst),
            Policy::Srt => shortest_remaining_time(&mut state),
            Policy::Hrrn => non_preemptive(&mut state, &HighestResponseRatio),
            Policy::Priority => non_preemptive(&mut state, &LowestPriority),
        }

        let result = state.into_result(policy);
        info!(makespan = result.makespan(), intervals = result.intervals.len(), "run finished");
        result
    }
}
