//! Discrete-time dispatch policies and the simulation driver.
//!
//! Every policy works over a shared integer clock starting at 0 and
//! drives a [`RunState`], which owns the timeline and applies the
//! completion bookkeeping.
//!
//! # Policies
//!
//! | Policy | Preemptive | Ranking |
//! |--------|-----------|---------|
//! | FCFS | no | arrival, stable |
//! | RR | yes (quantum) | FIFO ready queue |
//! | SPN | no | total burst |
//! | SRT | yes (every tick) | remaining burst |
//! | HRRN | no | response ratio |
//! | Priority | no | priority value |
//!
//! Ties are always resolved by original input order.
//!
//! # KPI
//!
//! `RunKpi` summarises a run: makespan, utilization, throughput and
//! average turnaround, waiting and response times.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod kpi;
mod policy;
mod round_robin;
mod selective;
mod simulator;
mod state;

pub use fcfs::fcfs;
pub use kpi::RunKpi;
pub use policy::{parse_policy_list, Policy};
pub use round_robin::round_robin;
pub use selective::{non_preemptive, shortest_remaining_time};
pub use simulator::{SimulationRequest, Simulator};
pub use state::{RunResult, RunState};
