//! Discrete-time CPU scheduling simulator.
//!
//! Simulates classical single-CPU dispatch policies over a process set and
//! reports per-process timing metrics plus a tick-level execution timeline
//! ("Gantt chart").
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessRecord`, `Timeline`,
//!   `GanttInterval`, `ProcessMetrics`
//! - **`dispatching`**: Selection rules (SPN, SRT, HRRN, Priority) and the
//!   input-order tie-break
//! - **`scheduler`**: The policies, `Simulator` driver, `SimulationRequest`
//!   and `RunKpi`
//! - **`validation`**: Input integrity checks (duplicate names, bursts,
//!   arrivals, quanta, priorities)
//! - **`workload`**: Seeded synthetic process sets
//! - **`report`**: Plain-text rendering of results
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::report::gantt_line;
//! use u_cpu_schedule::scheduler::{Policy, Simulator};
//!
//! let processes = vec![
//!     Process::new("A", 0, 5),
//!     Process::new("B", 1, 3),
//!     Process::new("C", 2, 1),
//! ];
//! let result = Simulator::new().run(Policy::Fcfs, &processes).unwrap();
//! assert_eq!(gantt_line(&result), "GANTT: A,0,5; B,5,8; C,8,9;");
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
