//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classic single-CPU scheduling disciplines over a static,
//! pre-known process list and reports per-process timing, aggregate
//! metrics and a Gantt timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `ExecutionInterval`,
//!   `Timeline`, `ProcessResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, priorities)
//! - **`dispatching`**: Selection rules and rule engine (SJF, priority, FCFS)
//! - **`scheduler`**: Policies (`Fcfs`, `Sjf`, `PriorityPolicy`, `RoundRobin`)
//!   and run statistics
//! - **`simulation`**: Configuration and multi-policy runner
//! - **`input`**: Comma-separated process file loader
//! - **`report`**: Text and JSON rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_procsched::input::parse_processes;
//! use u_procsched::simulation::Simulation;
//!
//! let set = parse_processes("1,5,0,1\n2,3,2,2\n3,1,4,3\n").unwrap();
//! let runs = Simulation::default().run(&set);
//!
//! let fcfs = &runs[0];
//! assert_eq!(fcfs.result_for(3).unwrap().completion_time, 9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;
