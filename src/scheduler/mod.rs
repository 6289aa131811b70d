//! CPU scheduling policies and run statistics.
//!
//! Every policy is a stateless strategy over a validated [`ProcessSet`]. A
//! run never mutates its input; it works on its own copy and returns a
//! [`ScheduleRun`] holding the Gantt timeline, per-process rows and summary.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `Fcfs` | no | input order |
//! | `Sjf` | no | burst order, fixed up front |
//! | `PriorityPolicy` | no | best arrived process at each decision point |
//! | `RoundRobin` | yes | FIFO ready queue, fixed quantum |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod fcfs;
mod priority;
mod round_robin;
mod run;
mod sjf;
mod summary;

pub use fcfs::Fcfs;
pub use priority::PriorityPolicy;
pub use round_robin::RoundRobin;
pub use run::{RunBuilder, ScheduleRun};
pub use sjf::Sjf;
pub use summary::RunSummary;

use std::fmt::Debug;

use crate::models::ProcessSet;

/// A CPU scheduling discipline.
///
/// Implementations must be deterministic and must not keep state between
/// calls to [`SchedulingPolicy::schedule`].
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Report title.
    fn title(&self) -> &'static str {
        self.name()
    }

    /// Simulates the policy over `processes`.
    fn schedule(&self, processes: &ProcessSet) -> ScheduleRun;
}
