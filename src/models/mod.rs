//! Scheduling domain models.
//!
//! Provides the input and output data types of a CPU scheduling simulation.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One CPU burst with arrival time and priority |
//! | `ProcessSet` | Validated, ordered input to every policy |
//! | `ExecutionInterval` | One contiguous span on the CPU |
//! | `Timeline` | Gantt view of a policy run |
//! | `ProcessResult` | Per-process wait, turnaround and completion |

mod process;
mod result;
mod timeline;

pub use process::{Process, ProcessId, ProcessSet, Ticks, MAX_PRIORITY, UNSPECIFIED_PRIORITY};
pub use result::ProcessResult;
pub use timeline::{ExecutionInterval, IdleGap, Timeline};
