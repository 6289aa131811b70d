//! Per-process timing results.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Ticks};

/// Timing outcome for one process in one policy run.
///
/// Invariants: `turnaround_time = waiting_time + burst_duration` and
/// `completion_time = arrival_time + turnaround_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub id: ProcessId,
    pub priority: i64,
    pub burst_duration: Ticks,
    pub arrival_time: Ticks,
    /// Time spent ready but not running.
    pub waiting_time: Ticks,
    /// Time from arrival to completion.
    pub turnaround_time: Ticks,
    /// Time at which the last slice finished.
    pub completion_time: Ticks,
}

impl ProcessResult {
    /// Derives the row for a process from its completion time.
    pub fn completed_at(process: &Process, completion_time: Ticks) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id,
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            waiting_time: turnaround_time - process.burst_duration,
            turnaround_time,
            completion_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_at() {
        let p = Process::new(2, 2, 3).with_priority(2);
        let r = ProcessResult::completed_at(&p, 8);
        assert_eq!(r.id, 2);
        assert_eq!(r.priority, 2);
        assert_eq!(r.waiting_time, 3);
        assert_eq!(r.turnaround_time, 6);
        assert_eq!(r.completion_time, 8);
        assert_eq!(r.turnaround_time, r.waiting_time + r.burst_duration);
    }

    #[test]
    fn test_completed_without_waiting() {
        let p = Process::new(1, 0, 5);
        let r = ProcessResult::completed_at(&p, 5);
        assert_eq!(r.waiting_time, 0);
        assert_eq!(r.turnaround_time, 5);
    }
}
