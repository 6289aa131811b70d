//! First-Come, First-Served.
//!
//! # Algorithm
//! Runs processes strictly in input order without preemption. For each
//! process: `start = max(clock, arrival)`, `wait = start - arrival`,
//! `clock = start + burst`. Waiting time is computed fresh for every
//! process, including those arriving at t=0.
//!
//! # Complexity
//! O(n)

use super::{RunBuilder, ScheduleRun, SchedulingPolicy};
use crate::models::{Process, ProcessSet, Ticks};

/// First-come, first-serve scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn title(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn schedule(&self, processes: &ProcessSet) -> ScheduleRun {
        run_in_order(self, &processes.to_vec(), processes)
    }
}

/// Runs `order` back to back, idling only while the next process has not
/// yet arrived.
pub(crate) fn run_in_order(
    policy: &dyn SchedulingPolicy,
    order: &[Process],
    processes: &ProcessSet,
) -> ScheduleRun {
    let mut run = RunBuilder::new(processes);
    let mut clock: Ticks = 0;

    for process in order {
        if process.arrival_time > clock {
            log::debug!(
                "{}: cpu idle [{clock}, {}) before process {}",
                policy.name(),
                process.arrival_time,
                process.id
            );
        }
        clock = run.run_to_completion(process, clock);
    }

    run.finish(policy.name(), policy.title())
}
