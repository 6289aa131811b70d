//! Shortest-Job-First (static ordering).
//!
//! # Algorithm
//! Stable-sorts a copy of the input by ascending burst duration, then runs
//! it with FCFS accounting. The order is fixed up front; arrivals only
//! delay a process, they never change who goes next.
//!
//! # Complexity
//! O(n log n)

use super::fcfs::run_in_order;
use super::{ScheduleRun, SchedulingPolicy};
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::{Process, ProcessSet};

/// Shortest-job-first scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ShortestBurst),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn title(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn schedule(&self, processes: &ProcessSet) -> ScheduleRun {
        let working = processes.to_vec();
        let order: Vec<Process> = self
            .engine
            .sort_indices(&working, &DispatchContext::at_time(0))
            .into_iter()
            .map(|idx| working[idx])
            .collect();
        run_in_order(self, &order, processes)
    }
}
