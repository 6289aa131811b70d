//! Priority scheduling among arrived processes.
//!
//! # Algorithm
//! 1. Stable-sort a copy of the input by arrival time (the pending pool).
//! 2. At each decision point, consider pending processes with
//!    `arrival <= clock` and pick the best under the selection key, first
//!    in arrival order on ties.
//! 3. If nothing has arrived, jump the clock to the earliest pending arrival.
//! 4. Run the selected process to completion and remove it from the pool,
//!    preserving the pool's arrival order.
//!
//! The default key is [`SelectionKey::ShortestBurst`]; use
//! [`SelectionKey::PriorityField`] to select by the `priority` value.
//!
//! # Complexity
//! O(n²)

use super::{RunBuilder, ScheduleRun, SchedulingPolicy};
use crate::dispatching::{DispatchContext, RuleEngine, SelectionKey};
use crate::models::{ProcessSet, Ticks};

/// Non-preemptive priority scheduler.
///
/// # Example
///
/// ```
/// use u_procsched::dispatching::SelectionKey;
/// use u_procsched::models::{Process, ProcessSet};
/// use u_procsched::scheduler::{PriorityPolicy, SchedulingPolicy};
///
/// let set = ProcessSet::new(vec![
///     Process::new(1, 0, 5).with_priority(1),
///     Process::new(2, 2, 3).with_priority(2),
///     Process::new(3, 4, 1).with_priority(3),
/// ]).unwrap();
///
/// let by_burst = PriorityPolicy::new().schedule(&set);
/// assert_eq!(by_burst.service_order(), vec![1, 3, 2]);
///
/// let by_priority = PriorityPolicy::with_key(SelectionKey::PriorityField).schedule(&set);
/// assert_eq!(by_priority.service_order(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityPolicy {
    key: SelectionKey,
    engine: RuleEngine,
}

impl PriorityPolicy {
    /// Creates the scheduler with the default shortest-burst key.
    pub fn new() -> Self {
        Self::with_key(SelectionKey::default())
    }

    /// Creates the scheduler with an explicit selection key.
    pub fn with_key(key: SelectionKey) -> Self {
        Self {
            key,
            engine: key.engine(),
        }
    }

    /// The configured selection key.
    pub fn key(&self) -> SelectionKey {
        self.key
    }
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for PriorityPolicy {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn title(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &ProcessSet) -> ScheduleRun {
        let mut pending = processes.to_vec();
        pending.sort_by_key(|p| p.arrival_time);

        let mut run = RunBuilder::new(processes);
        let mut clock: Ticks = 0;

        while let Some(next_arrival) = pending.first().map(|p| p.arrival_time) {
            let context = DispatchContext::at_time(clock);
            match self.engine.select_ready(&pending, &context) {
                Some(idx) => {
                    let process = pending.remove(idx);
                    log::debug!(
                        "{}: t={clock} selected process {} ({} ready)",
                        self.name(),
                        process.id,
                        pending.iter().filter(|p| context.is_ready(p)).count() + 1
                    );
                    clock = run.run_to_completion(&process, clock);
                }
                None => {
                    log::debug!("{}: cpu idle [{clock}, {next_arrival})", self.name());
                    clock = next_arrival;
                }
            }
        }

        run.finish(self.name(), self.title())
    }
}
