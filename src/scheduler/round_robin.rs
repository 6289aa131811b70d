//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//! 1. Stable-sort a copy of the input by arrival time.
//! 2. Admit every process with `arrival <= clock` to the back of the ready queue.
//! 3. If the ready queue is empty, jump the clock to the next arrival.
//! 4. Run the head for `min(remaining, quantum)` and record one interval.
//! 5. Admit arrivals that occurred during the slice, then re-enqueue the
//!    preempted process behind them if it still has work left.
//!
//! # Complexity
//! O(B / q + n) where B is the total burst.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use super::{RunBuilder, ScheduleRun, SchedulingPolicy};
use crate::models::{Process, ProcessSet, Ticks};

/// A process in the ready queue with its outstanding CPU time.
#[derive(Debug, Clone, Copy)]
struct ReadyEntry {
    process: Process,
    remaining: Ticks,
}

/// Preemptive round-robin scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU32,
}

impl RoundRobin {
    /// Default time quantum (1 tick).
    pub const DEFAULT_QUANTUM: NonZeroU32 = NonZeroU32::MIN;

    /// Creates the scheduler with the given quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self { quantum }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_QUANTUM)
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn title(&self) -> &'static str {
        "Round-robin"
    }

    fn schedule(&self, processes: &ProcessSet) -> ScheduleRun {
        let quantum = Ticks::from(self.quantum.get());
        let mut incoming: VecDeque<Process> = {
            let mut sorted = processes.to_vec();
            sorted.sort_by_key(|p| p.arrival_time);
            sorted.into()
        };
        let mut ready: VecDeque<ReadyEntry> = VecDeque::with_capacity(processes.len());
        let mut run = RunBuilder::new(processes);
        let mut clock: Ticks = 0;

        loop {
            admit_arrivals(&mut incoming, &mut ready, clock);

            let Some(entry) = ready.pop_front() else {
                match incoming.front() {
                    Some(next) => {
                        log::debug!(
                            "{}: cpu idle [{clock}, {})",
                            self.name(),
                            next.arrival_time
                        );
                        clock = next.arrival_time;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = entry.remaining.min(quantum);
            let start = clock;
            clock += slice;
            run.record_slice(entry.process.id, start, clock);

            admit_arrivals(&mut incoming, &mut ready, clock);

            let remaining = entry.remaining - slice;
            if remaining > 0 {
                ready.push_back(ReadyEntry {
                    process: entry.process,
                    remaining,
                });
            } else {
                run.record_completion(&entry.process, clock);
            }
        }

        run.finish(self.name(), self.title())
    }
}

/// Moves every process that has arrived by `clock` to the back of the ready
/// queue, in arrival order.
fn admit_arrivals(
    incoming: &mut VecDeque<Process>,
    ready: &mut VecDeque<ReadyEntry>,
    clock: Ticks,
) {
    while let Some(process) = incoming.front().copied() {
        if !process.has_arrived(clock) {
            break;
        }
        incoming.pop_front();
        ready.push_back(ReadyEntry {
            process,
            remaining: process.burst_duration,
        });
    }
}
