//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered sequence of intervals during which the single
//! simulated CPU was occupied. Idle periods are not recorded as intervals;
//! they appear as gaps between consecutive `stop`/`start` pairs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// A contiguous span during which one process occupied the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub pid: ProcessId,
    /// Inclusive start time.
    pub start: Ticks,
    /// Exclusive stop time.
    pub stop: Ticks,
}

/// A span during which no process was ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    pub start: Ticks,
    pub stop: Ticks,
}

/// Ordered execution intervals for one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in execution order.
    pub intervals: Vec<ExecutionInterval>,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(pid: ProcessId, start: Ticks, stop: Ticks) -> Self {
        Self { pid, start, stop }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

impl IdleGap {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval was recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Latest stop time, or 0 for an empty timeline.
    pub fn makespan(&self) -> Ticks {
        self.intervals.iter().map(|i| i.stop).max().unwrap_or(0)
    }

    /// Total CPU-busy time.
    pub fn busy_time(&self) -> Ticks {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// All intervals for a process, in execution order.
    pub fn intervals_for(&self, pid: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| i.pid == pid).collect()
    }

    /// Total CPU time received by a process.
    pub fn busy_time_for(&self, pid: ProcessId) -> Ticks {
        self.intervals
            .iter()
            .filter(|i| i.pid == pid)
            .map(|i| i.duration())
            .sum()
    }

    /// Idle spans between consecutive intervals, including one before the
    /// first interval when it does not start at t=0.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in &self.intervals {
            if interval.start > cursor {
                gaps.push(IdleGap {
                    start: cursor,
                    stop: interval.start,
                });
            }
            cursor = cursor.max(interval.stop);
        }
        gaps
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }

    /// Checks that every interval is non-empty and that intervals are
    /// ordered and non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.start < i.stop)
            && self
                .intervals
                .windows(2)
                .all(|pair| pair[0].stop <= pair[1].start)
    }
}
