//! Process (CPU job) model.
//!
//! A process is a single CPU-bound burst that becomes eligible at its
//! arrival time. A [`ProcessSet`] is the validated, immutable input to
//! every scheduling policy.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use crate::validation::{validate_processes, ValidationError};

/// Process identifier (unique, positive).
pub type ProcessId = i64;

/// Simulated time unit. All times are relative to t=0.
pub type Ticks = i64;

/// Priority value meaning "not specified in the input".
pub const UNSPECIFIED_PRIORITY: i64 = 0;

/// Highest accepted priority value. Lower values are more important.
pub const MAX_PRIORITY: i64 = 50;

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time required.
    pub burst_duration: Ticks,
    /// Scheduling priority (1 = most important, 0 = unspecified).
    pub priority: i64,
}

impl Process {
    /// Creates a process with unspecified priority.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_duration: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: UNSPECIFIED_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by time `now`.
    #[inline]
    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }
}

/// An ordered, validated collection of processes.
///
/// Order is the order in which the processes were supplied (file order).
/// Policies never mutate a set; they take a working copy via [`ProcessSet::to_vec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Validates and wraps the given processes.
    ///
    /// # Errors
    /// Returns every detected problem (duplicate IDs, non-positive bursts, ...).
    pub fn new(processes: Vec<Process>) -> Result<Self, Vec<ValidationError>> {
        validate_processes(&processes)?;
        Ok(Self { processes })
    }

    /// Wraps processes that are valid by construction.
    pub(crate) fn from_valid(processes: Vec<Process>) -> Self {
        debug_assert!(validate_processes(&processes).is_ok());
        Self { processes }
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set contains no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Borrows the processes in input order.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Independent working copy for a single policy run.
    pub fn to_vec(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Finds a process by ID.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Sum of all burst durations.
    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_duration).sum()
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
