//! Dispatch context for selection rule evaluation.

use crate::models::{Process, Ticks};

/// Runtime state passed to selection rules at a decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time.
    pub current_time: Ticks,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Ticks) -> Self {
        Self { current_time }
    }

    /// Whether `process` is eligible at this decision point.
    #[inline]
    pub fn is_ready(&self, process: &Process) -> bool {
        process.has_arrived(self.current_time)
    }

    /// Time `process` has spent waiting so far (0 if not yet arrived).
    #[inline]
    pub fn waited(&self, process: &Process) -> Ticks {
        (self.current_time - process.arrival_time).max(0)
    }
}
