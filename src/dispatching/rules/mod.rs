//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::Process;

/// Shortest Burst (SJF / SPT).
///
/// Prioritizes processes with the shorter CPU burst.
/// Minimizes average waiting time on a single CPU.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst_duration
    }

    fn description(&self) -> &'static str {
        "Shortest Burst First"
    }
}

/// Priority field.
///
/// Prioritizes processes with the smaller priority value (1 = most important).
/// Unspecified priorities (0) sort after every explicit priority.
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl SelectionRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        if process.priority == crate::models::UNSPECIFIED_PRIORITY {
            RuleScore::MAX
        } else {
            process.priority
        }
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value First"
    }
}

/// First Come First Served.
///
/// Prioritizes processes by arrival time; equivalently, the one that has
/// been waiting longest at the current decision point.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore {
        -context.waited(process)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}
