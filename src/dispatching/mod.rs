//! Selection rules and rule engine for choosing the next process.
//!
//! Provides the ordering policies used by the non-preemptive schedulers
//! (shortest burst, priority value, earliest arrival) and a composable
//! engine for multi-criteria selection.
//!
//! # Usage
//!
//! ```
//! use u_procsched::dispatching::{rules, DispatchContext, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::PriorityValue)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let context = DispatchContext::at_time(0);
//! // let next = engine.select_ready(&pending, &context);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::{RuleEngine, TieBreaker};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::Process;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A selection rule that ranks processes at a decision point.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FCFS").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current dispatch context.
    ///
    /// Returns a score where lower = selected first.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Key used by the priority scheduler to pick among arrived processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionKey {
    /// Shortest burst first, ties by arrival order.
    #[default]
    ShortestBurst,
    /// Lowest priority value first, then earlier arrival, then shorter burst.
    PriorityField,
}

impl SelectionKey {
    /// Builds the rule engine implementing this key.
    pub fn engine(self) -> RuleEngine {
        match self {
            Self::ShortestBurst => RuleEngine::new().with_rule(rules::ShortestBurst),
            Self::PriorityField => RuleEngine::new()
                .with_rule(rules::PriorityValue)
                .with_tie_breaker(rules::EarliestArrival)
                .with_tie_breaker(rules::ShortestBurst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_key_engines() {
        assert_eq!(SelectionKey::ShortestBurst.engine().rule_names(), vec!["SJF"]);
        assert_eq!(
            SelectionKey::PriorityField.engine().rule_names(),
            vec!["PRIORITY", "FCFS", "SJF"]
        );
        assert_eq!(SelectionKey::default(), SelectionKey::ShortestBurst);
    }
}
