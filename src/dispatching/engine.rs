//! Rule engine for multi-criteria process selection.
//!
//! Composes selection rules sequentially: the first rule decides, later
//! rules are consulted only on ties, and a final tie-breaker settles
//! whatever is left.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, RuleScore, SelectionRule};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the order in which candidates were supplied (default).
    #[default]
    InputOrder,
    /// Lower process ID first.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_procsched::dispatching::{rules, DispatchContext, RuleEngine};
/// use u_procsched::models::Process;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityValue)
///     .with_tie_breaker(rules::ShortestBurst);
///
/// let processes = vec![
///     Process::new(1, 0, 8).with_priority(2),
///     Process::new(2, 0, 3).with_priority(2),
///     Process::new(3, 9, 1).with_priority(1),
/// ];
/// // P3 has not arrived at t=0; P1 and P2 tie on priority, P2 is shorter.
/// let best = engine.select_ready(&processes, &DispatchContext::at_time(0));
/// assert_eq!(best, Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes best-first.
    ///
    /// Returns indices into `processes`. The sort is stable, so with
    /// [`TieBreaker::InputOrder`] fully tied processes keep their relative order.
    pub fn sort_indices(&self, processes: &[Process], context: &DispatchContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the best process, first occurrence on ties.
    pub fn select_best(&self, processes: &[Process], context: &DispatchContext) -> Option<usize> {
        self.best_of(processes.iter().enumerate(), context)
    }

    /// Returns the index of the best process that has arrived by
    /// `context.current_time`, or `None` if nothing is ready.
    pub fn select_ready(&self, processes: &[Process], context: &DispatchContext) -> Option<usize> {
        self.best_of(
            processes.iter().enumerate().filter(|(_, p)| context.is_ready(p)),
            context,
        )
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn best_of<'a>(
        &self,
        candidates: impl Iterator<Item = (usize, &'a Process)>,
        context: &DispatchContext,
    ) -> Option<usize> {
        let mut best: Option<(usize, &Process)> = None;
        for (idx, process) in candidates {
            let better = match best {
                Some((_, current)) => self.compare(process, current, context) == Ordering::Less,
                None => true,
            };
            if better {
                best = Some((idx, process));
            }
        }
        best.map(|(idx, _)| idx)
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_shortest_burst_ordering() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 1),
            Process::new(3, 0, 3),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        let indices = engine.sort_indices(&processes, &ctx);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_ties_keep_input_order() {
        let processes = vec![
            Process::new(9, 0, 2),
            Process::new(4, 0, 2),
            Process::new(7, 0, 1),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        let order: Vec<_> = engine
            .sort_indices(&processes, &ctx)
            .into_iter()
            .map(|i| processes[i].id)
            .collect();
        assert_eq!(order, vec![7, 9, 4]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let processes = vec![Process::new(9, 0, 2), Process::new(4, 0, 2)];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.select_best(&processes, &ctx), Some(1));
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let processes = vec![
            Process::new(1, 0, 6).with_priority(3),
            Process::new(2, 0, 2).with_priority(3),
            Process::new(3, 0, 1).with_priority(7),
        ];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::PriorityValue)
            .with_tie_breaker(rules::ShortestBurst);

        // Priority ties between P1 and P2 → shorter burst wins
        assert_eq!(engine.select_best(&processes, &ctx), Some(1));
    }

    #[test]
    fn test_select_first_occurrence_on_ties() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 3)];
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.select_best(&processes, &ctx), Some(0));
    }

    #[test]
    fn test_select_ready_ignores_future_arrivals() {
        let processes = vec![Process::new(1, 0, 9), Process::new(2, 5, 1)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(
            engine.select_ready(&processes, &DispatchContext::at_time(4)),
            Some(0)
        );
        assert_eq!(
            engine.select_ready(&processes, &DispatchContext::at_time(5)),
            Some(1)
        );
    }

    #[test]
    fn test_nothing_ready() {
        let processes = vec![Process::new(1, 3, 1)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine
            .select_ready(&processes, &DispatchContext::at_time(0))
            .is_none());
    }

    #[test]
    fn test_empty_processes() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let p = Process::new(1, 2, 7).with_priority(4);
        let ctx = DispatchContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::PriorityValue)
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival);

        assert_eq!(engine.evaluate(&p, &ctx), vec![4, 7, -3]);
        assert_eq!(engine.rule_names(), vec!["PRIORITY", "SJF", "FCFS"]);
    }
}
