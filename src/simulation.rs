//! Simulation configuration and multi-policy runner.
//!
//! A simulation runs each configured policy over its own copy of one
//! process set and collects the results in configuration order.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::dispatching::SelectionKey;
use crate::models::ProcessSet;
use crate::scheduler::{Fcfs, PriorityPolicy, RoundRobin, ScheduleRun, SchedulingPolicy, Sjf};

/// Identifies one of the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl PolicyKind {
    /// All policies in report order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Priority,
        PolicyKind::RoundRobin,
    ];

    /// Instantiates the policy with the parameters from `config`.
    pub fn build(self, config: &SimulationConfig) -> Box<dyn SchedulingPolicy> {
        match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf::new()),
            Self::Priority => Box::new(PriorityPolicy::with_key(config.priority_key)),
            Self::RoundRobin => Box::new(RoundRobin::new(config.quantum)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "fcfs"),
            Self::Sjf => write!(f, "sjf"),
            Self::Priority => write!(f, "priority"),
            Self::RoundRobin => write!(f, "round-robin"),
        }
    }
}

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-robin time quantum.
    pub quantum: NonZeroU32,
    /// Selection key of the priority policy.
    pub priority_key: SelectionKey,
    /// Policies to run, in report order.
    pub policies: Vec<PolicyKind>,
}

impl SimulationConfig {
    /// Creates the default configuration: all four policies, quantum 1,
    /// shortest-burst priority key.
    pub fn new() -> Self {
        Self {
            quantum: RoundRobin::DEFAULT_QUANTUM,
            priority_key: SelectionKey::default(),
            policies: PolicyKind::ALL.to_vec(),
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the priority policy's selection key.
    pub fn with_priority_key(mut self, key: SelectionKey) -> Self {
        self.priority_key = key;
        self
    }

    /// Restricts the run to the given policies (duplicates are dropped).
    /// An empty list keeps the current selection.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = PolicyKind>) -> Self {
        let mut selected: Vec<PolicyKind> = Vec::new();
        for kind in policies {
            if !selected.contains(&kind) {
                selected.push(kind);
            }
        }
        if !selected.is_empty() {
            self.policies = selected;
        }
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a set of policies over one process set.
///
/// # Example
///
/// ```
/// use u_procsched::models::{Process, ProcessSet};
/// use u_procsched::simulation::{Simulation, SimulationConfig};
///
/// let set = ProcessSet::new(vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 2, 3),
/// ]).unwrap();
///
/// let runs = Simulation::new(SimulationConfig::new()).run(&set);
/// assert_eq!(runs.len(), 4);
/// assert_eq!(runs[0].title, "First-come, first-serve");
/// ```
#[derive(Debug)]
pub struct Simulation {
    policies: Vec<Box<dyn SchedulingPolicy>>,
}

impl Simulation {
    /// Builds the policies named in `config`.
    pub fn new(config: SimulationConfig) -> Self {
        let policies = config
            .policies
            .iter()
            .map(|kind| kind.build(&config))
            .collect();
        Self { policies }
    }

    /// Names of the configured policies, in run order.
    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Runs every policy on an independent copy of `processes`.
    pub fn run(&self, processes: &ProcessSet) -> Vec<ScheduleRun> {
        log::debug!(
            "simulating {} processes under {:?}",
            processes.len(),
            self.policy_names()
        );
        self.policies
            .iter()
            .map(|policy| policy.schedule(processes))
            .collect()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample() -> ProcessSet {
        ProcessSet::new(vec![
            Process::new(1, 0, 5).with_priority(1),
            Process::new(2, 2, 3).with_priority(2),
            Process::new(3, 4, 1).with_priority(3),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.quantum.get(), 1);
        assert_eq!(config.priority_key, SelectionKey::ShortestBurst);
        assert_eq!(config.policies, PolicyKind::ALL.to_vec());
    }

    #[test]
    fn test_runs_all_policies_in_order() {
        let runs = Simulation::default().run(&sample());
        let titles: Vec<_> = runs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["First-come, first-serve", "Shortest-job-first", "Priority", "Round-robin"]
        );
        assert!(runs.iter().all(|r| r.results.len() == 3));
    }

    #[test]
    fn test_policy_selection() {
        let config = SimulationConfig::new().with_policies([
            PolicyKind::RoundRobin,
            PolicyKind::Fcfs,
            PolicyKind::RoundRobin,
        ]);
        let sim = Simulation::new(config);
        assert_eq!(sim.policy_names(), vec!["RR", "FCFS"]);
    }

    #[test]
    fn test_empty_selection_keeps_defaults() {
        let config = SimulationConfig::new().with_policies([]);
        assert_eq!(config.policies.len(), 4);
    }

    #[test]
    fn test_quantum_and_key_are_applied() {
        let config = SimulationConfig::new()
            .with_quantum(NonZeroU32::new(5).unwrap())
            .with_priority_key(SelectionKey::PriorityField)
            .with_policies([PolicyKind::Priority, PolicyKind::RoundRobin]);
        let runs = Simulation::new(config).run(&sample());

        assert_eq!(runs[0].service_order(), vec![1, 2, 3]);
        // Quantum 5 lets P1 finish in one slice
        assert_eq!(runs[1].timeline.intervals[0].stop, 5);
    }

    #[test]
    fn test_empty_process_set() {
        let runs = Simulation::default().run(&ProcessSet::empty());
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|r| r.summary.is_empty()));
    }

    #[test]
    fn test_policy_kind_display() {
        let names: Vec<_> = PolicyKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["fcfs", "sjf", "priority", "round-robin"]);
    }
}
