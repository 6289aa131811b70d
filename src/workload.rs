//! Random workload generation.
//!
//! Produces reproducible process sets from a seed, for demos and for
//! sweeping the scheduling invariants over many inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Process, ProcessSet, Ticks, MAX_PRIORITY};

/// Seeded generator of valid process sets.
///
/// # Example
///
/// ```
/// use u_procsched::workload::WorkloadGenerator;
///
/// let set = WorkloadGenerator::new(5).with_max_burst(4).generate(42);
/// assert_eq!(set.len(), 5);
/// assert!(set.iter().all(|p| (1..=4).contains(&p.burst_duration)));
/// assert_eq!(set, WorkloadGenerator::new(5).with_max_burst(4).generate(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: Ticks,
    max_burst: Ticks,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes (arrivals 0..=20, bursts 1..=10).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
        }
    }

    /// Sets the latest possible arrival time (clamped to ≥ 0).
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest possible burst (clamped to ≥ 1).
    pub fn with_max_burst(mut self, max_burst: Ticks) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Generates a process set. IDs are `1..=count` in arrival order.
    pub fn generate(&self, seed: u64) -> ProcessSet {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut arrivals: Vec<Ticks> = (0..self.count)
            .map(|_| rng.random_range(0..=self.max_arrival))
            .collect();
        arrivals.sort_unstable();

        let processes = arrivals
            .into_iter()
            .zip(1..)
            .map(|(arrival, id)| {
                Process::new(id, arrival, rng.random_range(1..=self.max_burst))
                    .with_priority(rng.random_range(1..=MAX_PRIORITY))
            })
            .collect();

        ProcessSet::from_valid(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generate_is_valid() {
        for seed in 0..20 {
            let set = WorkloadGenerator::new(25).generate(seed);
            assert_eq!(set.len(), 25);
            assert!(validate_processes(set.as_slice()).is_ok());
        }
    }

    #[test]
    fn test_generate_respects_bounds() {
        let set = WorkloadGenerator::new(50)
            .with_max_arrival(3)
            .with_max_burst(2)
            .generate(7);
        assert!(set.iter().all(|p| (0..=3).contains(&p.arrival_time)));
        assert!(set.iter().all(|p| (1..=2).contains(&p.burst_duration)));
        assert!(set.iter().all(|p| (1..=MAX_PRIORITY).contains(&p.priority)));
    }

    #[test]
    fn test_generate_sorted_by_arrival() {
        let set = WorkloadGenerator::new(30).generate(3);
        assert!(set
            .as_slice()
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_generate_deterministic() {
        let g = WorkloadGenerator::new(10);
        assert_eq!(g.generate(11), g.generate(11));
        assert_ne!(g.generate(11), g.generate(12));
    }

    #[test]
    fn test_generate_empty() {
        assert!(WorkloadGenerator::new(0).generate(1).is_empty());
    }

    #[test]
    fn test_bounds_are_clamped() {
        let set = WorkloadGenerator::new(5)
            .with_max_arrival(-4)
            .with_max_burst(0)
            .generate(0);
        assert!(set.iter().all(|p| p.arrival_time == 0 && p.burst_duration == 1));
    }
}
