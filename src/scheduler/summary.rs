//! Run quality metrics.
//!
//! Reduces the per-process rows of one policy run to aggregate statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | mean(waiting_time) |
//! | Average turnaround | mean(turnaround_time) |
//! | Throughput | process count / last completion time |
//! | Makespan | last completion time |
//! | CPU utilization | busy time / makespan |
//!
//! An empty run yields zero for every metric rather than NaN.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, Ticks, Timeline};

/// Aggregate statistics of one policy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per unit of time, measured at the last completion.
    pub throughput: f64,
    /// Last completion time.
    pub makespan: Ticks,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl RunSummary {
    /// Computes statistics from result rows and the run's timeline.
    pub fn calculate(results: &[ProcessResult], timeline: &Timeline) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let count = results.len() as f64;
        // Summed as f64: each row fits in Ticks but their total need not.
        let total_wait: f64 = results.iter().map(|r| r.waiting_time as f64).sum();
        let total_turnaround: f64 = results.iter().map(|r| r.turnaround_time as f64).sum();
        let makespan = results.iter().map(|r| r.completion_time).max().unwrap_or(0);

        let (throughput, cpu_utilization) = if makespan > 0 {
            (
                count / makespan as f64,
                timeline.busy_time() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count: results.len(),
            average_wait: total_wait / count,
            average_turnaround: total_turnaround / count,
            throughput,
            makespan,
            cpu_utilization,
        }
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.process_count == 0
    }
}
