//! Per-run timeline and result accumulation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::RunSummary;
use crate::models::{
    ExecutionInterval, Process, ProcessId, ProcessResult, ProcessSet, Ticks, Timeline,
};

/// Complete outcome of one policy over one process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Short policy name (e.g. "RR").
    pub policy: String,
    /// Report title (e.g. "Round-robin").
    pub title: String,
    /// Execution intervals in time order.
    pub timeline: Timeline,
    /// One row per process, in input order.
    pub results: Vec<ProcessResult>,
    /// Aggregate statistics.
    pub summary: RunSummary,
}

impl ScheduleRun {
    /// Finds the row for a process.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Process IDs in the order they first reached the CPU.
    pub fn service_order(&self) -> Vec<ProcessId> {
        let mut order: Vec<ProcessId> = Vec::with_capacity(self.results.len());
        for interval in &self.timeline.intervals {
            if !order.contains(&interval.pid) {
                order.push(interval.pid);
            }
        }
        order
    }
}

/// Accumulates intervals and id-keyed result rows while a policy runs.
///
/// Rows are stored by process ID, never by position, so sparse or
/// non-sequential IDs are handled. [`RunBuilder::finish`] emits them in the
/// order of the input set.
#[derive(Debug)]
pub struct RunBuilder<'a> {
    processes: &'a ProcessSet,
    timeline: Timeline,
    results: HashMap<ProcessId, ProcessResult>,
}

impl<'a> RunBuilder<'a> {
    /// Starts an empty run over `processes`.
    pub fn new(processes: &'a ProcessSet) -> Self {
        Self {
            processes,
            timeline: Timeline::new(),
            results: HashMap::with_capacity(processes.len()),
        }
    }

    /// Records one contiguous CPU slice.
    pub fn record_slice(&mut self, pid: ProcessId, start: Ticks, stop: Ticks) {
        debug_assert!(start < stop, "empty slice for process {pid}: [{start}, {stop})");
        self.timeline.push(ExecutionInterval::new(pid, start, stop));
    }

    /// Records that `process` finished at `completion_time`.
    pub fn record_completion(&mut self, process: &Process, completion_time: Ticks) {
        let row = ProcessResult::completed_at(process, completion_time);
        log::trace!(
            "process {} completed at {} (wait {}, turnaround {})",
            row.id,
            row.completion_time,
            row.waiting_time,
            row.turnaround_time
        );
        let previous = self.results.insert(process.id, row);
        debug_assert!(previous.is_none(), "process {} completed twice", process.id);
    }

    /// Runs `process` without preemption starting no earlier than `clock`.
    ///
    /// The CPU idles until the process arrives if necessary. Returns the new
    /// clock value (the completion time).
    pub fn run_to_completion(&mut self, process: &Process, clock: Ticks) -> Ticks {
        let start = clock.max(process.arrival_time);
        let stop = start + process.burst_duration;
        self.record_slice(process.id, start, stop);
        self.record_completion(process, stop);
        stop
    }

    /// Orders rows by the input set and computes the summary.
    pub fn finish(mut self, policy: &str, title: &str) -> ScheduleRun {
        let results: Vec<ProcessResult> = self
            .processes
            .iter()
            .filter_map(|p| self.results.remove(&p.id))
            .collect();
        debug_assert_eq!(
            results.len(),
            self.processes.len(),
            "every process must complete exactly once"
        );

        let summary = RunSummary::calculate(&results, &self.timeline);
        log::info!(
            "{policy}: {} processes, avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}",
            summary.process_count,
            summary.average_wait,
            summary.average_turnaround,
            summary.throughput
        );

        ScheduleRun {
            policy: policy.to_string(),
            title: title.to_string(),
            timeline: self.timeline,
            results,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ProcessSet {
        ProcessSet::new(vec![
            Process::new(40, 0, 2),
            Process::new(7, 1, 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_run_to_completion_idles_until_arrival() {
        let set = ProcessSet::new(vec![Process::new(1, 5, 2)]).unwrap();
        let mut run = RunBuilder::new(&set);
        let clock = run.run_to_completion(&set.as_slice()[0], 0);
        assert_eq!(clock, 7);

        let out = run.finish("T", "Test");
        assert_eq!(out.timeline.intervals, vec![ExecutionInterval::new(1, 5, 7)]);
        assert_eq!(out.results[0].waiting_time, 0);
    }

    #[test]
    fn test_rows_keyed_by_sparse_ids() {
        let set = sample_set();
        let mut run = RunBuilder::new(&set);
        // Complete in reverse input order
        let p7 = *set.get(7).unwrap();
        let p40 = *set.get(40).unwrap();
        let clock = run.run_to_completion(&p7, 1);
        run.run_to_completion(&p40, clock);

        let out = run.finish("T", "Test");
        let ids: Vec<_> = out.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![40, 7]);
        assert_eq!(out.result_for(40).unwrap().completion_time, 6);
        assert_eq!(out.result_for(40).unwrap().waiting_time, 4);
        assert_eq!(out.service_order(), vec![7, 40]);
    }

    #[test]
    fn test_record_slices() {
        let set = sample_set();
        let p40 = *set.get(40).unwrap();
        let p7 = *set.get(7).unwrap();
        let mut run = RunBuilder::new(&set);
        run.record_slice(40, 0, 1);
        run.record_slice(7, 1, 4);
        run.record_slice(40, 4, 5);
        run.record_completion(&p7, 4);
        run.record_completion(&p40, 5);

        let out = run.finish("T", "Test");
        assert_eq!(out.timeline.len(), 3);
        assert_eq!(out.timeline.busy_time_for(40), 2);
        assert_eq!(out.result_for(40).unwrap().waiting_time, 3);
        assert_eq!(out.summary.makespan, 5);
    }

    #[test]
    fn test_empty_run() {
        let set = ProcessSet::empty();
        let out = RunBuilder::new(&set).finish("T", "Test");
        assert!(out.results.is_empty());
        assert!(out.timeline.is_empty());
        assert!(out.summary.is_empty());
    }
}
