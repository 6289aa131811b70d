//! Report rendering.
//!
//! Renders a [`ScheduleRun`] as a title banner, a Gantt row and a results
//! table, or a set of runs as JSON. Idle CPU time shows up as an explicit
//! `idle` cell in the Gantt row.

use std::io::{self, Write};

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::models::{ProcessId, ProcessResult, Ticks, Timeline};
use crate::scheduler::{RunSummary, ScheduleRun};

const GANTT_CELL_WIDTH: usize = 8;
const TABLE_HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Writes the full text report for one run.
pub fn write_run<W: Write>(w: &mut W, run: &ScheduleRun) -> io::Result<()> {
    write_title(w, &run.title)?;
    write_gantt(w, &run.timeline)?;
    write_table(w, &run.results, &run.summary)
}

/// Writes the text reports for several runs, in order.
pub fn write_runs<W: Write>(w: &mut W, runs: &[ScheduleRun]) -> io::Result<()> {
    for run in runs {
        write_run(w, run)?;
    }
    Ok(())
}

/// Renders one run to a string.
pub fn render_run(run: &ScheduleRun) -> io::Result<String> {
    let mut buf = Vec::new();
    write_run(&mut buf, run)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes all runs as pretty-printed JSON.
pub fn write_json<W: Write>(w: &mut W, runs: &[ScheduleRun]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, runs)?;
    writeln!(w)
}

/// Writes the title framed by dashed rules.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

enum Segment {
    Run { pid: ProcessId, start: Ticks, stop: Ticks },
    Idle { start: Ticks, stop: Ticks },
}

impl Segment {
    fn label(&self) -> String {
        match self {
            Segment::Run { pid, .. } => pid.to_string(),
            Segment::Idle { .. } => "idle".to_string(),
        }
    }

    fn bounds(&self) -> (Ticks, Ticks) {
        match *self {
            Segment::Run { start, stop, .. } | Segment::Idle { start, stop } => (start, stop),
        }
    }
}

fn segments(timeline: &Timeline) -> Vec<Segment> {
    let mut out = Vec::with_capacity(timeline.len());
    let mut cursor: Ticks = 0;
    for interval in &timeline.intervals {
        if interval.start > cursor {
            out.push(Segment::Idle {
                start: cursor,
                stop: interval.start,
            });
        }
        out.push(Segment::Run {
            pid: interval.pid,
            start: interval.start,
            stop: interval.stop,
        });
        cursor = interval.stop;
    }
    out
}

/// Writes the Gantt row and the time marks beneath it.
pub fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    let segments = segments(timeline);
    if segments.is_empty() {
        writeln!(w, "(no processes)")?;
        return writeln!(w);
    }

    write!(w, "|")?;
    for segment in &segments {
        write!(w, "{:^width$}|", segment.label(), width = GANTT_CELL_WIDTH)?;
    }
    writeln!(w)?;

    for segment in &segments {
        let (start, _) = segment.bounds();
        write!(w, "{:<width$}", start, width = GANTT_CELL_WIDTH + 1)?;
    }
    if let Some((_, stop)) = segments.last().map(Segment::bounds) {
        write!(w, "{stop}")?;
    }
    writeln!(w)?;
    writeln!(w)
}

/// Builds the per-process table with the summary in its footer.
///
/// Footer cells hold a label and a value on two lines.
pub fn results_table(results: &[ProcessResult], summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(TABLE_HEADER);

    for r in results {
        table.add_row(vec![
            r.id,
            r.priority,
            r.burst_duration,
            r.arrival_time,
            r.waiting_time,
            r.turnaround_time,
            r.completion_time,
        ]);
    }

    table.add_row(vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("Average\n{:.2}", summary.average_wait),
        format!("Average\n{:.2}", summary.average_turnaround),
        format!("Throughput\n{:.2}/t", summary.throughput),
    ]);

    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Writes the per-process table with the summary in its footer.
pub fn write_table<W: Write>(
    w: &mut W,
    results: &[ProcessResult],
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;
    writeln!(w, "{}", results_table(results, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, Process, ProcessSet};
    use crate::scheduler::{Fcfs, RoundRobin, SchedulingPolicy};

    fn sample_run() -> ScheduleRun {
        let set = ProcessSet::new(vec![
            Process::new(1, 0, 5).with_priority(1),
            Process::new(2, 2, 3).with_priority(2),
            Process::new(3, 4, 1).with_priority(3),
        ])
        .unwrap();
        Fcfs.schedule(&set)
    }

    #[test]
    fn test_title_banner() {
        let mut buf = Vec::new();
        write_title(&mut buf, "Priority").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "-".repeat(16));
        assert_eq!(lines[1], "     Priority");
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn test_gantt_row() {
        let text = render_run(&sample_run()).unwrap();
        assert!(text.contains("Gantt schedule\n|   1    |   2    |   3    |\n"));
        assert!(text.contains("0        5        8        9\n"));
    }

    #[test]
    fn test_gantt_shows_idle_gaps() {
        let mut timeline = Timeline::new();
        timeline.push(ExecutionInterval::new(1, 0, 2));
        timeline.push(ExecutionInterval::new(2, 5, 6));
        let mut buf = Vec::new();
        write_gantt(&mut buf, &timeline).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("|  idle  |"));
        assert!(text.contains("0        2        5        6"));
    }

    #[test]
    fn test_gantt_empty() {
        let mut buf = Vec::new();
        write_gantt(&mut buf, &Timeline::new()).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("(no processes)"));
    }

    #[test]
    fn test_table_contents() {
        let text = render_run(&sample_run()).unwrap();
        // Footer labels widen the Wait and Exit columns
        let header = "| ID | Priority | Burst | Arrival |    Wait | Turnaround |       Exit |";
        let row = "|  2 |        2 |     3 |       2 |       3 |          6 |          8 |";
        assert!(text.contains(header));
        assert!(text.contains(row));
        assert!(text.contains("| Average |    Average | Throughput |"));
        assert!(text.contains("|    2.33 |       5.33 |     0.33/t |"));
    }

    #[test]
    fn test_table_rows_follow_results() {
        let run = sample_run();
        let table = results_table(&run.results, &run.summary);
        // One row per process plus the footer
        assert_eq!(table.row_iter().count(), 4);
        let text = table.to_string();
        let first_body_line = text.lines().nth(3).unwrap();
        assert!(first_body_line.starts_with("|  1 |"));
    }

    #[test]
    fn test_table_rule_lines_align() {
        let text = render_run(&sample_run()).unwrap();
        let table: Vec<_> = text
            .lines()
            .skip_while(|l| *l != "Schedule table")
            .skip(1)
            .collect();
        let width = table[0].len();
        assert!(table.iter().all(|l| l.len() == width));
    }

    #[test]
    fn test_empty_run_renders_zero_summary() {
        let run = RoundRobin::default().schedule(&ProcessSet::empty());
        let text = render_run(&run).unwrap();
        assert!(text.contains("0.00/t"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[sample_run()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["policy"], "FCFS");
        assert_eq!(value[0]["timeline"]["intervals"][1]["start"], 5);
        assert_eq!(value[0]["results"][2]["waiting_time"], 4);
    }

    #[test]
    fn test_write_runs() {
        let mut buf = Vec::new();
        write_runs(&mut buf, &[sample_run(), sample_run()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("Schedule table").count(), 2);
    }
}
