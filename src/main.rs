use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use u_procsched::dispatching::SelectionKey;
use u_procsched::input::load_file;
use u_procsched::models::ProcessSet;
use u_procsched::report;
use u_procsched::scheduler::RoundRobin;
use u_procsched::simulation::{PolicyKind, Simulation, SimulationConfig};
use u_procsched::workload::WorkloadGenerator;

/// Scheduling policy options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyArg {
    /// First-come, first-serve
    Fcfs,
    /// Shortest-job-first
    Sjf,
    /// Best arrived process by the priority key
    Priority,
    /// Round-robin with fixed quantum
    Rr,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fcfs => PolicyKind::Fcfs,
            PolicyArg::Sjf => PolicyKind::Sjf,
            PolicyArg::Priority => PolicyKind::Priority,
            PolicyArg::Rr => PolicyKind::RoundRobin,
        }
    }
}

/// Selection key of the priority policy
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PriorityKeyArg {
    /// Shortest burst among arrived processes
    Burst,
    /// Lowest priority value, then earliest arrival, then shortest burst
    Priority,
}

impl From<PriorityKeyArg> for SelectionKey {
    fn from(arg: PriorityKeyArg) -> Self {
        match arg {
            PriorityKeyArg::Burst => SelectionKey::ShortestBurst,
            PriorityKeyArg::Priority => SelectionKey::PriorityField,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum Format {
    Text,
    Json,
}

/// CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "u-procsched")]
#[command(about = "Simulate FCFS, SJF, priority and round-robin CPU scheduling", long_about = None)]
struct Args {
    /// Process file: one `ProcessID,BurstDuration,ArrivalTime[,Priority]` record per line
    #[arg(required_unless_present = "random")]
    file: Option<PathBuf>,

    /// Simulate COUNT random processes instead of reading a file
    #[arg(long, value_name = "COUNT", conflicts_with = "file")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0, requires = "random")]
    seed: u64,

    /// Round-robin time quantum
    #[arg(short, long, default_value_t = RoundRobin::DEFAULT_QUANTUM)]
    quantum: NonZeroU32,

    /// Selection key of the priority policy
    #[arg(long, value_enum, default_value_t = PriorityKeyArg::Burst)]
    priority_key: PriorityKeyArg,

    /// Run only these policies (repeatable; default: all four)
    #[arg(short, long, value_enum)]
    policy: Vec<PolicyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load(args: &Args) -> Result<ProcessSet> {
    match (&args.file, args.random) {
        (_, Some(count)) => {
            log::info!("generating {count} random processes (seed {})", args.seed);
            Ok(WorkloadGenerator::new(count).generate(args.seed))
        }
        (Some(path), None) => {
            load_file(path).with_context(|| format!("loading {}", path.display()))
        }
        (None, None) => anyhow::bail!("must give a scheduling file to process"),
    }
}

fn run(args: &Args) -> Result<()> {
    let processes = load(args)?;

    let config = SimulationConfig::new()
        .with_quantum(args.quantum)
        .with_priority_key(args.priority_key.into())
        .with_policies(args.policy.iter().copied().map(PolicyKind::from));
    let runs = Simulation::new(config).run(&processes);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => report::write_runs(&mut out, &runs)?,
        Format::Json => report::write_json(&mut out, &runs)?,
    }
    out.flush()?;
    Ok(())
}
