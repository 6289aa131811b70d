//! Process list loading.
//!
//! Reads comma-separated records, one process per line, no header:
//!
//! ```text
//! ProcessID,BurstDuration,ArrivalTime[,Priority]
//! ```
//!
//! Records follow CSV quoting rules, so `"1","5","0"` is accepted. Blank
//! lines are skipped and fields are trimmed. Loading is all-or-nothing: the
//! first malformed record aborts with a [`LoadError`] naming its line, and
//! the parsed set must pass validation.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::{Process, ProcessSet, UNSPECIFIED_PRIORITY};

/// A loading error.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    /// Error category.
    pub kind: LoadErrorKind,
    /// 1-based line number, when the error belongs to a record.
    pub line: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of loading errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The input could not be opened or read.
    Io,
    /// The input is not well-formed CSV (e.g. invalid UTF-8).
    Malformed,
    /// A record has neither 3 nor 4 fields.
    InvalidFieldCount,
    /// A field is not a valid integer.
    InvalidInteger,
    /// The records parsed but the process set failed validation.
    Invalid,
}

impl LoadError {
    fn new(kind: LoadErrorKind, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|pos| pos.line() as usize);
        let kind = if e.is_io_error() {
            LoadErrorKind::Io
        } else {
            LoadErrorKind::Malformed
        };
        Self::new(kind, line, e.to_string())
    }
}

const FIELD_NAMES: [&str; 4] = ["ProcessID", "BurstDuration", "ArrivalTime", "Priority"];

/// Loads and validates a process file.
///
/// # Errors
/// [`LoadErrorKind::Io`] if the file cannot be opened or read, otherwise
/// the errors of [`load_processes`].
pub fn load_file(path: impl AsRef<Path>) -> Result<ProcessSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        LoadError::new(
            LoadErrorKind::Io,
            None,
            format!("cannot open {}: {e}", path.display()),
        )
    })?;
    log::debug!("loading processes from {}", path.display());
    load_processes(file)
}

/// Parses and validates process records from a reader.
pub fn load_processes<R: Read>(reader: R) -> Result<ProcessSet, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut processes = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_no = record.position().map_or(0, |pos| pos.line() as usize);
        processes.push(parse_record(&record, line_no)?);
    }

    let set = ProcessSet::new(processes).map_err(|errors| {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        LoadError::new(LoadErrorKind::Invalid, None, message)
    })?;
    log::debug!("loaded {} processes", set.len());
    Ok(set)
}

/// Parses process records from a string.
pub fn parse_processes(input: &str) -> Result<ProcessSet, LoadError> {
    load_processes(input.as_bytes())
}

fn parse_record(record: &StringRecord, line_no: usize) -> Result<Process, LoadError> {
    let fields: Vec<&str> = record.iter().collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(LoadError::new(
            LoadErrorKind::InvalidFieldCount,
            Some(line_no),
            format!(
                "expected 3 or 4 fields (ProcessID,BurstDuration,ArrivalTime[,Priority]), found {}",
                fields.len()
            ),
        ));
    }

    let mut values = [0i64; 4];
    for (column, field) in fields.iter().enumerate() {
        values[column] = field.parse().map_err(|e| {
            LoadError::new(
                LoadErrorKind::InvalidInteger,
                Some(line_no),
                format!("{} {field:?} is not an integer: {e}", FIELD_NAMES[column]),
            )
        })?;
    }

    let [id, burst, arrival, priority] = values;
    let priority = if fields.len() == 4 {
        priority
    } else {
        UNSPECIFIED_PRIORITY
    };
    Ok(Process::new(id, arrival, burst).with_priority(priority))
}
