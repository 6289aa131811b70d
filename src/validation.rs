//! Input validation for process sets.
//!
//! Checks structural integrity of the process list before any policy
//! runs. Detects:
//! - Duplicate or non-positive process IDs
//! - Negative arrival times
//! - Non-positive burst durations
//! - Priorities outside `1..=50` (0 is accepted as "unspecified")
//! - Sets whose latest arrival plus total burst does not fit in [`Ticks`]

use std::collections::HashSet;
use std::fmt;

use crate::models::{Process, Ticks, MAX_PRIORITY, UNSPECIFIED_PRIORITY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is zero or negative.
    InvalidId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or negative time).
    NonPositiveBurst,
    /// A priority is outside the accepted range.
    PriorityOutOfRange,
    /// The latest arrival plus the total burst overflows [`Ticks`].
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. All IDs are positive
/// 3. All arrival times are non-negative
/// 4. All burst durations are positive
/// 5. All priorities are 0 (unspecified) or within `1..=50`
/// 6. The horizon (latest arrival + total burst) is representable
///
/// Every clock value a policy reaches is bounded by the horizon, so a set
/// that passes never overflows during simulation.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.id <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                format!("Process ID must be positive, got {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.priority != UNSPECIFIED_PRIORITY && !(1..=MAX_PRIORITY).contains(&p.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Process {} has priority {} outside 1..={MAX_PRIORITY}",
                    p.id, p.priority
                ),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival time plus total burst duration overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus total burst, or `None` on overflow.
///
/// Negative values are clamped to zero; they are reported by the other checks.
fn horizon(processes: &[Process]) -> Option<Ticks> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration.max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(1),
            Process::new(2, 2, 3).with_priority(2),
            Process::new(3, 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut processes = sample_processes();
        processes.push(Process::new(2, 9, 1));

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('2')));
    }

    #[test]
    fn test_invalid_id() {
        let errors = validate_processes(&[Process::new(0, 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidId);
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new(1, -1, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_non_positive_burst() {
        let errors = validate_processes(&[Process::new(1, 0, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_priority_range() {
        assert!(validate_processes(&[Process::new(1, 0, 1).with_priority(50)]).is_ok());

        let errors = validate_processes(&[Process::new(1, 0, 1).with_priority(51)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::PriorityOutOfRange);

        let errors = validate_processes(&[Process::new(1, 0, 1).with_priority(-3)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::PriorityOutOfRange);
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero burst + negative arrival
        let processes = vec![Process::new(1, 0, 5), Process::new(1, -2, 0)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_horizon_overflow() {
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        let errors = validate_processes(&[Process::new(1, i64::MAX - 1, 2)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        assert!(validate_processes(&[Process::new(1, i64::MAX - 1, 1)]).is_ok());
        let processes = vec![Process::new(1, 0, i64::MAX - 10), Process::new(2, 0, 10)];
        assert!(validate_processes(&processes).is_ok());
    }
}
