//! Input validation for round-robin runs.
//!
//! The scheduler assumes validated input. These checks turn raw process
//! entries and a raw quantum into values it can run, and report every
//! problem found:
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive quantum
//! - Empty process sets
//! - Process sets whose run could push the clock past `i64::MAX`
//!
//! Validation is pure: prompting and re-asking on bad input belong to the
//! caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Process;

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time is negative.
    InvalidArrival,
    /// Burst time is zero or negative.
    InvalidBurst,
    /// Quantum is zero or negative.
    InvalidQuantum,
    /// No processes were submitted.
    EmptyProcessSet,
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

/// A raw process entry as supplied by a user or file.
///
/// The name is optional; unnamed entries are labelled `P<position>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Optional label.
    #[serde(default)]
    pub name: Option<String>,
    /// Arrival time (must be >= 0).
    pub arrival: i64,
    /// Burst time (must be > 0).
    pub burst: i64,
}

impl ProcessInput {
    /// Creates an unnamed entry.
    pub fn new(arrival: i64, burst: i64) -> Self {
        Self {
            name: None,
            arrival,
            burst,
        }
    }

    /// Sets the label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The label, or `P<index + 1>` when missing or blank.
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("P{}", index + 1),
        }
    }
}

/// Validates one raw entry at position `index` and builds a [`Process`].
///
/// Both fields are checked; when both are bad the arrival error is
/// reported (use [`validate_inputs`] to collect every error).
pub fn validate_process(input: &ProcessInput, index: usize) -> Result<Process, ValidationError> {
    let name = input.display_name(index);
    let mut errors = check_process(&name, input.arrival, input.burst);
    if errors.is_empty() {
        Ok(Process::new(name, input.arrival, input.burst))
    } else {
        Err(errors.remove(0))
    }
}

/// Validates a quantum.
pub fn validate_quantum(quantum: i64) -> Result<i64, ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be a positive integer, got {quantum}"),
        ));
    }
    Ok(quantum)
}

/// Validates raw entries and a quantum, building the process list.
///
/// # Returns
/// The processes in input order, or every detected issue.
pub fn validate_inputs(
    inputs: &[ProcessInput],
    quantum: i64,
) -> Result<Vec<Process>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut processes = Vec::with_capacity(inputs.len());

    if inputs.is_empty() {
        errors.push(empty_set());
    }

    for (index, input) in inputs.iter().enumerate() {
        let name = input.display_name(index);
        let found = check_process(&name, input.arrival, input.burst);
        if found.is_empty() {
            processes.push(Process::new(name, input.arrival, input.burst));
        } else {
            errors.extend(found);
        }
    }

    if errors.is_empty() {
        errors.extend(check_horizon(&processes));
    }

    if let Err(e) = validate_quantum(quantum) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(errors)
    }
}

/// Validates already-built processes and a quantum.
///
/// Checks:
/// 1. At least one process
/// 2. Every arrival is non-negative
/// 3. Every burst is positive
/// 4. `max(arrival) + sum(burst)` fits in `i64` (the clock never passes it)
/// 5. The quantum is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process], quantum: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(empty_set());
    }

    for p in processes {
        errors.extend(check_process(&p.name, p.arrival, p.burst));
    }

    if errors.is_empty() {
        errors.extend(check_horizon(processes));
    }

    if let Err(e) = validate_quantum(quantum) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_process(name: &str, arrival: i64, burst: i64) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if arrival < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidArrival,
            format!("Arrival time of '{name}' must be a non-negative integer, got {arrival}"),
        ));
    }
    if burst <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            format!("Burst time of '{name}' must be a positive integer, got {burst}"),
        ));
    }
    if arrival >= 0 && burst > 0 && arrival.checked_add(burst).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            format!(
                "'{name}' cannot finish before the time limit {}: arrival {arrival} + burst {burst}",
                i64::MAX
            ),
        ));
    }
    errors
}

/// Rejects sets whose latest arrival plus total burst overflows `i64`.
///
/// The clock of a run never exceeds `max(arrival) + sum(burst)`, so sets
/// passing this check cannot overflow the engine's clock or the burst
/// totals in [`crate::scheduler::RunMetrics`].
fn check_horizon(processes: &[Process]) -> Option<ValidationError> {
    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst));
    match horizon {
        Some(_) => None,
        None => Some(ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            format!(
                "Latest arrival {latest_arrival} plus total burst time exceeds the time limit {}",
                i64::MAX
            ),
        )),
    }
}

fn empty_set() -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::EmptyProcessSet,
        "At least one process is required",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{simulate, Policy};

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ]
    }

    #[test]
    fn test_valid_workload() {
        assert!(validate_workload(&sample_processes(), 2).is_ok());
    }

    #[test]
    fn test_zero_arrival_is_valid() {
        let p = validate_process(&ProcessInput::new(0, 1), 0).unwrap();
        assert_eq!(p.arrival, 0);
    }

    #[test]
    fn test_invalid_arrival() {
        let err = validate_process(&ProcessInput::new(-1, 3), 0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidArrival);
        assert!(err.message.contains("P1"));
    }

    #[test]
    fn test_invalid_burst() {
        let err = validate_process(&ProcessInput::new(0, 0).with_name("A"), 0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidBurst);
        assert!(err.to_string().contains("'A'"));

        let err = validate_process(&ProcessInput::new(0, -4), 0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_invalid_quantum() {
        assert_eq!(validate_quantum(3), Ok(3));
        assert_eq!(
            validate_quantum(0).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert_eq!(
            validate_quantum(-2).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_workload(&[], 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));

        let errors = validate_inputs(&[], 2).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_default_names() {
        let inputs = vec![
            ProcessInput::new(0, 2),
            ProcessInput::new(1, 2).with_name("  "),
            ProcessInput::new(2, 2).with_name("shell"),
        ];
        let procs = validate_inputs(&inputs, 1).unwrap();
        let names: Vec<&str> = procs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "shell"]);
    }

    #[test]
    fn test_inputs_keep_order() {
        let inputs = vec![ProcessInput::new(4, 1), ProcessInput::new(0, 1)];
        let procs = validate_inputs(&inputs, 1).unwrap();
        assert_eq!(procs[0].arrival, 4);
        assert_eq!(procs[1].arrival, 0);
    }

    #[test]
    fn test_multiple_errors() {
        let inputs = vec![
            ProcessInput::new(-1, 0), // bad arrival and bad burst
            ProcessInput::new(0, 2),
        ];
        let errors = validate_inputs(&inputs, 0).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidArrival));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurst));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_workload_reports_every_bad_process() {
        let procs = vec![
            Process::new("A", -3, 2),
            Process::new("B", 0, 0),
            Process::new("C", 0, 1),
        ];
        let errors = validate_workload(&procs, 1).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("'A'"));
        assert!(errors[1].message.contains("'B'"));
    }

    #[test]
    fn test_single_process_past_time_limit() {
        let err = validate_process(&ProcessInput::new(i64::MAX - 1, 5), 0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidBurst);

        let errors = validate_inputs(&[ProcessInput::new(i64::MAX - 1, 5)], 2).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_total_burst_past_time_limit() {
        // Each process fits on its own; together the run overflows.
        let half = i64::MAX / 2 + 1;
        let inputs = vec![ProcessInput::new(0, half), ProcessInput::new(0, half)];
        let errors = validate_inputs(&inputs, 1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurst);
        assert!(errors[0].message.contains("total burst"));

        let procs = vec![Process::new("A", 10, half), Process::new("B", 0, half)];
        assert!(validate_workload(&procs, 1).is_err());
    }

    #[test]
    fn test_run_ending_at_time_limit_is_valid() {
        let inputs = vec![
            ProcessInput::new(i64::MAX - 10, 4),
            ProcessInput::new(i64::MAX - 10, 6),
        ];
        let procs = validate_inputs(&inputs, 3).unwrap();
        let result = simulate(&procs, 3, Policy::Strict);

        assert_eq!(result.timeline.last_end(), Some(i64::MAX));
        assert_eq!(result.completion_of("P2"), Some(i64::MAX));
        for p in &result.processes {
            assert!(p.waiting.unwrap() >= 0);
        }
        let m = result.metrics();
        assert_eq!(m.total_burst, 10);
        assert_eq!(m.last_completion, i64::MAX);
    }

    #[test]
    fn test_process_input_deserialize() {
        let input: ProcessInput = serde_json::from_str(r#"{"arrival": 1, "burst": 3}"#).unwrap();
        assert_eq!(input, ProcessInput::new(1, 3));
        assert_eq!(input.display_name(4), "P5");
    }
}
