//! Workload documents and generators.
//!
//! A workload bundles a process list with the run parameters. On disk it
//! is JSON:
//!
//! ```json
//! {
//!   "quantum": 2,
//!   "policy": "strict",
//!   "processes": [
//!     { "name": "P1", "arrival": 0, "burst": 5 },
//!     { "arrival": 1, "burst": 3 }
//!   ]
//! }
//! ```
//!
//! `policy` and every `name` are optional. Unnamed processes are labelled
//! by position (`P2` above).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::scheduler::{Policy, SimulationConfig};
use crate::validation::{validate_inputs, ProcessInput, ValidationError};

/// A process set plus run parameters, as read from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Time quantum.
    pub quantum: i64,
    /// Requested policy. `None` leaves the choice to the caller.
    #[serde(default)]
    pub policy: Option<Policy>,
    /// Raw process entries in caller order.
    pub processes: Vec<ProcessInput>,
}

/// Failure to load a workload.
#[derive(Debug)]
pub enum WorkloadError {
    /// The file could not be read.
    Io(io::Error),
    /// The document is not valid workload JSON.
    Parse(serde_json::Error),
    /// The document parsed but its values are invalid.
    Invalid(Vec<ValidationError>),
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadError::Io(e) => write!(f, "cannot read workload: {e}"),
            WorkloadError::Parse(e) => write!(f, "malformed workload: {e}"),
            WorkloadError::Invalid(errors) => {
                write!(f, "invalid workload:")?;
                for e in errors {
                    write!(f, "\n  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for WorkloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkloadError::Io(e) => Some(e),
            WorkloadError::Parse(e) => Some(e),
            WorkloadError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for WorkloadError {
    fn from(e: io::Error) -> Self {
        WorkloadError::Io(e)
    }
}

impl From<serde_json::Error> for WorkloadError {
    fn from(e: serde_json::Error) -> Self {
        WorkloadError::Parse(e)
    }
}

impl From<Vec<ValidationError>> for WorkloadError {
    fn from(errors: Vec<ValidationError>) -> Self {
        WorkloadError::Invalid(errors)
    }
}

impl Workload {
    /// Creates a workload with no policy preference.
    pub fn new(quantum: i64, processes: Vec<ProcessInput>) -> Self {
        Self {
            quantum,
            policy: None,
            processes,
        }
    }

    /// Sets the requested policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Parses a JSON document. Values are not validated yet.
    pub fn from_json(json: &str) -> Result<Self, WorkloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file. Values are not validated yet.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WorkloadError> {
        let path = path.as_ref();
        debug!("loading workload from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, WorkloadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the workload and splits it into processes and the runs
    /// to perform.
    ///
    /// Yields one config for the requested policy, or one per policy in
    /// [`Policy::ALL`] when the workload names none.
    pub fn into_parts(self) -> Result<(Vec<Process>, Vec<SimulationConfig>), WorkloadError> {
        let processes = validate_inputs(&self.processes, self.quantum)?;
        let base = SimulationConfig::new(self.quantum);
        let configs = match self.policy {
            Some(policy) => vec![base.with_policy(policy)],
            None => Policy::ALL.iter().map(|&p| base.with_policy(p)).collect(),
        };
        Ok((processes, configs))
    }
}

/// Generates `count` processes named `P1..Pn` with arrivals in
/// `0..=max_arrival` and bursts in `1..=max_burst`.
pub fn random_processes<R: Rng>(
    rng: &mut R,
    count: usize,
    max_arrival: i64,
    max_burst: i64,
) -> Vec<Process> {
    (0..count)
        .map(|i| {
            let arrival = rng.random_range(0..=max_arrival.max(0));
            let burst = rng.random_range(1..=max_burst.max(1));
            Process::new(format!("P{}", i + 1), arrival, burst)
        })
        .collect()
}

/// Seeded variant of [`random_processes`]; the same seed always yields
/// the same workload.
pub fn random_workload(seed: u64, count: usize, max_arrival: i64, max_burst: i64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_processes(&mut rng, count, max_arrival, max_burst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    const SAMPLE: &str = r#"{
        "quantum": 2,
        "policy": "threshold_variant",
        "processes": [
            { "name": "P1", "arrival": 0, "burst": 5 },
            { "arrival": 1, "burst": 3 },
            { "name": "io", "arrival": 2, "burst": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_workload() {
        let w = Workload::from_json(SAMPLE).unwrap();
        assert_eq!(w.quantum, 2);
        assert_eq!(w.policy, Some(Policy::ThresholdVariant));
        assert_eq!(w.processes.len(), 3);
        assert_eq!(w.processes[1].name, None);
    }

    #[test]
    fn test_into_parts() {
        let (procs, configs) = Workload::from_json(SAMPLE).unwrap().into_parts().unwrap();
        let names: Vec<&str> = procs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "io"]);
        assert_eq!(
            configs,
            vec![SimulationConfig::new(2).with_policy(Policy::ThresholdVariant)]
        );
    }

    #[test]
    fn test_policy_is_optional() {
        let w = Workload::from_json(r#"{"quantum": 1, "processes": [{"arrival": 0, "burst": 1}]}"#)
            .unwrap();
        assert_eq!(w.policy, None);
        let (_, configs) = w.into_parts().unwrap();
        let policies: Vec<Policy> = configs.iter().map(|c| c.policy).collect();
        assert_eq!(policies, vec![Policy::Strict, Policy::ThresholdVariant]);
        assert!(configs.iter().all(|c| c.quantum == 1));
    }

    #[test]
    fn test_policy_override_selects_single_run() {
        let w = Workload::from_json(SAMPLE).unwrap().with_policy(Policy::Strict);
        let (_, configs) = w.into_parts().unwrap();
        assert_eq!(configs, vec![SimulationConfig::new(2)]);
    }

    #[test]
    fn test_malformed_json() {
        let err = Workload::from_json(r#"{"quantum": "two"}"#).unwrap_err();
        assert!(matches!(err, WorkloadError::Parse(_)));
    }

    #[test]
    fn test_invalid_values() {
        let w = Workload::new(0, vec![ProcessInput::new(-1, 2)]);
        match w.into_parts().unwrap_err() {
            WorkloadError::Invalid(errors) => {
                let kinds: Vec<ValidationErrorKind> = errors.iter().map(|e| e.kind).collect();
                assert_eq!(
                    kinds,
                    vec![
                        ValidationErrorKind::InvalidArrival,
                        ValidationErrorKind::InvalidQuantum
                    ]
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_display_lists_errors() {
        let err = Workload::new(2, Vec::new()).into_parts().unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("invalid workload:"));
        assert!(text.contains("At least one process is required"));
    }

    #[test]
    fn test_missing_file() {
        let err = Workload::from_file("/nonexistent/rr-sched/workload.json").unwrap_err();
        assert!(matches!(err, WorkloadError::Io(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let w = Workload::new(3, vec![ProcessInput::new(0, 2).with_name("A")])
            .with_policy(Policy::Strict);
        let back = Workload::from_json(&w.to_json().unwrap()).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn test_random_workload_is_seeded() {
        let a = random_workload(42, 20, 10, 5);
        let b = random_workload(42, 20, 10, 5);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert_eq!(a[0].name, "P1");
        for p in &a {
            assert!((0..=10).contains(&p.arrival));
            assert!((1..=5).contains(&p.burst));
        }
    }
}
