//! Run-length rules and the named scheduling policies.
//!
//! Every policy shares one execution loop (see [`RoundRobin`]); a policy
//! only decides how long the dispatched process keeps the CPU.
//!
//! | Policy | Run length |
//! |--------|-----------|
//! | `Strict` | `min(quantum, remaining)` |
//! | `ThresholdVariant` | `remaining` if `remaining <= quantum`, else `quantum` |
//!
//! Both forms compute the same value for every input, so the two policies
//! always yield identical schedules. They are kept as separate names so
//! callers can select either one.
//!
//! [`RoundRobin`]: super::RoundRobin

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

/// Decides how many ticks a dispatched process runs.
pub trait SliceRule: Send + Sync + Debug {
    /// Rule name (e.g., "STRICT").
    fn name(&self) -> &'static str;

    /// Run length for a process with `remaining` ticks under `quantum`.
    ///
    /// Should return a value in `1..=min(quantum, remaining)` whenever both
    /// arguments are positive. [`RoundRobin`] clamps the result to
    /// `1..=remaining`, so a rule cannot stall a run or overdraw a burst.
    fn run_length(&self, remaining: i64, quantum: i64) -> i64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Standard preemptive round robin.
#[derive(Debug, Clone, Copy)]
pub struct Strict;

impl SliceRule for Strict {
    fn name(&self) -> &'static str {
        "STRICT"
    }

    fn run_length(&self, remaining: i64, quantum: i64) -> i64 {
        quantum.min(remaining)
    }

    fn description(&self) -> &'static str {
        "Round Robin (Preemptive)"
    }
}

/// Threshold round robin: a process whose remaining burst fits in one
/// quantum runs to completion, otherwise it is preempted after a quantum.
#[derive(Debug, Clone, Copy)]
pub struct Threshold;

impl SliceRule for Threshold {
    fn name(&self) -> &'static str {
        "THRESHOLD"
    }

    fn run_length(&self, remaining: i64, quantum: i64) -> i64 {
        if remaining <= quantum {
            remaining
        } else {
            quantum
        }
    }

    fn description(&self) -> &'static str {
        "Round Robin (Non-Preemptive Variant)"
    }
}

/// Named policy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Standard preemptive round robin.
    #[default]
    Strict,
    /// Run-to-completion when the remainder fits in a quantum.
    #[serde(alias = "threshold", alias = "non_preemptive")]
    ThresholdVariant,
}

impl Policy {
    /// All policies, in menu order.
    pub const ALL: [Policy; 2] = [Policy::Strict, Policy::ThresholdVariant];

    /// The run-length rule implementing this policy.
    pub fn rule(self) -> &'static dyn SliceRule {
        match self {
            Policy::Strict => &Strict,
            Policy::ThresholdVariant => &Threshold,
        }
    }

    /// Human-readable title used in reports.
    pub fn title(self) -> &'static str {
        self.rule().description()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Strict => f.write_str("strict"),
            Policy::ThresholdVariant => f.write_str("threshold_variant"),
        }
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown policy '{}' (expected 1/strict/preemptive or 2/threshold/non-preemptive)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    /// Accepts policy names case-insensitively, plus the menu numbers `1` and `2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "1" | "strict" | "preemptive" | "rr" => Ok(Policy::Strict),
            "2" | "threshold" | "threshold_variant" | "non_preemptive" => {
                Ok(Policy::ThresholdVariant)
            }
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
