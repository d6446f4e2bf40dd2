//! Process model.
//!
//! A process is a unit of CPU work with a fixed arrival time and a fixed
//! burst (total CPU demand). During a simulation run it accumulates
//! run-state: remaining burst, and once finished, completion, turnaround
//! and waiting times.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Names are labels only: duplicates are legal and each record is
/// scheduled independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process label (e.g. "P1").
    pub name: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// CPU time still owed. Starts at `burst`, never increases.
    pub remaining: i64,
    /// Time at which `remaining` reached zero. `None` while unfinished.
    pub completion: Option<i64>,
    /// `completion - arrival`. `None` while unfinished.
    pub turnaround: Option<i64>,
    /// `turnaround - burst`. `None` while unfinished.
    pub waiting: Option<i64>,
}

impl Process {
    /// Creates a fresh (not yet run) process.
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            remaining: burst,
            completion: None,
            turnaround: None,
            waiting: None,
        }
    }

    /// Returns a copy with run-state reset, keeping identity, arrival and burst.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.name.clone(), self.arrival, self.burst)
    }

    /// Whether the process still needs CPU time.
    #[inline]
    pub fn is_runnable(&self) -> bool {
        self.remaining > 0
    }

    /// Whether the process has arrived by `time` and still needs CPU time.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival <= time && self.is_runnable()
    }

    /// Whether completion statistics have been recorded.
    pub fn is_finished(&self) -> bool {
        self.completion.is_some()
    }

    /// Consumes `ticks` of CPU time.
    pub(crate) fn consume(&mut self, ticks: i64) {
        debug_assert!(
            ticks > 0 && ticks <= self.remaining,
            "process {} cannot run {ticks} of {} remaining ticks",
            self.name,
            self.remaining
        );
        self.remaining -= ticks;
    }

    /// Records completion at `time` and derives turnaround and waiting.
    pub(crate) fn finish(&mut self, time: i64) {
        debug_assert_eq!(self.remaining, 0, "process {} finished early", self.name);
        debug_assert!(
            time >= self.arrival + self.burst,
            "process {} completed at {time}, before arrival + burst",
            self.name
        );
        let turnaround = time - self.arrival;
        self.completion = Some(time);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround - self.burst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process() {
        let p = Process::new("P1", 3, 7);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.remaining, 7);
        assert!(!p.is_finished());
        assert_eq!(p.turnaround, None);
    }

    #[test]
    fn test_ready_at() {
        let p = Process::new("P1", 5, 2);
        assert!(!p.is_ready_at(4));
        assert!(p.is_ready_at(5));
        assert!(p.is_ready_at(9));
    }

    #[test]
    fn test_consume_and_finish() {
        let mut p = Process::new("P1", 2, 4);
        p.consume(3);
        assert_eq!(p.remaining, 1);
        assert!(p.is_runnable());
        p.consume(1);
        assert!(!p.is_runnable());

        p.finish(10);
        assert_eq!(p.completion, Some(10));
        assert_eq!(p.turnaround, Some(8));
        assert_eq!(p.waiting, Some(4));
    }

    #[test]
    fn test_fresh_copy_resets_run_state() {
        let mut p = Process::new("P1", 0, 2);
        p.consume(2);
        p.finish(2);

        let copy = p.fresh_copy();
        assert_eq!(copy.remaining, 2);
        assert_eq!(copy.completion, None);
        assert_eq!(copy.waiting, None);
        assert_eq!(copy.name, "P1");
    }
}
