//! Round-robin discrete-event simulation.
//!
//! # Algorithm
//!
//! 1. Copy the input and stable-sort it by arrival (ties keep caller order).
//! 2. Start the clock at the earliest arrival.
//! 3. Admit every arrived, unfinished, not-yet-queued process to the FIFO
//!    ready queue.
//! 4. If the queue is empty the CPU idles: jump the clock to the next
//!    arrival and admit again. No dispatch is recorded for the gap.
//! 5. Otherwise pop the head, run it for the policy's run length, and
//!    record the dispatch.
//! 6. Admit processes that arrived during the slice *before* re-queuing the
//!    preempted process at the tail, so new arrivals go first.
//! 7. A process whose remaining burst hits zero is finalized at the current
//!    clock.
//!
//! Each iteration advances the clock or the completed count, so the loop
//! ends after exactly `n` completions for valid input.
//!
//! # Complexity
//! O(d * n) where d = dispatch count, n = process count (admission scan).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::{Policy, RunMetrics, SliceRule};
use crate::models::{DispatchEvent, Process, Timeline};

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum slice granted per dispatch. Must be positive.
    pub quantum: i64,
    /// Run-length policy.
    #[serde(default)]
    pub policy: Policy,
}

impl SimulationConfig {
    /// Creates a config with the given quantum and the default policy.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            policy: Policy::default(),
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy the run used.
    pub policy: Policy,
    /// Quantum the run used.
    pub quantum: i64,
    /// Dispatch log in time order.
    pub timeline: Timeline,
    /// Finalized processes in arrival order (ties in input order).
    pub processes: Vec<Process>,
}

impl SimulationResult {
    /// Aggregate performance metrics for this run.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics::calculate(&self.processes, &self.timeline)
    }

    /// First finalized process with the given name.
    pub fn process(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }

    /// Completion time of the first process with the given name.
    pub fn completion_of(&self, name: &str) -> Option<i64> {
        self.process(name).and_then(|p| p.completion)
    }
}

/// Round-robin scheduling engine.
///
/// Holds only the quantum; every run works on its own copy of the
/// processes, so one engine can serve concurrent runs.
///
/// # Example
///
/// ```
/// use rr_sched::models::Process;
/// use rr_sched::scheduler::{Policy, RoundRobin};
///
/// let processes = vec![Process::new("P1", 0, 4)];
/// let result = RoundRobin::new(10).simulate(&processes, Policy::Strict);
///
/// assert_eq!(result.timeline.len(), 1);
/// assert_eq!(result.processes[0].waiting, Some(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates an engine with the given quantum.
    ///
    /// The quantum must be positive; see [`crate::validation::validate_quantum`].
    pub fn new(quantum: i64) -> Self {
        debug_assert!(quantum > 0, "quantum must be positive, got {quantum}");
        Self { quantum }
    }

    /// Creates an engine from a config (the policy is chosen per run).
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.quantum)
    }

    /// The configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs a named policy to completion.
    pub fn simulate(&self, processes: &[Process], policy: Policy) -> SimulationResult {
        let (timeline, processes) = self.simulate_with(processes, policy.rule());
        info!(
            "{policy} run finished: {} processes, {} dispatches, quantum {}",
            processes.len(),
            timeline.len(),
            self.quantum
        );
        SimulationResult {
            policy,
            quantum: self.quantum,
            timeline,
            processes,
        }
    }

    /// Runs an arbitrary run-length rule to completion.
    ///
    /// The caller's slice is never modified. Input must be validated:
    /// non-empty, arrivals non-negative, bursts positive, and
    /// `max(arrival) + sum(burst)` within `i64` (see
    /// [`crate::validation::validate_workload`]). Run lengths returned by
    /// `rule` are clamped to `1..=remaining`, so every dispatch makes
    /// progress and no burst is overdrawn.
    pub fn simulate_with(
        &self,
        processes: &[Process],
        rule: &dyn SliceRule,
    ) -> (Timeline, Vec<Process>) {
        let mut procs: Vec<Process> = processes.iter().map(Process::fresh_copy).collect();
        // sort_by_key is stable
        procs.sort_by_key(|p| p.arrival);

        let n = procs.len();
        let mut timeline = Timeline::new();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut queued = vec![false; n];
        let mut completed = 0;
        let mut clock = procs.iter().map(|p| p.arrival).min().unwrap_or(0);

        while completed < n {
            admit_arrivals(&procs, &mut ready, &mut queued, clock);

            let Some(i) = ready.pop_front() else {
                let next_arrival = procs
                    .iter()
                    .filter(|p| p.is_runnable())
                    .map(|p| p.arrival)
                    .min();
                match next_arrival {
                    Some(next) => {
                        debug!("cpu idle [{clock}, {next})");
                        clock = clock.max(next);
                        continue;
                    }
                    None => break,
                }
            };

            let process = &mut procs[i];
            // Keeps custom rules from stalling the clock or overdrawing a burst.
            let exec = rule
                .run_length(process.remaining, self.quantum)
                .clamp(1, process.remaining);
            let end = clock + exec;
            debug!("{} runs [{clock}, {end})", process.name);
            timeline.push(DispatchEvent::new(process.name.clone(), clock, end));
            process.consume(exec);
            clock = end;

            // Arrivals during the slice go ahead of the preempted process.
            admit_arrivals(&procs, &mut ready, &mut queued, clock);

            let process = &mut procs[i];
            if process.is_runnable() {
                ready.push_back(i);
            } else {
                process.finish(clock);
                completed += 1;
                debug!("{} completed at {clock}", process.name);
            }
        }

        (timeline, procs)
    }
}

/// Runs `policy` over `processes` with the given quantum.
///
/// Shorthand for `RoundRobin::new(quantum).simulate(processes, policy)`.
pub fn simulate(processes: &[Process], quantum: i64, policy: Policy) -> SimulationResult {
    RoundRobin::new(quantum).simulate(processes, policy)
}

/// Enqueues, in arrival order, every process that has arrived by `clock`,
/// still has work, and has never been queued.
fn admit_arrivals(procs: &[Process], ready: &mut VecDeque<usize>, queued: &mut [bool], clock: i64) {
    for (idx, process) in procs.iter().enumerate() {
        if !queued[idx] && process.is_ready_at(clock) {
            trace!("{} admitted at {clock}", process.name);
            ready.push_back(idx);
            queued[idx] = true;
        }
    }
}
