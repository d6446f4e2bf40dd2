//! Run performance metrics.
//!
//! Reduces the finalized processes and dispatch timeline of a run to
//! aggregate indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of `turnaround - burst` |
//! | Avg Turnaround | Mean of `completion - arrival` |
//! | CPU Utilization | `100 * sum(burst) / max(completion)` |
//! | Idle Time | Gaps between dispatches inside the run |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Aggregate performance indicators of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time over finished processes.
    pub avg_waiting: f64,
    /// Mean turnaround time over finished processes.
    pub avg_turnaround: f64,
    /// Busy share of `[0, last_completion]` in percent (0.0..=100.0).
    pub cpu_utilization_percent: f64,
    /// Sum of all bursts.
    pub total_burst: i64,
    /// Latest completion time (0 when nothing finished).
    pub last_completion: i64,
    /// Time between the first dispatch and the last completion with no process running.
    pub idle_time: i64,
    /// Number of dispatch events.
    pub dispatch_count: usize,
}

impl RunMetrics {
    /// Computes metrics from finalized processes and their timeline.
    ///
    /// Unfinished processes are left out of the averages. An empty
    /// process set yields zeroed averages. `total_burst` saturates at
    /// `i64::MAX`; validated input never reaches it.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        // Summed as f64: per-process times are bounded, their sum over n is not.
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut finished: usize = 0;
        let mut last_completion: i64 = 0;

        for process in processes {
            if let (Some(completion), Some(turnaround), Some(waiting)) =
                (process.completion, process.turnaround, process.waiting)
            {
                finished += 1;
                total_waiting += waiting as f64;
                total_turnaround += turnaround as f64;
                last_completion = last_completion.max(completion);
            }
        }

        let total_burst = processes
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.burst));

        let (avg_waiting, avg_turnaround) = if finished == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting / finished as f64,
                total_turnaround / finished as f64,
            )
        };

        let cpu_utilization_percent = if last_completion == 0 {
            0.0
        } else {
            100.0 * total_burst as f64 / last_completion as f64
        };

        let idle_time = match timeline.first_start() {
            Some(first) => (last_completion - first - timeline.busy_time()).max(0),
            None => 0,
        };

        Self {
            avg_waiting,
            avg_turnaround,
            cpu_utilization_percent,
            total_burst,
            last_completion,
            idle_time,
            dispatch_count: timeline.len(),
        }
    }
}
