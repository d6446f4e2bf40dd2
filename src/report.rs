//! Text rendering of a finished run.
//!
//! A report has three parts:
//! - a Gantt chart: a `Time:` row with every dispatch start plus the final
//!   end, and a `Proc:` row with the dispatched process names
//! - a per-process table (arrival, burst, completion, turnaround, waiting)
//! - the aggregate metrics, one decimal place

use std::fmt;

use crate::models::Timeline;
use crate::scheduler::{RunMetrics, SimulationResult};

/// Column width of one Gantt chart cell.
pub const GANTT_CELL_WIDTH: usize = 5;

const RULE: &str = "--------------------------------------------------------------------------";
const BANNER: &str = "========================================";

/// Renders the two-row Gantt chart of a timeline.
///
/// Idle gaps are not drawn; they show up as a jump between consecutive
/// start times.
///
/// # Example
///
/// ```
/// use rr_sched::models::{DispatchEvent, Timeline};
/// use rr_sched::report::gantt_chart;
///
/// let mut timeline = Timeline::new();
/// timeline.push(DispatchEvent::new("P1", 0, 2));
/// timeline.push(DispatchEvent::new("P2", 2, 3));
///
/// let chart = gantt_chart(&timeline);
/// assert_eq!(chart, "Time:     0    2    3\nProc:  P1   P2  \n");
/// ```
pub fn gantt_chart(timeline: &Timeline) -> String {
    let w = GANTT_CELL_WIDTH;
    let mut times = String::from("Time: ");
    let mut procs = String::from("Proc: ");

    for event in timeline {
        times.push_str(&format!("{:>w$}", event.start));
        procs.push_str(&format!("{:^w$}", event.process));
    }
    times.push_str(&format!("{:>w$}", timeline.last_end().unwrap_or(0)));

    format!("{times}\n{procs}\n")
}

/// Full text report of a run.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    result: &'a SimulationResult,
    metrics: RunMetrics,
}

impl<'a> Report<'a> {
    /// Builds a report, computing the run's metrics.
    pub fn new(result: &'a SimulationResult) -> Self {
        Self {
            result,
            metrics: result.metrics(),
        }
    }

    /// Metrics shown in the report.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "{}", self.result.policy.title())?;
        writeln!(f, "{BANNER}")?;
        writeln!(f)?;

        writeln!(f, "Gantt Chart:")?;
        write!(f, "{}", gantt_chart(&self.result.timeline))?;
        writeln!(f)?;

        writeln!(f, "Output")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "{:<8} | {:<12} | {:<10} | {:<15} | {:<12} | {:<12}",
            "Process", "Arrival Time", "Burst Time", "Completion Time", "Turnaround", "Waiting Time"
        )?;
        writeln!(f, "{RULE}")?;
        for p in &self.result.processes {
            writeln!(
                f,
                "{:<8} | {:<12} | {:<10} | {:<15} | {:<12} | {:<12}",
                p.name,
                p.arrival,
                p.burst,
                p.completion.unwrap_or(0),
                p.turnaround.unwrap_or(0),
                p.waiting.unwrap_or(0)
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        let m = &self.metrics;
        writeln!(f, "Performance Metrics")?;
        writeln!(f, "CPU Utilization: {:.1}%", m.cpu_utilization_percent)?;
        writeln!(f, "Average Waiting Time (AWT): {:.1}", m.avg_waiting)?;
        writeln!(f, "Average Turnaround Time (ATT): {:.1}", m.avg_turnaround)
    }
}
