//! Round-robin scheduling engine and run metrics.
//!
//! One execution loop ([`RoundRobin`]) is parameterized by a pluggable
//! run-length rule ([`SliceRule`]). The named [`Policy`] values select the
//! built-in rules.
//!
//! # KPI
//!
//! [`RunMetrics`] reduces a finished run to average waiting time, average
//! turnaround time and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4.3

mod kpi;
mod policy;
mod round_robin;

pub use kpi::RunMetrics;
pub use policy::{Policy, SliceRule, Strict, Threshold, UnknownPolicy};
pub use round_robin::{simulate, RoundRobin, SimulationConfig, SimulationResult};
