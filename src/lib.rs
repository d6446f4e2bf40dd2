//! Round-Robin CPU scheduling simulator.
//!
//! Simulates round-robin dispatching of a known process set under a fixed
//! time quantum, producing a dispatch timeline (Gantt log), per-process
//! completion/turnaround/waiting statistics and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `DispatchEvent`, `Timeline`
//! - **`scheduler`**: The discrete-event engine (`RoundRobin`), run-length
//!   policies and `RunMetrics`
//! - **`validation`**: Input checks (negative arrivals, non-positive bursts
//!   and quanta, empty sets)
//! - **`workload`**: JSON workload documents and seeded generators
//! - **`report`**: Gantt chart and results table rendering
//!
//! # Example
//!
//! ```
//! use rr_sched::models::Process;
//! use rr_sched::scheduler::{simulate, Policy};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 1),
//! ];
//! let result = simulate(&processes, 2, Policy::Strict);
//!
//! assert_eq!(result.completion_of("P3"), Some(5));
//! assert_eq!(result.completion_of("P1"), Some(9));
//! assert!((result.metrics().cpu_utilization_percent - 100.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
