//! Scheduling domain models.
//!
//! Provides the entity types of a round-robin run: the processes being
//! scheduled and the dispatch timeline the scheduler produces.
//!
//! # Domain Mappings
//!
//! | rr-sched | Operating System | Gantt Chart |
//! |----------|------------------|-------------|
//! | Process | Process/Thread | Row label |
//! | DispatchEvent | Context switch-in to switch-out | Bar |
//! | Timeline | Dispatch trace | Whole chart |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{DispatchEvent, Timeline};
