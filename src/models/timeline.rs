//! Dispatch timeline (Gantt log).
//!
//! Records which process held the CPU over which interval, in the order
//! the scheduler dispatched them. Entries are append-only.

use serde::{Deserialize, Serialize};

/// One dispatch: `process` ran over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    /// Name of the dispatched process.
    pub process: String,
    /// Dispatch start time.
    pub start: i64,
    /// Dispatch end time (exclusive).
    pub end: i64,
}

impl DispatchEvent {
    /// Creates a new dispatch event.
    pub fn new(process: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process: process.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered dispatch log of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    events: Vec<DispatchEvent>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch event.
    ///
    /// Events must be pushed in time order and never overlap.
    pub fn push(&mut self, event: DispatchEvent) {
        debug_assert!(event.end > event.start, "empty dispatch {event:?}");
        debug_assert!(
            self.events.last().map_or(true, |last| last.end <= event.start),
            "dispatch {event:?} overlaps the previous one"
        );
        self.events.push(event);
    }

    /// All events in dispatch order.
    pub fn events(&self) -> &[DispatchEvent] {
        &self.events
    }

    /// Number of dispatch events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over events in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, DispatchEvent> {
        self.events.iter()
    }

    /// Start of the first dispatch.
    pub fn first_start(&self) -> Option<i64> {
        self.events.first().map(|e| e.start)
    }

    /// End of the last dispatch.
    pub fn last_end(&self) -> Option<i64> {
        self.events.last().map(|e| e.end)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.events.iter().map(DispatchEvent::duration).sum()
    }

    /// Total CPU time given to processes named `name`.
    pub fn service_for(&self, name: &str) -> i64 {
        self.events_for(name).map(DispatchEvent::duration).sum()
    }

    /// Events of processes named `name`, in dispatch order.
    pub fn events_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DispatchEvent> {
        self.events.iter().filter(move |e| e.process == name)
    }

    /// Idle intervals `(from, to)` between consecutive dispatches.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        self.events
            .windows(2)
            .filter(|pair| pair[1].start > pair[0].end)
            .map(|pair| (pair[0].end, pair[1].start))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a DispatchEvent;
    type IntoIter = std::slice::Iter<'a, DispatchEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
