/*!
 * Simulation Events
 * Event log entries and per-process run intervals
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of scheduling observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Process began occupying the processor
    Dispatch,
    /// Process was forced off the processor before completing
    Preempt,
    /// Process finished its burst
    Complete,
}

impl EventKind {
    /// Convert to string representation
    ///
    /// # Performance
    /// Hot path - formatted into every debug event and log line
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dispatch => "dispatch",
            Self::Preempt => "preempt",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (tick, pid, kind) observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub tick: Ticks,
    pub pid: Pid,
    pub kind: EventKind,
}

impl Event {
    #[inline]
    pub const fn new(tick: Ticks, pid: Pid, kind: EventKind) -> Self {
        Self { tick, pid, kind }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={} pid={} {}", self.tick, self.pid, self.kind)
    }
}

/// Half-open tick range `[start, end)` of uninterrupted execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInterval {
    pub start: Ticks,
    pub end: Ticks,
}

impl RunInterval {
    #[inline]
    pub const fn new(start: Ticks, end: Ticks) -> Self {
        Self { start, end }
    }

    /// Number of ticks executed in this interval
    ///
    /// # Performance
    /// Summed per process when checking service totals
    #[inline(always)]
    pub const fn len(&self) -> Ticks {
        self.end - self.start
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub const fn contains(&self, tick: Ticks) -> bool {
        self.start <= tick && tick < self.end
    }
}
