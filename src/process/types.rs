/*!
 * Process Types
 * Static description and timing outcomes of one simulated task
 */

use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Process record
///
/// The caller fills `pid`, `arrival`, `burst` (and optionally `priority` /
/// `deadline`); the engine owns every other field during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(default)]
    pub remaining: Ticks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Ticks>,

    #[serde(default)]
    pub first_dispatch: Option<Ticks>,
    #[serde(default)]
    pub completion: Option<Ticks>,
    #[serde(default)]
    pub response: Option<Ticks>,
    #[serde(default)]
    pub waiting: Option<Ticks>,
    #[serde(default)]
    pub turnaround: Option<Ticks>,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival,
            burst,
            remaining: burst,
            priority: None,
            deadline: None,
            first_dispatch: None,
            completion: None,
            response: None,
            waiting: None,
            turnaround: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_deadline(mut self, deadline: Ticks) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Clear every engine-owned field, restoring `remaining` to the full burst
    pub(crate) fn reset(&mut self) {
        self.remaining = self.burst;
        self.first_dispatch = None;
        self.completion = None;
        self.response = None;
        self.waiting = None;
        self.turnaround = None;
    }

    /// Record the first dispatch; later dispatches leave it untouched
    pub(crate) fn mark_dispatched(&mut self, now: Ticks) {
        if self.first_dispatch.is_none() {
            self.first_dispatch = Some(now);
            self.response = Some(now - self.arrival);
        }
    }

    /// Finalize completion, turnaround, and waiting
    pub(crate) fn mark_completed(&mut self, now: Ticks) {
        debug_assert_eq!(self.remaining, 0, "Process {} completed with service left", self.pid);
        debug_assert!(self.completion.is_none(), "Process {} completed twice", self.pid);

        let turnaround = now - self.arrival;
        self.completion = Some(now);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround.saturating_sub(self.burst));
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the process has been dispatched at least once
    #[inline(always)]
    #[must_use]
    pub const fn has_started(&self) -> bool {
        self.first_dispatch.is_some()
    }
}
