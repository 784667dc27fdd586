/*!
 * Simulation Result
 * Immutable output of one simulation call
 */

use super::event::{Event, EventKind, RunInterval};
use super::metrics::Metrics;
use crate::core::errors::SimResult;
use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use crate::scheduler::PolicyKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event log, finalized records, run intervals, and aggregate metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    policy: PolicyKind,
    events: Vec<Event>,
    tasks: BTreeMap<Pid, Process>,
    run_intervals: BTreeMap<Pid, Vec<RunInterval>>,
    total_ticks: Ticks,
    busy_ticks: Ticks,
    context_switches: u64,
    incomplete: Vec<Pid>,
    metrics: Metrics,
}

impl SimulationResult {
    pub(crate) fn new(
        policy: PolicyKind,
        events: Vec<Event>,
        processes: Vec<Process>,
        run_intervals: BTreeMap<Pid, Vec<RunInterval>>,
        total_ticks: Ticks,
        busy_ticks: Ticks,
        context_switches: u64,
    ) -> Self {
        let metrics = Metrics::compute(&processes, total_ticks, busy_ticks);
        let mut incomplete: Vec<Pid> = processes
            .iter()
            .filter(|p| !p.is_complete())
            .map(|p| p.pid)
            .collect();
        incomplete.sort_unstable();

        Self {
            policy,
            events,
            tasks: processes.into_iter().map(|p| (p.pid, p)).collect(),
            run_intervals,
            total_ticks,
            busy_ticks,
            context_switches,
            incomplete,
            metrics,
        }
    }

    /// Zero-valued result for an empty workload
    pub(crate) fn empty(policy: PolicyKind) -> Self {
        Self::new(policy, Vec::new(), Vec::new(), BTreeMap::new(), 0, 0, 0)
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Events in emission order (non-decreasing tick)
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of one kind, in emission order
    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Finalized records keyed by pid
    pub fn tasks(&self) -> &BTreeMap<Pid, Process> {
        &self.tasks
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.tasks.get(&pid)
    }

    /// Run intervals keyed by pid; never-dispatched processes map to an empty list
    pub fn run_intervals(&self) -> &BTreeMap<Pid, Vec<RunInterval>> {
        &self.run_intervals
    }

    pub fn intervals_for(&self, pid: Pid) -> &[RunInterval] {
        self.run_intervals
            .get(&pid)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_ticks(&self) -> Ticks {
        self.total_ticks
    }

    pub fn busy_ticks(&self) -> Ticks {
        self.busy_ticks
    }

    /// Ticks with nothing running; 0 for inconsistent deserialized counts
    pub fn idle_ticks(&self) -> Ticks {
        self.total_ticks.saturating_sub(self.busy_ticks)
    }

    pub fn context_switches(&self) -> u64 {
        self.context_switches
    }

    /// Pids that did not complete within the horizon, ascending
    pub fn incomplete(&self) -> &[Pid] {
        &self.incomplete
    }

    /// Whether every process completed
    pub fn is_complete(&self) -> bool {
        self.incomplete.is_empty()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn avg_waiting(&self) -> f64 {
        self.metrics.avg_waiting
    }

    pub fn avg_turnaround(&self) -> f64 {
        self.metrics.avg_turnaround
    }

    pub fn avg_response(&self) -> f64 {
        self.metrics.avg_response
    }

    pub fn cpu_utilization(&self) -> f64 {
        self.metrics.cpu_utilization
    }

    pub fn throughput(&self) -> f64 {
        self.metrics.throughput
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
