/*!
 * Simulation Engine
 * Tick-driven dispatch loop over a single logical processor
 */

use super::event::{Event, EventKind, RunInterval};
use super::result::SimulationResult;
use super::table::ProcessTable;
use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use crate::scheduler::Policy;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Process currently occupying the processor
#[derive(Debug, Clone, Copy)]
struct Running {
    pid: Pid,
    // Tick the current run interval opened
    since: Ticks,
    // Ticks executed since this dispatch
    slice_used: Ticks,
}

/// State of one simulation call
pub(crate) struct Engine {
    table: ProcessTable,
    policy: Policy,
    max_time: Ticks,
    now: Ticks,
    running: Option<Running>,
    finished: usize,
    busy_ticks: Ticks,
    context_switches: u64,
    events: Vec<Event>,
    intervals: BTreeMap<Pid, Vec<RunInterval>>,
}

impl Engine {
    /// `policy` must be empty; `processes` must already be validated
    pub fn new(processes: Vec<Process>, policy: Policy, max_time: Ticks) -> Self {
        debug_assert!(policy.is_empty(), "Engine requires an empty policy");
        let intervals = processes.iter().map(|p| (p.pid, Vec::new())).collect();

        Self {
            table: ProcessTable::new(processes),
            policy,
            max_time,
            now: 0,
            running: None,
            finished: 0,
            busy_ticks: 0,
            context_switches: 0,
            events: Vec::new(),
            intervals,
        }
    }

    pub fn run(mut self) -> SimulationResult {
        let total = self.table.len();
        info!(
            policy = %self.policy.kind(),
            processes = total,
            max_time = self.max_time,
            "Simulation starting"
        );

        while self.now < self.max_time && self.finished < total {
            self.admit_arrivals();

            if matches!(self.policy, Policy::Srtf(_)) {
                self.check_preemption();
            }

            if self.running.is_none() {
                if let Some(pid) = self.policy.select(&self.table) {
                    self.dispatch(pid);
                }
            }

            match self.running {
                Some(running) => self.execute(running),
                None => self.now += 1,
            }
        }

        self.finish()
    }

    fn admit_arrivals(&mut self) {
        let admitted = self.table.admit_arrivals(self.now, &mut self.policy);
        if admitted > 0 {
            debug!(tick = self.now, admitted, "Processes arrived");
        }
    }

    /// Shortest-remaining-time preemption, evaluated at the start of every tick
    fn check_preemption(&mut self) {
        let Some(current) = self.running else {
            return;
        };
        let Some(candidate) = self.policy.peek_best(&self.table) else {
            return;
        };

        let candidate_remaining = self.table.process(candidate).remaining;
        let current_remaining = self.table.process(current.pid).remaining;
        if candidate_remaining < current_remaining {
            self.policy.take_selected(candidate);
            self.preempt(current);
            self.dispatch(candidate);
        }
    }

    fn dispatch(&mut self, pid: Pid) {
        self.table.process_mut(pid).mark_dispatched(self.now);
        self.emit(pid, EventKind::Dispatch);
        self.running = Some(Running {
            pid,
            since: self.now,
            slice_used: 0,
        });
    }

    /// Run `running` for one tick, then handle completion or quantum expiry
    fn execute(&mut self, mut running: Running) {
        let remaining = self.table.charge(running.pid);
        self.busy_ticks += 1;
        running.slice_used += 1;
        self.running = Some(running);
        self.now += 1;

        // A process arriving exactly at the new tick queues ahead of a requeued one
        self.admit_arrivals();

        if remaining == 0 {
            self.complete(running);
            return;
        }

        if let Policy::RoundRobin { quantum, .. } = self.policy {
            if running.slice_used >= quantum.ticks() {
                self.preempt(running);
            }
        }
    }

    fn complete(&mut self, running: Running) {
        self.close_interval(running);
        self.table.process_mut(running.pid).mark_completed(self.now);
        self.emit(running.pid, EventKind::Complete);
        self.running = None;
        self.finished += 1;
    }

    /// Evict `running` and return it to the back of the ready structure
    fn preempt(&mut self, running: Running) {
        self.close_interval(running);
        self.emit(running.pid, EventKind::Preempt);
        self.policy.admit(running.pid);
        self.running = None;
        self.context_switches += 1;
    }

    fn close_interval(&mut self, running: Running) {
        debug_assert!(running.since < self.now, "Empty run interval for {}", running.pid);
        self.intervals
            .entry(running.pid)
            .or_default()
            .push(RunInterval::new(running.since, self.now));
    }

    fn emit(&mut self, pid: Pid, kind: EventKind) {
        let event = Event::new(self.now, pid, kind);
        debug!(tick = event.tick, pid, kind = %kind, "Scheduling event");
        self.events.push(event);
    }

    fn finish(mut self) -> SimulationResult {
        // Keep the partial run of a process cut off by the horizon
        if let Some(running) = self.running.take() {
            self.close_interval(running);
        }

        let policy = self.policy.kind();
        let unfinished = self.table.len() - self.finished;
        if unfinished > 0 {
            warn!(
                max_time = self.max_time,
                unfinished, "Horizon reached before every process completed"
            );
        }

        let result = SimulationResult::new(
            policy,
            self.events,
            self.table.into_processes(),
            self.intervals,
            self.now,
            self.busy_ticks,
            self.context_switches,
        );

        let metrics = result.metrics();
        info!(
            policy = %policy,
            total_ticks = result.total_ticks(),
            busy_ticks = result.busy_ticks(),
            context_switches = result.context_switches(),
            completed = metrics.completed,
            avg_waiting = metrics.avg_waiting,
            avg_turnaround = metrics.avg_turnaround,
            cpu_utilization = metrics.cpu_utilization,
            "Simulation finished"
        );

        result
    }
}
