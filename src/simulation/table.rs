/*!
 * Process Table
 * Engine-owned canonical process state, exposed read-only to policies
 */

use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use crate::scheduler::{Policy, ServiceLookup};
use ahash::AHashMap;

/// Processes in arrival order with an O(1) pid index
#[derive(Debug)]
pub(crate) struct ProcessTable {
    processes: Vec<Process>,
    index: AHashMap<Pid, usize>,
    // Next not-yet-admitted position in `processes`
    next_arrival: usize,
}

impl ProcessTable {
    /// Reset every record and order by arrival; equal arrivals keep input order
    pub fn new(mut processes: Vec<Process>) -> Self {
        for process in &mut processes {
            process.reset();
        }
        processes.sort_by_key(|p| p.arrival);

        let index = processes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.pid, i))
            .collect();

        Self {
            processes,
            index,
            next_arrival: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Admit every process with `arrival <= now` not yet admitted
    pub fn admit_arrivals(&mut self, now: Ticks, policy: &mut Policy) -> usize {
        let start = self.next_arrival;
        while let Some(process) = self.processes.get(self.next_arrival) {
            if process.arrival > now {
                break;
            }
            policy.admit(process.pid);
            self.next_arrival += 1;
        }
        self.next_arrival - start
    }

    /// Record for `pid`; the engine only holds pids it took from this table
    pub fn process(&self, pid: Pid) -> &Process {
        &self.processes[self.index[&pid]]
    }

    pub fn process_mut(&mut self, pid: Pid) -> &mut Process {
        let i = self.index[&pid];
        &mut self.processes[i]
    }

    /// Charge one tick of service to `pid`, returning what remains
    pub fn charge(&mut self, pid: Pid) -> Ticks {
        let process = self.process_mut(pid);
        debug_assert!(process.remaining > 0, "Process {pid} charged after completion");
        process.remaining -= 1;
        process.remaining
    }

    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}

impl ServiceLookup for ProcessTable {
    fn burst(&self, pid: Pid) -> Option<Ticks> {
        self.index.get(&pid).map(|&i| self.processes[i].burst)
    }

    fn remaining(&self, pid: Pid) -> Option<Ticks> {
        self.index.get(&pid).map(|&i| self.processes[i].remaining)
    }
}
