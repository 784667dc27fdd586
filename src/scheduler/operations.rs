/*!
 * Policy Operations
 * Admit, peek, take, and select operations over every policy variant
 */

use super::types::ServiceLookup;
use super::Policy;
use crate::core::types::Pid;
use log::trace;

impl Policy {
    /// Add a newly arrived or preempted process to the ready structure
    ///
    /// A pid must not be admitted while it is already ready.
    pub fn admit(&mut self, pid: Pid) {
        match self {
            Self::Fcfs(queue) | Self::RoundRobin { queue, .. } => queue.push_back(pid),
            Self::Sjf(set) | Self::Srtf(set) => set.insert(pid),
        }
        trace!("Process {} admitted ({})", pid, self.kind());
    }

    /// Best candidate under this policy, without removing it
    pub fn peek_best<L>(&self, lookup: &L) -> Option<Pid>
    where
        L: ServiceLookup + ?Sized,
    {
        match self {
            Self::Fcfs(queue) | Self::RoundRobin { queue, .. } => queue.front(),
            Self::Sjf(set) => set.min_by(|pid| lookup.burst(pid)),
            Self::Srtf(set) => set.min_by(|pid| lookup.remaining(pid)),
        }
    }

    /// Remove exactly `pid` from the ready structure
    pub fn take_selected(&mut self, pid: Pid) -> bool {
        let taken = match self {
            Self::Fcfs(queue) | Self::RoundRobin { queue, .. } => queue.remove(pid),
            Self::Sjf(set) | Self::Srtf(set) => set.remove(pid),
        };
        if taken {
            trace!("Process {} selected ({})", pid, self.kind());
        }
        taken
    }

    /// Choose and remove the next process to run
    pub fn select<L>(&mut self, lookup: &L) -> Option<Pid>
    where
        L: ServiceLookup + ?Sized,
    {
        let pid = self.peek_best(lookup)?;
        self.take_selected(pid);
        Some(pid)
    }

    /// Number of ready processes
    pub fn len(&self) -> usize {
        match self {
            Self::Fcfs(queue) | Self::RoundRobin { queue, .. } => queue.len(),
            Self::Sjf(set) | Self::Srtf(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ready pids in structure order (queue order, or admission order for sets)
    pub fn ready(&self) -> Vec<Pid> {
        match self {
            Self::Fcfs(queue) | Self::RoundRobin { queue, .. } => queue.iter().collect(),
            Self::Sjf(set) | Self::Srtf(set) => set.iter().collect(),
        }
    }
}
