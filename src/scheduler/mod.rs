/*!
 * Scheduling Policies
 * Closed set of dispatch strategies driven by the simulation engine
 */

mod operations;
mod queue;
pub mod types;

pub use queue::{FifoQueue, ReadySet};
pub use types::{PolicyKind, Quantum, ServiceLookup};

use crate::core::errors::SimResult;
use crate::core::types::Ticks;
use log::info;

/// Scheduling policy with its ready structure
///
/// The engine drives every variant through the same admit/peek/take
/// operations and matches on the variant only for quantum expiry
/// (`RoundRobin`) and per-tick preemption (`Srtf`).
#[derive(Debug, Clone)]
pub enum Policy {
    Fcfs(FifoQueue),
    RoundRobin { queue: FifoQueue, quantum: Quantum },
    Sjf(ReadySet),
    Srtf(ReadySet),
}

impl Policy {
    pub fn fcfs() -> Self {
        Self::Fcfs(FifoQueue::new())
    }

    pub fn round_robin(quantum: Quantum) -> Self {
        Self::RoundRobin {
            queue: FifoQueue::new(),
            quantum,
        }
    }

    pub fn sjf() -> Self {
        Self::Sjf(ReadySet::new())
    }

    pub fn srtf() -> Self {
        Self::Srtf(ReadySet::new())
    }

    /// Build an empty policy from its name; `quantum` only matters for round-robin
    pub fn from_kind(kind: PolicyKind, quantum: Ticks) -> SimResult<Self> {
        let policy = match kind {
            PolicyKind::Fcfs => Self::fcfs(),
            PolicyKind::RoundRobin => Self::round_robin(Quantum::new(quantum)?),
            PolicyKind::Sjf => Self::sjf(),
            PolicyKind::Srtf => Self::srtf(),
        };
        info!("Scheduling policy initialized: {:?}", policy.kind());
        Ok(policy)
    }

    /// Parse a policy name (e.g. "rr") and build it
    pub fn parse(name: &str, quantum: Ticks) -> SimResult<Self> {
        let kind: PolicyKind = name.parse()?;
        Self::from_kind(kind, quantum)
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs(_) => PolicyKind::Fcfs,
            Self::RoundRobin { .. } => PolicyKind::RoundRobin,
            Self::Sjf(_) => PolicyKind::Sjf,
            Self::Srtf(_) => PolicyKind::Srtf,
        }
    }

    /// Round-robin quantum; `None` for every other variant
    pub fn quantum(&self) -> Option<Quantum> {
        match self {
            Self::RoundRobin { quantum, .. } => Some(*quantum),
            _ => None,
        }
    }

    pub fn is_preemptive(&self) -> bool {
        self.kind().is_preemptive()
    }

    /// Same policy with an empty ready structure
    pub(crate) fn cleared(&self) -> Self {
        match self {
            Self::Fcfs(_) => Self::fcfs(),
            Self::RoundRobin { quantum, .. } => Self::round_robin(*quantum),
            Self::Sjf(_) => Self::sjf(),
            Self::Srtf(_) => Self::srtf(),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::fcfs()
    }
}
