/*!
 * Simulation Module
 * Entry points that validate a workload and drive the tick loop
 */

pub mod config;
mod engine;
pub mod event;
pub mod metrics;
pub mod result;
mod table;

pub use config::SimulationConfig;
pub use event::{Event, EventKind, RunInterval};
pub use metrics::Metrics;
pub use result::SimulationResult;

use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::Ticks;
use crate::monitoring::span_simulation;
use crate::process::{validate_workload, Process};
use crate::scheduler::Policy;
use engine::Engine;
use tracing::warn;

/// Simulate `processes` under `policy` for at most `max_time` ticks
///
/// Processes need not be sorted. Any ids already admitted to `policy` are
/// discarded; only its variant and quantum are used.
pub fn simulate(
    processes: Vec<Process>,
    policy: Policy,
    max_time: Ticks,
) -> SimResult<SimulationResult> {
    Simulator::new(policy).with_max_time(max_time).run(processes)
}

/// Reusable simulation setup: one policy template, horizon, and workload rules
#[derive(Debug, Clone)]
pub struct Simulator {
    policy: Policy,
    max_time: Ticks,
    reject_empty: bool,
}

impl Simulator {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            max_time: config::DEFAULT_MAX_TIME,
            reject_empty: false,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            policy: config.build_policy()?,
            max_time: config.max_time,
            reject_empty: config.reject_empty_workload,
        })
    }

    #[must_use]
    pub fn with_max_time(mut self, max_time: Ticks) -> Self {
        self.max_time = max_time;
        self
    }

    /// Return `EmptyWorkload` instead of a zero-valued result
    #[must_use]
    pub fn reject_empty_workload(mut self) -> Self {
        self.reject_empty = true;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn max_time(&self) -> Ticks {
        self.max_time
    }

    pub fn run(&self, processes: Vec<Process>) -> SimResult<SimulationResult> {
        if self.max_time == 0 {
            return Err(SimulationError::InvalidHorizon(self.max_time));
        }
        validate_workload(&processes, self.reject_empty)?;

        let span = span_simulation(self.policy.kind().as_str(), processes.len(), self.max_time);
        let _guard = span.enter();

        if processes.is_empty() {
            warn!(policy = %self.policy.kind(), "Simulating an empty workload");
            return Ok(SimulationResult::empty(self.policy.kind()));
        }

        Ok(Engine::new(processes, self.policy.cleared(), self.max_time).run())
    }
}
