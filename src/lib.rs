/*!
 * CPU Scheduling Simulator
 * Deterministic tick-level simulation of single-processor dispatch policies
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::{Pid, Priority, SimResult, SimulationError, Ticks};
pub use monitoring::init_tracing;
pub use process::{parse_workload, validate_workload, Process};
pub use scheduler::{FifoQueue, Policy, PolicyKind, Quantum, ReadySet, ServiceLookup};
pub use simulation::{
    simulate, Event, EventKind, Metrics, RunInterval, SimulationConfig, SimulationResult,
    Simulator,
};
