/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation operation result
pub type SimResult<T> = Result<T, SimulationError>;

/// Errors detected before the tick loop starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Process {0} has a zero burst")]
    #[diagnostic(
        code(process::zero_burst),
        help("Every process must require at least one tick of service.")
    )]
    ZeroBurst(Pid),

    #[error("Process id {0} appears more than once in the workload")]
    #[diagnostic(
        code(process::duplicate_pid),
        help("Process ids are caller-assigned and must be unique within one simulation.")
    )]
    DuplicatePid(Pid),

    #[error("Workload contains no processes")]
    #[diagnostic(
        code(simulation::empty_workload),
        help("Supply at least one process, or allow empty workloads in the simulation config.")
    )]
    EmptyWorkload,

    #[error("Invalid quantum: {0} ticks")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-robin quantum must be at least 1 tick.")
    )]
    InvalidQuantum(Ticks),

    #[error("Invalid horizon: max_time {0}")]
    #[diagnostic(
        code(simulation::invalid_horizon),
        help("max_time bounds the simulated ticks and must be positive.")
    )]
    InvalidHorizon(Ticks),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, round_robin, sjf, or srtf.")
    )]
    InvalidPolicy(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(simulation::invalid_config),
        help("Check the JSON document or SCHED_SIM_* environment variables.")
    )]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::InvalidConfig(err.to_string())
    }
}
