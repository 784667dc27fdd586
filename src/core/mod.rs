/*!
 * Core Module
 * Shared identifiers and error types for the simulator
 */

pub mod errors;
pub mod types;

pub use errors::{SimResult, SimulationError};
pub use types::{Pid, Priority, Ticks};
