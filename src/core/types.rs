/*!
 * Core Types
 * Identifiers and units shared by every simulator module
 */

/// Caller-assigned process identifier
pub type Pid = u32;

/// Simulated time, in unit ticks
pub type Ticks = u64;

/// Process priority (carried on records, unused by the shipped policies)
pub type Priority = u8;
