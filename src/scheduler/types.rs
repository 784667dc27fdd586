/*!
 * Scheduler Types
 * Policy names, quantum configuration, and the service-time accessor
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Name of a scheduling policy, independent of its runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    /// First-come first-served, non-preemptive
    #[default]
    Fcfs,
    /// Round-robin with a fixed quantum
    RoundRobin,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest remaining time first, preemptive
    Srtf,
}

impl PolicyKind {
    /// Convert to string representation
    ///
    /// # Performance
    /// Hot path - called for every log field and serialized result
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::RoundRobin => "round_robin",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
        }
    }

    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::Srtf)
    }
}

impl FromStr for PolicyKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "sjf" => Ok(Self::Sjf),
            "srtf" | "srt" => Ok(Self::Srtf),
            _ => Err(SimulationError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PolicyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum, in ticks (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(Ticks);

impl Quantum {
    /// Create new time quantum
    pub fn new(ticks: Ticks) -> SimResult<Self> {
        if ticks == 0 {
            return Err(SimulationError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    /// Get ticks
    ///
    /// # Performance
    /// Hot path - checked against the slice after every round-robin tick
    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Read-only view of the engine's canonical service times
///
/// Policies consult it at selection time instead of keeping their own copy.
pub trait ServiceLookup {
    /// Total service demand of `pid`
    fn burst(&self, pid: Pid) -> Option<Ticks>;

    /// Service demand still outstanding for `pid`
    fn remaining(&self, pid: Pid) -> Option<Ticks>;
}
