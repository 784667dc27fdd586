/*!
 * Simulation Configuration
 * Policy selection, quantum, and horizon from JSON or the environment
 *
 * Environment variables:
 * - SCHED_SIM_POLICY: fcfs | round_robin | sjf | srtf (default: fcfs)
 * - SCHED_SIM_QUANTUM: round-robin quantum in ticks (default: 2)
 * - SCHED_SIM_MAX_TIME: tick horizon (default: 100)
 * - SCHED_SIM_REJECT_EMPTY: reject empty workloads (default: false)
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::Ticks;
use crate::scheduler::{Policy, PolicyKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_QUANTUM: Ticks = 2;
pub const DEFAULT_MAX_TIME: Ticks = 100;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulationConfig {
    pub policy: PolicyKind,
    /// Only read when `policy` is round-robin
    pub quantum: Ticks,
    pub max_time: Ticks,
    pub reject_empty_workload: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Fcfs,
            quantum: DEFAULT_QUANTUM,
            max_time: DEFAULT_MAX_TIME,
            reject_empty_workload: false,
        }
    }
}

impl SimulationConfig {
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = quantum;
        self
    }

    #[must_use]
    pub fn with_max_time(mut self, max_time: Ticks) -> Self {
        self.max_time = max_time;
        self
    }

    #[must_use]
    pub fn reject_empty_workload(mut self) -> Self {
        self.reject_empty_workload = true;
        self
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `SCHED_SIM_*` variables, falling back to defaults
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            policy: parse_var(&lookup, "SCHED_SIM_POLICY")?.unwrap_or(defaults.policy),
            quantum: parse_var(&lookup, "SCHED_SIM_QUANTUM")?.unwrap_or(defaults.quantum),
            max_time: parse_var(&lookup, "SCHED_SIM_MAX_TIME")?.unwrap_or(defaults.max_time),
            reject_empty_workload: lookup("SCHED_SIM_REJECT_EMPTY")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.reject_empty_workload),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.max_time == 0 {
            return Err(SimulationError::InvalidHorizon(self.max_time));
        }
        if self.policy == PolicyKind::RoundRobin && self.quantum == 0 {
            return Err(SimulationError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }

    /// Fresh policy instance for this configuration
    pub fn build_policy(&self) -> SimResult<Policy> {
        Policy::from_kind(self.policy, self.quantum)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> SimResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| SimulationError::InvalidConfig(format!("{key}={raw}: {e}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.max_time, 100);
    }

    #[test]
    fn test_from_env_vars() {
        let config = SimulationConfig::from_lookup(env(&[
            ("SCHED_SIM_POLICY", "rr"),
            ("SCHED_SIM_QUANTUM", "3"),
            ("SCHED_SIM_MAX_TIME", "40"),
            ("SCHED_SIM_REJECT_EMPTY", "true"),
        ]))
        .unwrap();
        assert_eq!(config.policy, PolicyKind::RoundRobin);
        assert_eq!(config.quantum, 3);
        assert_eq!(config.max_time, 40);
        assert!(config.reject_empty_workload);
        assert_eq!(config.build_policy().unwrap().quantum().map(|q| q.ticks()), Some(3));
    }

    #[test]
    fn test_bad_env_values() {
        assert!(matches!(
            SimulationConfig::from_lookup(env(&[("SCHED_SIM_MAX_TIME", "soon")])),
            Err(SimulationError::InvalidConfig(_))
        ));
        assert_eq!(
            SimulationConfig::from_lookup(env(&[("SCHED_SIM_POLICY", "edf")])),
            Err(SimulationError::InvalidConfig(
                "SCHED_SIM_POLICY=edf: Invalid scheduling policy: edf".to_string()
            ))
        );
    }

    #[test]
    fn test_from_json() {
        let config = SimulationConfig::from_json(r#"{"policy":"srtf","max_time":20}"#).unwrap();
        assert_eq!(config.policy, PolicyKind::Srtf);
        assert_eq!(config.quantum, DEFAULT_QUANTUM);
        assert_eq!(config.max_time, 20);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            SimulationConfig::default().with_max_time(0).validate(),
            Err(SimulationError::InvalidHorizon(0))
        );
        assert_eq!(
            SimulationConfig::new(PolicyKind::RoundRobin)
                .with_quantum(0)
                .validate(),
            Err(SimulationError::InvalidQuantum(0))
        );
        // Quantum is ignored outside round-robin
        assert!(SimulationConfig::new(PolicyKind::Sjf)
            .with_quantum(0)
            .validate()
            .is_ok());
        assert_eq!(
            SimulationConfig::from_json(r#"{"policy":"rr","quantum":0}"#),
            Err(SimulationError::InvalidQuantum(0))
        );
    }
}
