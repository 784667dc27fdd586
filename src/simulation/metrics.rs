/*!
 * Aggregate Metrics
 * Averages, utilization, and throughput derived once per simulation
 */

use crate::core::types::Ticks;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Aggregate performance metrics
///
/// Averages and throughput cover completed processes only; unfinished
/// processes are counted in `incomplete` and contribute nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Busy ticks over total ticks, as a percentage in `[0, 100]`
    pub cpu_utilization: f64,
    /// Completed processes per simulated tick
    pub throughput: f64,
    pub completed: usize,
    pub incomplete: usize,
}

impl Metrics {
    pub fn compute<'a, I>(processes: I, total_ticks: Ticks, busy_ticks: Ticks) -> Self
    where
        I: IntoIterator<Item = &'a Process>,
    {
        let mut completed = 0usize;
        let mut incomplete = 0usize;
        let (mut waiting, mut turnaround, mut response) = (0u64, 0u64, 0u64);

        for process in processes {
            match (process.waiting, process.turnaround, process.response) {
                (Some(w), Some(t), Some(r)) => {
                    completed += 1;
                    waiting += w;
                    turnaround += t;
                    response += r;
                }
                _ => incomplete += 1,
            }
        }

        let mean = |sum: u64| {
            if completed == 0 {
                0.0
            } else {
                sum as f64 / completed as f64
            }
        };
        let per_tick = |value: f64| {
            if total_ticks == 0 {
                0.0
            } else {
                value / total_ticks as f64
            }
        };

        Self {
            avg_waiting: mean(waiting),
            avg_turnaround: mean(turnaround),
            avg_response: mean(response),
            cpu_utilization: per_tick(busy_ticks as f64) * 100.0,
            throughput: per_tick(completed as f64),
            completed,
            incomplete,
        }
    }
}
