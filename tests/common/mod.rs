/*!
 * Shared test fixtures
 */

#![allow(dead_code)]

use cpu_sched_sim::{Pid, Process, SimulationResult, Ticks};

/// Four-process demonstration workload with staggered arrivals
pub fn demo_workload() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5),
        Process::new(2, 2, 3),
        Process::new(3, 4, 8),
        Process::new(4, 6, 2),
    ]
}

pub fn spans(result: &SimulationResult, pid: Pid) -> Vec<(Ticks, Ticks)> {
    result
        .intervals_for(pid)
        .iter()
        .map(|iv| (iv.start, iv.end))
        .collect()
}

pub fn log(result: &SimulationResult) -> Vec<String> {
    result.events().iter().map(|e| e.to_string()).collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
