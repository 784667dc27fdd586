/*!
 * Scenario Tests
 * End-to-end simulations with hand-checked timelines
 */

mod common;

use common::{approx, demo_workload, log, spans};
use cpu_sched_sim::{
    simulate, EventKind, Policy, Process, Quantum, SimulationConfig, SimulationError, Simulator,
};
use pretty_assertions::assert_eq;

#[test]
fn test_single_process_fcfs() {
    let result = simulate(vec![Process::new(1, 0, 4)], Policy::fcfs(), 50).unwrap();

    assert_eq!(log(&result), vec!["t=0 pid=1 dispatch", "t=4 pid=1 complete"]);
    assert_eq!(result.total_ticks(), 4);
    assert_eq!(result.busy_ticks(), 4);

    let p = result.process(1).unwrap();
    assert_eq!(p.waiting, Some(0));
    assert_eq!(p.turnaround, Some(4));
    assert_eq!(p.response, Some(0));
    assert_eq!(result.cpu_utilization(), 100.0);
    assert_eq!(result.throughput(), 0.25);
}

#[test]
fn test_fcfs_idle_gap() {
    let result = simulate(
        vec![Process::new(2, 5, 2), Process::new(1, 0, 3)],
        Policy::fcfs(),
        50,
    )
    .unwrap();

    assert_eq!(spans(&result, 1), vec![(0, 3)]);
    assert_eq!(spans(&result, 2), vec![(5, 7)]);
    assert_eq!(result.total_ticks(), 7);
    assert_eq!(result.busy_ticks(), 5);
    assert_eq!(result.idle_ticks(), 2);
    assert!(approx(result.cpu_utilization(), 500.0 / 7.0));
}

#[test]
fn test_round_robin_quantum_two() {
    let policy = Policy::round_robin(Quantum::new(2).unwrap());
    let result = simulate(
        vec![Process::new(1, 0, 4), Process::new(2, 1, 4)],
        policy,
        50,
    )
    .unwrap();

    assert_eq!(spans(&result, 1), vec![(0, 2), (4, 6)]);
    assert_eq!(spans(&result, 2), vec![(2, 4), (6, 8)]);

    let p1 = result.process(1).unwrap();
    let p2 = result.process(2).unwrap();
    assert_eq!(p1.completion, Some(6));
    assert_eq!(p2.completion, Some(8));
    assert_eq!(p1.waiting, Some(2));
    assert_eq!(p2.waiting, Some(3));
    assert_eq!(p1.response, Some(0));
    assert_eq!(p2.response, Some(1));

    assert_eq!(result.context_switches(), 2);
    assert_eq!(result.total_ticks(), 8);
    assert_eq!(result.cpu_utilization(), 100.0);
    assert_eq!(
        log(&result),
        vec![
            "t=0 pid=1 dispatch",
            "t=2 pid=1 preempt",
            "t=2 pid=2 dispatch",
            "t=4 pid=2 preempt",
            "t=4 pid=1 dispatch",
            "t=6 pid=1 complete",
            "t=6 pid=2 dispatch",
            "t=8 pid=2 complete",
        ]
    );
}

#[test]
fn test_empty_workload() {
    let result = simulate(Vec::new(), Policy::srtf(), 10).unwrap();

    assert_eq!(result.total_ticks(), 0);
    assert_eq!(result.busy_ticks(), 0);
    assert_eq!(result.context_switches(), 0);
    assert_eq!(result.avg_waiting(), 0.0);
    assert_eq!(result.avg_turnaround(), 0.0);
    assert_eq!(result.avg_response(), 0.0);
    assert_eq!(result.cpu_utilization(), 0.0);
    assert_eq!(result.throughput(), 0.0);
    assert!(result.tasks().is_empty());
}

#[test]
fn test_empty_workload_strict() {
    let sim = Simulator::new(Policy::fcfs()).reject_empty_workload();
    assert_eq!(sim.run(Vec::new()), Err(SimulationError::EmptyWorkload));
}

#[test]
fn test_horizon_too_short() {
    let result = simulate(vec![Process::new(1, 0, 10)], Policy::fcfs(), 5).unwrap();

    assert!(!result.is_complete());
    assert_eq!(result.incomplete(), &[1]);
    assert_eq!(result.busy_ticks(), 5);
    assert_eq!(result.total_ticks(), 5);

    let p = result.process(1).unwrap();
    assert_eq!(p.remaining, 5);
    assert_eq!(p.completion, None);
    assert_eq!(p.waiting, None);
    assert_eq!(p.turnaround, None);
    assert_eq!(p.first_dispatch, Some(0));

    let metrics = result.metrics();
    assert_eq!(metrics.completed, 0);
    assert_eq!(metrics.incomplete, 1);
    assert_eq!(metrics.avg_waiting, 0.0);
    assert_eq!(metrics.throughput, 0.0);
    assert_eq!(metrics.cpu_utilization, 100.0);
    // The partial run is closed at the horizon without a complete event
    assert_eq!(spans(&result, 1), vec![(0, 5)]);
    assert_eq!(log(&result), vec!["t=0 pid=1 dispatch"]);
}

#[test]
fn test_horizon_excludes_incomplete_from_averages() {
    let result = simulate(
        vec![Process::new(1, 0, 2), Process::new(2, 0, 10), Process::new(3, 20, 1)],
        Policy::fcfs(),
        6,
    )
    .unwrap();

    assert_eq!(result.incomplete(), &[2, 3]);
    assert_eq!(result.metrics().completed, 1);
    assert_eq!(result.avg_turnaround(), 2.0);
    assert_eq!(result.avg_waiting(), 0.0);
    assert!(approx(result.throughput(), 1.0 / 6.0));
    assert_eq!(spans(&result, 2), vec![(2, 6)]);
    // Never-arrived process keeps an empty lane
    assert!(result.intervals_for(3).is_empty());
    assert!(result.run_intervals().contains_key(&3));
}

#[test]
fn test_invalid_processes_rejected() {
    assert_eq!(
        simulate(vec![Process::new(1, 0, 0)], Policy::fcfs(), 10),
        Err(SimulationError::ZeroBurst(1))
    );
    assert_eq!(
        simulate(
            vec![Process::new(1, 0, 2), Process::new(1, 3, 2)],
            Policy::sjf(),
            10
        ),
        Err(SimulationError::DuplicatePid(1))
    );
}

#[test]
fn test_demo_workload_fcfs() {
    let result = simulate(demo_workload(), Policy::fcfs(), 200).unwrap();

    assert_eq!(spans(&result, 1), vec![(0, 5)]);
    assert_eq!(spans(&result, 2), vec![(5, 8)]);
    assert_eq!(spans(&result, 3), vec![(8, 16)]);
    assert_eq!(spans(&result, 4), vec![(16, 18)]);
    // Waiting: 0 + 3 + 4 + 10
    assert_eq!(result.avg_waiting(), 4.25);
    assert_eq!(result.context_switches(), 0);
}

#[test]
fn test_demo_workload_sjf() {
    let result = simulate(demo_workload(), Policy::sjf(), 200).unwrap();

    // At tick 5 pid 2 (burst 3) beats pid 3 (burst 8); at 8 pid 4 (burst 2) beats pid 3
    assert_eq!(spans(&result, 1), vec![(0, 5)]);
    assert_eq!(spans(&result, 2), vec![(5, 8)]);
    assert_eq!(spans(&result, 4), vec![(8, 10)]);
    assert_eq!(spans(&result, 3), vec![(10, 18)]);
    assert_eq!(result.context_switches(), 0);
}

#[test]
fn test_demo_workload_srtf() {
    let result = simulate(demo_workload(), Policy::srtf(), 200).unwrap();

    // pid 1 has 3 left at tick 2, equal to pid 2's burst, so it keeps running
    assert_eq!(spans(&result, 1), vec![(0, 5)]);
    assert_eq!(spans(&result, 2), vec![(5, 8)]);
    assert_eq!(spans(&result, 4), vec![(8, 10)]);
    assert_eq!(spans(&result, 3), vec![(10, 18)]);
    assert_eq!(result.events_of(EventKind::Preempt).count(), 0);
}

#[test]
fn test_srtf_preemption_chain() {
    let result = simulate(
        vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 1),
        ],
        Policy::srtf(),
        50,
    )
    .unwrap();

    assert_eq!(spans(&result, 1), vec![(0, 1), (6, 13)]);
    assert_eq!(spans(&result, 2), vec![(1, 2), (3, 6)]);
    assert_eq!(spans(&result, 3), vec![(2, 3)]);
    assert_eq!(result.context_switches(), 2);
    assert_eq!(
        log(&result),
        vec![
            "t=0 pid=1 dispatch",
            "t=1 pid=1 preempt",
            "t=1 pid=2 dispatch",
            "t=2 pid=2 preempt",
            "t=2 pid=3 dispatch",
            "t=3 pid=3 complete",
            "t=3 pid=2 dispatch",
            "t=6 pid=2 complete",
            "t=6 pid=1 dispatch",
            "t=13 pid=1 complete",
        ]
    );
}

#[test]
fn test_demo_workload_round_robin() {
    let result = simulate(
        demo_workload(),
        Policy::round_robin(Quantum::new(2).unwrap()),
        200,
    )
    .unwrap();

    assert_eq!(spans(&result, 1), vec![(0, 2), (4, 6), (11, 12)]);
    assert_eq!(spans(&result, 2), vec![(2, 4), (8, 9)]);
    // Alone in the queue, pid 3 is still preempted at every quantum expiry
    assert_eq!(spans(&result, 3), vec![(6, 8), (12, 14), (14, 16), (16, 18)]);
    assert_eq!(spans(&result, 4), vec![(9, 11)]);
    assert_eq!(result.total_ticks(), 18);
    assert_eq!(result.context_switches(), 6);
}

#[test]
fn test_config_driven_run() {
    let config =
        SimulationConfig::from_json(r#"{"policy":"rr","quantum":2,"max_time":200}"#).unwrap();
    let sim = Simulator::from_config(&config).unwrap();
    let via_config = sim.run(demo_workload()).unwrap();
    let direct = simulate(
        demo_workload(),
        Policy::round_robin(Quantum::new(2).unwrap()),
        200,
    )
    .unwrap();
    assert_eq!(via_config, direct);
}

#[test]
fn test_result_json_export() {
    let result = simulate(demo_workload(), Policy::fcfs(), 200).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert_eq!(json["policy"], "fcfs");
    assert_eq!(json["total_ticks"], 18);
    assert_eq!(json["events"][0]["kind"], "dispatch");
    assert_eq!(json["tasks"]["3"]["completion"], 16);
    assert_eq!(json["run_intervals"]["4"][0]["start"], 16);
}
