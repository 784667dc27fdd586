/*!
 * Workload Validation
 * Reject malformed process sets before the tick loop starts
 */

use super::types::Process;
use crate::core::errors::{SimResult, SimulationError};
use ahash::AHashSet;

/// Validate a workload: every burst positive, every pid unique
///
/// Empty workloads pass unless `reject_empty` is set.
pub fn validate_workload(processes: &[Process], reject_empty: bool) -> SimResult<()> {
    if processes.is_empty() && reject_empty {
        return Err(SimulationError::EmptyWorkload);
    }

    let mut seen = AHashSet::with_capacity(processes.len());
    for process in processes {
        if process.burst == 0 {
            return Err(SimulationError::ZeroBurst(process.pid));
        }
        if !seen.insert(process.pid) {
            return Err(SimulationError::DuplicatePid(process.pid));
        }
    }

    Ok(())
}

/// Parse a JSON array of process records and validate it
///
/// Only `pid`, `arrival`, and `burst` are required per entry; engine-owned
/// fields are reset.
pub fn parse_workload(json: &str) -> SimResult<Vec<Process>> {
    let mut processes: Vec<Process> = serde_json::from_str(json)?;
    for process in &mut processes {
        process.reset();
    }
    validate_workload(&processes, false)?;
    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_workload() {
        let ps = vec![Process::new(1, 0, 3), Process::new(2, 1, 1)];
        assert!(validate_workload(&ps, true).is_ok());
    }

    #[test]
    fn test_zero_burst_rejected() {
        let ps = vec![Process::new(1, 0, 3), Process::new(2, 1, 0)];
        assert_eq!(
            validate_workload(&ps, false),
            Err(SimulationError::ZeroBurst(2))
        );
    }

    #[test]
    fn test_duplicate_pid_rejected() {
        let ps = vec![Process::new(5, 0, 3), Process::new(5, 4, 1)];
        assert_eq!(
            validate_workload(&ps, false),
            Err(SimulationError::DuplicatePid(5))
        );
    }

    #[test]
    fn test_empty_workload() {
        assert!(validate_workload(&[], false).is_ok());
        assert_eq!(
            validate_workload(&[], true),
            Err(SimulationError::EmptyWorkload)
        );
    }

    #[test]
    fn test_parse_workload() {
        let ps = parse_workload(
            r#"[{"pid":1,"arrival":0,"burst":5},{"pid":2,"arrival":2,"burst":3,"priority":4}]"#,
        )
        .unwrap();
        assert_eq!(ps.len(), 2);
        assert_eq!(ps[0].remaining, 5);
        assert_eq!(ps[1].priority, Some(4));
    }

    #[test]
    fn test_parse_negative_arrival() {
        let err = parse_workload(r#"[{"pid":1,"arrival":-1,"burst":5}]"#).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_duplicate() {
        let err = parse_workload(
            r#"[{"pid":1,"arrival":0,"burst":5},{"pid":1,"arrival":0,"burst":2}]"#,
        )
        .unwrap_err();
        assert_eq!(err, SimulationError::DuplicatePid(1));
    }
}
