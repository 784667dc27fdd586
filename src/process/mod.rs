/*!
 * Process Module
 * Process records and workload validation
 */

pub mod types;
mod validation;

pub use types::Process;
pub use validation::{parse_workload, validate_workload};
