/*!
 * Monitoring
 * Structured tracing setup for simulation runs
 */

mod tracer;

pub use tracer::{init_tracing, span_simulation};
