/*!
 * Monitoring Module
 * Structured logging for the simulation engines
 */

pub mod tracer;

pub use tracer::{generate_trace_id, init_tracing, OperationSpan};
