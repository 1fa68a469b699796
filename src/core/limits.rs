/*!
 * Simulation Limits and Defaults
 *
 * Centralized location for default values shared by the engines,
 * the configuration layer and the binary.
 */

use std::time::Duration;

// =============================================================================
// SCHEDULER
// =============================================================================

/// Default round-robin quantum (time units)
/// Only the binary falls back to it; the engine requires an explicit quantum
pub const DEFAULT_QUANTUM: u64 = 3;

// =============================================================================
// SERVICE
// =============================================================================

/// Default number of engine pool workers
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Requests slower than this are logged as warnings
pub const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(10);

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub const ENV_DEFAULT_QUANTUM: &str = "SIM_DEFAULT_QUANTUM";
pub const ENV_WORKERS: &str = "SIM_WORKERS";
pub const ENV_TRACE_JSON: &str = "SIM_TRACE_JSON";
