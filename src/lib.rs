/*!
 * OS Resource Simulator Library
 * CPU scheduling, page replacement and deadlock-safety engines
 *
 * Every engine is a pure, synchronous function of the snapshot it is given.
 */

pub mod core;
pub mod deadlock;
pub mod memory;
pub mod metrics;
pub mod monitoring;
pub mod scheduler;
pub mod service;

// Re-exports
pub use crate::core::{Pid, SimConfig, SimError, SimResult};
pub use deadlock::{check_safety, DeadlockAlgorithm, DeadlockVerdict, ResourceRequest, ResourceState};
pub use memory::{replay, PageStats, ReplacementPolicy};
pub use metrics::{aggregate, Metrics};
pub use monitoring::init_tracing;
pub use scheduler::{schedule, Process, ScheduleResult, SchedulingAlgorithm, TimeQuantum};
pub use service::{handle, EnginePool, Job, Request, Response};
