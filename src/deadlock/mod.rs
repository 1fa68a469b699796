/*!
 * Deadlock Module
 * Safety verdicts over a read-only resource snapshot
 *
 * Both checks are simplified baselines: neither performs a safe-sequence
 * search nor a graph traversal.
 */

mod bankers;
mod graph;
pub mod types;

pub use types::{
    DeadlockAlgorithm, DeadlockVerdict, ResourceClass, ResourcePool, ResourceRequest,
    ResourceState, ResourceVector,
};

use crate::core::errors::SimResult;
use tracing::debug;

/// Decide whether granting `pending` keeps the system safe
pub fn check_safety(
    pending: &[ResourceRequest],
    state: &ResourceState,
    algorithm: DeadlockAlgorithm,
) -> DeadlockVerdict {
    let verdict = match algorithm {
        DeadlockAlgorithm::Bankers => bankers::check(pending, state),
        DeadlockAlgorithm::ResourceGraph => graph::check(pending, state),
    };

    debug!(
        algorithm = %algorithm,
        pending = pending.len(),
        safe = verdict.safe,
        reason = %verdict.reason,
        "safety check"
    );
    verdict
}

/// Parse the algorithm selector, then [`check_safety`]
pub fn check_safety_named(
    pending: &[ResourceRequest],
    state: &ResourceState,
    algorithm: &str,
) -> SimResult<DeadlockVerdict> {
    Ok(check_safety(pending, state, algorithm.parse()?))
}
