/*!
 * Resource-Allocation-Graph Check
 *
 * Conservative stand-in for cycle detection: when the jobs together hold at
 * least every instance of every class at once, a circular wait is assumed.
 */

use super::types::{DeadlockVerdict, ResourceRequest, ResourceState, ResourceVector};

pub(super) fn check(active: &[ResourceRequest], state: &ResourceState) -> DeadlockVerdict {
    let allocated = active
        .iter()
        .fold(ResourceVector::default(), |sum, r| sum.saturating_add(r.demand));
    let exhausted = allocated
        .iter()
        .all(|(class, amount)| amount >= state.pool(class).instances);

    if exhausted {
        DeadlockVerdict::unsafe_state("Circular wait detected - all resources allocated")
    } else {
        DeadlockVerdict::safe("No circular waits detected")
    }
}
