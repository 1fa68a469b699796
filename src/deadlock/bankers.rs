/*!
 * Banker's-Style Feasibility Check
 *
 * Every pending request must fit inside the currently available amount of
 * every resource class. No need matrix and no finish-order search: this is
 * a single-instant check.
 */

use super::types::{DeadlockVerdict, ResourceRequest, ResourceState};

pub(super) fn check(pending: &[ResourceRequest], state: &ResourceState) -> DeadlockVerdict {
    let available = state.available();

    for request in pending {
        if let Some(class) = request.demand.first_excess(&available) {
            return DeadlockVerdict::unsafe_state(format!(
                "Job #{} cannot be allocated (insufficient {}: requested {}, available {})",
                request.job_id,
                class,
                request.demand.get(class),
                state.pool(class).available
            ));
        }
    }

    DeadlockVerdict::safe("System is in safe state")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadlock::ResourceVector;

    #[test]
    fn test_reports_first_offending_job_and_class() {
        let state = ResourceState::idle(ResourceVector::new(4, 2, 8));
        let pending = [
            ResourceRequest::new(1, ResourceVector::new(1, 1, 1)),
            ResourceRequest::new(2, ResourceVector::new(1, 3, 9)),
            ResourceRequest::new(3, ResourceVector::new(9, 0, 0)),
        ];

        let verdict = check(&pending, &state);
        assert!(!verdict.safe);
        assert_eq!(
            verdict.reason,
            "Job #2 cannot be allocated (insufficient disk: requested 3, available 2)"
        );
    }

    #[test]
    fn test_requests_are_checked_independently() {
        // Each fits on its own even though together they exceed availability
        let state = ResourceState::idle(ResourceVector::new(4, 4, 4));
        let pending = [
            ResourceRequest::new(1, ResourceVector::new(3, 0, 0)),
            ResourceRequest::new(2, ResourceVector::new(3, 0, 0)),
        ];
        assert!(check(&pending, &state).safe);
    }
}
