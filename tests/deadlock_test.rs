/*!
 * Deadlock Safety Tests
 */

use os_resource_sim::deadlock::{
    check_safety, check_safety_named, DeadlockAlgorithm, ResourceRequest, ResourceState,
    ResourceVector,
};
use os_resource_sim::service::Job;
use pretty_assertions::assert_eq;

fn state(instances: (u64, u64, u64), available: (u64, u64, u64)) -> ResourceState {
    ResourceState::new(
        ResourceVector::new(instances.0, instances.1, instances.2),
        ResourceVector::new(available.0, available.1, available.2),
    )
    .unwrap()
}

#[test]
fn test_bankers_single_cpu_request() {
    let snapshot = state((8, 8, 8), (4, 8, 8));

    let over = [ResourceRequest::new(1, ResourceVector::new(5, 0, 0))];
    let verdict = check_safety(&over, &snapshot, DeadlockAlgorithm::Bankers);
    assert!(!verdict.safe);
    assert_eq!(
        verdict.reason,
        "Job #1 cannot be allocated (insufficient cpu: requested 5, available 4)"
    );

    let under = [ResourceRequest::new(1, ResourceVector::new(2, 0, 0))];
    let verdict = check_safety(&under, &snapshot, DeadlockAlgorithm::Bankers);
    assert!(verdict.safe);
    assert_eq!(verdict.reason, "System is in safe state");
}

#[test]
fn test_bankers_uses_available_not_instances() {
    let snapshot = state((10, 10, 10), (1, 10, 10));
    let pending = [ResourceRequest::new(3, ResourceVector::new(2, 0, 0))];
    assert!(!check_safety(&pending, &snapshot, DeadlockAlgorithm::Bankers).safe);
}

#[test]
fn test_empty_pending_set() {
    let snapshot = state((4, 4, 4), (4, 4, 4));
    assert!(check_safety(&[], &snapshot, DeadlockAlgorithm::Bankers).safe);
    assert!(check_safety(&[], &snapshot, DeadlockAlgorithm::ResourceGraph).safe);
}

#[test]
fn test_graph_needs_every_class_exhausted() {
    let snapshot = state((4, 2, 8), (0, 0, 0));
    let jobs = [
        Job::new(1, 0, 3).with_demand(ResourceVector::new(2, 1, 4)),
        Job::new(2, 1, 2).with_demand(ResourceVector::new(2, 0, 4)),
    ];
    let active: Vec<_> = jobs.iter().map(Job::request).collect();

    // disk is 1 of 2, so no circular wait is reported
    let verdict = check_safety(&active, &snapshot, DeadlockAlgorithm::ResourceGraph);
    assert!(verdict.safe);

    let mut saturated = active.clone();
    saturated.push(ResourceRequest::new(3, ResourceVector::new(0, 1, 0)));
    let verdict = check_safety(&saturated, &snapshot, DeadlockAlgorithm::ResourceGraph);
    assert!(!verdict.safe);
    assert_eq!(verdict.reason, "Circular wait detected - all resources allocated");
}

#[test]
fn test_algorithms_are_independent_views() {
    // Fits the available pool, yet the graph check sees every class fully held
    let snapshot = state((2, 2, 2), (2, 2, 2));
    let pending = [ResourceRequest::new(1, ResourceVector::new(2, 2, 2))];

    assert!(check_safety(&pending, &snapshot, DeadlockAlgorithm::Bankers).safe);
    assert!(!check_safety(&pending, &snapshot, DeadlockAlgorithm::ResourceGraph).safe);
}

#[test]
fn test_named_selectors() {
    let snapshot = state((4, 4, 4), (4, 4, 4));
    let verdict = check_safety_named(&[], &snapshot, "Banker's Algorithm").unwrap();
    assert!(verdict.safe);
    assert!(check_safety_named(&[], &snapshot, "timeout").is_err());
}

#[test]
fn test_verdict_wire_format() {
    let snapshot = state((4, 4, 4), (4, 4, 4));
    let verdict = check_safety(&[], &snapshot, DeadlockAlgorithm::ResourceGraph);
    assert_eq!(
        serde_json::to_string(&verdict).unwrap(),
        r#"{"safe":true,"reason":"No circular waits detected"}"#
    );
}
