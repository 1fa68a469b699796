/*!
 * Page Replacement Tests
 */

use os_resource_sim::memory::{
    replay, replay_steps, Access, FifoFrames, FrameSet, LruFrames, PageReferenceTrace, PageStats,
    ReplacementPolicy,
};
use pretty_assertions::assert_eq;

const BELADY: [i64; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

#[test]
fn test_fifo_classic_reference_string() {
    let trace = PageReferenceTrace::new(BELADY.to_vec(), 3).unwrap();
    assert_eq!(
        trace.replay(ReplacementPolicy::Fifo).unwrap(),
        PageStats { hits: 3, faults: 9 }
    );
}

#[test]
fn test_lru_evicts_least_recently_used() {
    let steps = replay_steps(&[1, 2, 3, 1, 2, 4], 3, ReplacementPolicy::Lru).unwrap();
    assert_eq!(
        steps,
        vec![
            Access::Fault { evicted: None },
            Access::Fault { evicted: None },
            Access::Fault { evicted: None },
            Access::Hit,
            Access::Hit,
            Access::Fault { evicted: Some(3) },
        ]
    );
}

#[test]
fn test_fifo_and_lru_diverge_on_recency() {
    // FIFO evicts 1 (oldest load) even though it was just used
    let pages = [1, 2, 1, 3, 1];
    assert_eq!(
        replay(&pages, 2, ReplacementPolicy::Fifo).unwrap(),
        PageStats { hits: 1, faults: 4 }
    );
    assert_eq!(
        replay(&pages, 2, ReplacementPolicy::Lru).unwrap(),
        PageStats { hits: 2, faults: 3 }
    );
}

#[test]
fn test_single_frame_hits_only_on_repeats() {
    let stats = replay(&[7, 7, 8, 8, 8, 7], 1, ReplacementPolicy::Lru).unwrap();
    assert_eq!(stats, PageStats { hits: 3, faults: 3 });
}

#[test]
fn test_capacity_larger_than_working_set_never_evicts() {
    for policy in ReplacementPolicy::ALL {
        let steps = replay_steps(&BELADY, 8, policy).unwrap();
        assert!(steps
            .iter()
            .all(|s| !matches!(s, Access::Fault { evicted: Some(_) })));
        assert_eq!(steps.iter().filter(|s| **s == Access::Hit).count(), 7);
    }
}

#[test]
fn test_frame_sets_report_resident_pages() {
    let mut fifo = FifoFrames::new(3);
    let mut lru = LruFrames::new(3);
    for (tick, &page) in [1, 2, 3, 1, 4].iter().enumerate() {
        fifo.access(page, tick as u64);
        lru.access(page, tick as u64);
    }

    assert_eq!(fifo.resident(), vec![2, 3, 4]);
    assert_eq!(lru.resident(), vec![3, 1, 4]);
    assert_eq!(fifo.capacity(), 3);
    assert!(lru.is_full());
}
