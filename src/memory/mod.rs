/*!
 * Memory Module
 * Page replacement simulation over a reference string
 */

mod fifo;
mod lru;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use fifo::FifoFrames;
pub use lru::LruFrames;
pub use traits::*;
pub use types::*;

use crate::core::errors::{SimError, SimResult};
use crate::core::types::PageId;
use tracing::debug;

/// Replay `pages` against `frame_capacity` frames under `policy`
///
/// A reference is a hit iff the page is resident before it is processed.
pub fn replay(
    pages: &[PageId],
    frame_capacity: usize,
    policy: ReplacementPolicy,
) -> SimResult<PageStats> {
    let mut stats = PageStats::default();
    for access in replay_steps(pages, frame_capacity, policy)? {
        stats.record(access);
    }

    debug!(
        policy = %policy,
        frame_capacity,
        references = pages.len(),
        hits = stats.hits,
        faults = stats.faults,
        "replay complete"
    );
    Ok(stats)
}

/// Like [`replay`], but returns the outcome of every reference in trace order
pub fn replay_steps(
    pages: &[PageId],
    frame_capacity: usize,
    policy: ReplacementPolicy,
) -> SimResult<Vec<Access>> {
    if frame_capacity == 0 {
        return Err(SimError::invalid("frame capacity must be >= 1"));
    }

    let steps = match policy {
        ReplacementPolicy::Fifo => drive(FifoFrames::new(frame_capacity), pages),
        ReplacementPolicy::Lru => drive(LruFrames::new(frame_capacity), pages),
    };
    Ok(steps)
}

/// Parse the policy selector, then [`replay`]
pub fn replay_named(pages: &[PageId], frame_capacity: usize, policy: &str) -> SimResult<PageStats> {
    replay(pages, frame_capacity, policy.parse()?)
}

impl PageReferenceTrace {
    /// Replay this trace under `policy`
    pub fn replay(&self, policy: ReplacementPolicy) -> SimResult<PageStats> {
        replay(&self.pages, self.frame_capacity, policy)
    }
}

fn drive<F: FrameSet>(mut frames: F, pages: &[PageId]) -> Vec<Access> {
    pages
        .iter()
        .enumerate()
        .map(|(tick, &page)| frames.access(page, tick as u64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELADY: [PageId; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    #[test]
    fn test_fifo_belady_reference() {
        let stats = replay(&BELADY, 3, ReplacementPolicy::Fifo).unwrap();
        assert_eq!(stats, PageStats { hits: 3, faults: 9 });
    }

    #[test]
    fn test_fifo_belady_anomaly_with_four_frames() {
        let stats = replay(&BELADY, 4, ReplacementPolicy::Fifo).unwrap();
        assert_eq!(stats, PageStats { hits: 2, faults: 10 });
    }

    #[test]
    fn test_lru_reference() {
        let steps = replay_steps(&[1, 2, 3, 1, 2, 4], 3, ReplacementPolicy::Lru).unwrap();
        assert_eq!(steps[5], Access::Fault { evicted: Some(3) });

        let stats = replay(&[1, 2, 3, 1, 2, 4], 3, ReplacementPolicy::Lru).unwrap();
        assert_eq!(stats, PageStats { hits: 2, faults: 4 });
    }

    #[test]
    fn test_empty_trace_and_zero_frames() {
        assert_eq!(
            replay(&[], 2, ReplacementPolicy::Lru).unwrap(),
            PageStats::default()
        );
        assert!(matches!(
            replay(&[1], 0, ReplacementPolicy::Fifo),
            Err(SimError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_replay_named_rejects_unknown_policy() {
        assert!(matches!(
            replay_named(&BELADY, 3, "optimal"),
            Err(SimError::UnknownAlgorithm(_))
        ));
        assert_eq!(replay_named(&BELADY, 3, "LRU").unwrap().faults, 10);
    }
}
