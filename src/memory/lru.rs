/*!
 * LRU Frame Set
 * Resident pages keyed by the trace index of their last reference
 */

use super::traits::FrameSet;
use super::types::Access;
use crate::core::types::PageId;
use ahash::RandomState;
use std::collections::HashMap;

/// LRU eviction with a naive minimum scan, O(frames) per fault when full
#[derive(Debug, Clone)]
pub struct LruFrames {
    last_used: HashMap<PageId, u64, RandomState>,
    capacity: usize,
}

impl LruFrames {
    pub fn new(capacity: usize) -> Self {
        Self {
            last_used: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            capacity,
        }
    }

    fn least_recent(&self) -> Option<PageId> {
        // Ticks are strictly increasing, so the minimum is unique
        self.last_used
            .iter()
            .min_by_key(|&(_, tick)| *tick)
            .map(|(&page, _)| page)
    }
}

impl FrameSet for LruFrames {
    fn access(&mut self, page: PageId, tick: u64) -> Access {
        if let Some(stamp) = self.last_used.get_mut(&page) {
            *stamp = tick;
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.last_used.len() >= self.capacity {
            let victim = self.least_recent();
            if let Some(victim) = victim {
                self.last_used.remove(&victim);
            }
            victim
        } else {
            None
        };

        self.last_used.insert(page, tick);
        Access::Fault { evicted }
    }

    fn contains(&self, page: PageId) -> bool {
        self.last_used.contains_key(&page)
    }

    fn resident(&self) -> Vec<PageId> {
        let mut pages: Vec<(PageId, u64)> =
            self.last_used.iter().map(|(&p, &t)| (p, t)).collect();
        pages.sort_by_key(|&(_, tick)| tick);
        pages.into_iter().map(|(page, _)| page).collect()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.last_used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_refreshes_recency() {
        let mut frames = LruFrames::new(2);
        frames.access(1, 0);
        frames.access(2, 1);
        assert_eq!(frames.access(1, 2), Access::Hit);
        assert_eq!(frames.access(3, 3), Access::Fault { evicted: Some(2) });
        assert_eq!(frames.resident(), vec![1, 3]);
    }
}
