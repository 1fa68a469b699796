/*!
 * FIFO Frame Set
 * Ring buffer with a rotating insertion cursor
 */

use super::traits::FrameSet;
use super::types::Access;
use crate::core::types::PageId;
use ahash::RandomState;
use std::collections::HashSet;

/// FIFO eviction: the cursor always points at the oldest loaded frame once full
#[derive(Debug, Clone)]
pub struct FifoFrames {
    frames: Vec<PageId>,
    cursor: usize,
    capacity: usize,
    resident: HashSet<PageId, RandomState>,
}

impl FifoFrames {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
            resident: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }
}

impl FrameSet for FifoFrames {
    fn access(&mut self, page: PageId, _tick: u64) -> Access {
        // A hit leaves the page's position untouched
        if self.resident.contains(&page) {
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        if self.frames.len() < self.capacity {
            self.frames.push(page);
            self.resident.insert(page);
            return Access::Fault { evicted: None };
        }

        let victim = std::mem::replace(&mut self.frames[self.cursor], page);
        self.resident.remove(&victim);
        self.resident.insert(page);
        self.cursor = (self.cursor + 1) % self.capacity;
        Access::Fault {
            evicted: Some(victim),
        }
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn resident(&self) -> Vec<PageId> {
        // Until full the cursor stays at 0, so this is insertion order either way
        let mut order = Vec::with_capacity(self.frames.len());
        order.extend_from_slice(&self.frames[self.cursor..]);
        order.extend_from_slice(&self.frames[..self.cursor]);
        order
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.frames.len()
    }
}
