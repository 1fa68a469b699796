/*!
 * Page Replacement Types
 * Common types for page replacement simulations
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::types::PageId;
use crate::impl_selector_serde;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Eviction policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplacementPolicy {
    /// Evict the page resident longest in insertion order
    Fifo,
    /// Evict the page referenced least recently
    Lru,
}

impl ReplacementPolicy {
    pub const ALL: [ReplacementPolicy; 2] = [Self::Fifo, Self::Lru];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            _ => Err(SimError::UnknownAlgorithm(format!(
                "'{}'. Valid: fifo, lru",
                s
            ))),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl_selector_serde!(ReplacementPolicy);

/// Ordered page references paired with the number of physical frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PageReferenceTrace {
    pub pages: Vec<PageId>,
    pub frame_capacity: usize,
}

impl PageReferenceTrace {
    pub fn new(pages: Vec<PageId>, frame_capacity: usize) -> SimResult<Self> {
        if frame_capacity == 0 {
            return Err(SimError::invalid("frame capacity must be >= 1"));
        }
        Ok(Self {
            pages,
            frame_capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Hit/fault counters for one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PageStats {
    pub hits: u64,
    pub faults: u64,
}

impl PageStats {
    #[inline]
    pub fn record(&mut self, access: Access) {
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { .. } => self.faults += 1,
        }
    }

    /// Total references replayed
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of references that hit, `None` for an empty trace
    pub fn hit_ratio(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.hits as f64 / total as f64),
        }
    }
}

/// Outcome of a single page reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Access {
    /// Page was already resident
    Hit,
    /// Page was loaded; `evicted` is the victim when the frame set was full
    Fault { evicted: Option<PageId> },
}
