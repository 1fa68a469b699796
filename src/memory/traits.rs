/*!
 * Page Replacement Traits
 * Frame set abstraction shared by the eviction policies
 */

use super::types::Access;
use crate::core::types::PageId;

/// Bounded set of resident pages
///
/// Implementations own all of their bookkeeping (cursors, recency stamps);
/// a fresh instance is created for every replay.
pub trait FrameSet {
    /// Reference `page` at logical time `tick` (its index in the trace)
    fn access(&mut self, page: PageId, tick: u64) -> Access;

    /// Whether `page` is currently resident
    fn contains(&self, page: PageId) -> bool;

    /// Resident pages, in the implementation's eviction order (next victim first)
    fn resident(&self) -> Vec<PageId>;

    /// Maximum number of resident pages
    fn capacity(&self) -> usize;

    /// Number of resident pages
    fn len(&self) -> usize;

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}
