//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the line that has not been accessed for the longest time.
//! The occupancy queue doubles as the recency stack: a hit moves the way to the
//! tail (most recently used), so the head is always the least recently used line.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_access()`: O(W) where W is the number of ways (associativity)
//!   - `select_victim()`: O(1)
//! - **Space Complexity:** O(W) per set
//! - **Best Case:** Working sets that fit the set and are reused
//! - **Worst Case:** Cyclic scans one line larger than the set (thrashing)

use super::{OccupancyQueue, ReplacementPolicy};

/// LRU Policy state for one set.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Head is LRU, tail is MRU.
    queue: OccupancyQueue,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set.
    pub fn new(ways: usize) -> Self {
        Self {
            queue: OccupancyQueue::new(ways),
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves the accessed `way` to the MRU end of the queue.
    fn record_access(&mut self, way: usize) {
        self.queue.touch(way);
    }

    fn next_free_slot(&self) -> Option<usize> {
        self.queue.first_free()
    }

    /// Returns the way at the head of the queue (LRU position).
    fn select_victim(&mut self) -> Option<usize> {
        self.queue.pop_oldest()
    }

    fn insert(&mut self, way: usize) {
        self.queue.push(way);
    }

    fn order(&self) -> Vec<usize> {
        self.queue.to_vec()
    }
}
