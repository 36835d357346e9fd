//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the oldest line in a set, regardless of how recently it
//! was accessed. Ways enter the queue when they are filled and leave it only
//! when evicted; hits do not change the order.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_access()`: O(1)
//!   - `select_victim()`: O(1)
//! - **Space Complexity:** O(W) per set
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict frequently-used lines)

use super::{OccupancyQueue, ReplacementPolicy};

/// FIFO Policy state for one set.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    /// Ways in fill order, oldest first.
    queue: OccupancyQueue,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
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

impl ReplacementPolicy for FifoPolicy {
    /// No-op: insertion order is fixed.
    fn record_access(&mut self, _way: usize) {}

    fn next_free_slot(&self) -> Option<usize> {
        self.queue.first_free()
    }

    /// Returns the way that was filled earliest.
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
