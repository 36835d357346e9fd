//! Cache Replacement Policies.
//!
//! Each set owns one replacement tracker: an ordered record of the occupied
//! way indices, oldest first. The tracker hands out free ways while the set
//! fills and names the eviction victim once it is full.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used. Hits move the way to the tail of the queue.
//! - `Fifo`: First-In, First-Out. Queue order is fixed at insertion.
//!
//! Both policies evict the head of the queue; victim selection is shared and
//! only `record_access` differs. New policies implement [`ReplacementPolicy`]
//! and are wired in through [`for_set`].

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

use std::collections::VecDeque;
use std::fmt;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::config::ReplacementPolicy as PolicyType;

/// Trait for per-set cache replacement policies.
///
/// Defines the interface for updating usage state, allocating free ways and
/// selecting victim lines within a single set.
pub trait ReplacementPolicy: fmt::Debug + Send + Sync {
    /// Updates the policy state when a resident way is hit.
    ///
    /// # Arguments
    ///
    /// * `way` - The way index within the set that was accessed.
    fn record_access(&mut self, way: usize);

    /// Returns the lowest way index not yet occupied, or `None` once the set is full.
    fn next_free_slot(&self) -> Option<usize>;

    /// Removes and returns the eviction candidate, or `None` if the set is empty.
    fn select_victim(&mut self) -> Option<usize>;

    /// Records that `way` has just been filled (first allocation or after an eviction).
    fn insert(&mut self, way: usize);

    /// Returns the tracked ways in queue order, oldest first.
    fn order(&self) -> Vec<usize>;
}

/// Creates the tracker for one set.
///
/// # Arguments
///
/// * `policy` - The configured policy.
/// * `ways` - The associativity of the set.
pub fn for_set(policy: PolicyType, ways: usize) -> Box<dyn ReplacementPolicy> {
    match policy {
        PolicyType::Lru => Box::new(LruPolicy::new(ways)),
        PolicyType::Fifo => Box::new(FifoPolicy::new(ways)),
    }
}

/// Ordered record of occupied ways shared by the queue-based policies.
///
/// Invariant: holds at most `ways` entries, each in `0..ways`, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyQueue {
    order: VecDeque<usize>,
    ways: usize,
}

impl OccupancyQueue {
    /// Creates an empty queue for a set of `ways` lines.
    pub fn new(ways: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(ways),
            ways,
        }
    }

    /// Number of occupied ways.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no way is occupied.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `way` is tracked.
    pub fn contains(&self, way: usize) -> bool {
        self.order.contains(&way)
    }

    /// Moves `way` to the tail if it is tracked.
    pub fn touch(&mut self, way: usize) {
        if let Some(pos) = self.order.iter().position(|&w| w == way)
            && let Some(w) = self.order.remove(pos)
        {
            self.order.push_back(w);
        }
    }

    /// Lowest way index not in the queue.
    pub fn first_free(&self) -> Option<usize> {
        if self.order.len() >= self.ways {
            return None;
        }
        (0..self.ways).find(|w| !self.order.contains(w))
    }

    /// Removes and returns the head (oldest entry).
    pub fn pop_oldest(&mut self) -> Option<usize> {
        self.order.pop_front()
    }

    /// Appends `way` at the tail.
    ///
    /// `way` must be in range and not already tracked; callers only push
    /// free or just-evicted ways.
    pub fn push(&mut self, way: usize) {
        debug_assert!(way < self.ways, "way {way} out of range for {} ways", self.ways);
        debug_assert!(!self.contains(way), "way {way} is already tracked");
        self.order.push_back(way);
    }

    /// Tracked ways, oldest first.
    pub fn to_vec(&self) -> Vec<usize> {
        self.order.iter().copied().collect()
    }
}
