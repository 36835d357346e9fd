//! Set-Associative Cache Model.
//!
//! This module implements a write-back, write-allocate set-associative cache.
//! Every miss fetches a full block; a dirty victim is written back when it is
//! evicted. The cache reports what happened on each access and leaves all
//! byte accounting to the caller.

/// Geometry derivation and address decomposition.
pub mod geometry;

/// Cache replacement policy implementations (FIFO, LRU).
pub mod policies;

pub use self::geometry::CacheGeometry;

use self::policies::ReplacementPolicy;
use crate::config::{CacheConfig, ReplacementPolicy as PolicyType};

/// Cache line entry containing tag, validity, and dirty bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Tag of the resident block.
    pub tag: u64,
    /// Set once the line has been filled.
    pub valid: bool,
    /// Modified since it was fetched.
    pub dirty: bool,
}

/// Whether a lookup found the block resident.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Block was resident.
    Hit,
    /// Block was fetched from memory.
    Miss,
}

/// A line displaced to make room for a missing block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eviction {
    /// Way the victim occupied.
    pub way: usize,
    /// Tag of the evicted block.
    pub tag: u64,
    /// Victim must be written back to memory.
    pub dirty: bool,
}

/// Everything one access did to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessResult {
    /// Hit or miss.
    pub outcome: AccessOutcome,
    /// Way now holding the block.
    pub way: usize,
    /// A line went from clean (or absent) to dirty.
    pub dirtied: bool,
    /// Line evicted on a miss into a full set.
    pub evicted: Option<Eviction>,
}

impl AccessResult {
    /// Returns `true` for a hit.
    pub fn is_hit(&self) -> bool {
        self.outcome == AccessOutcome::Hit
    }

    /// Returns `true` if the access evicted a dirty line.
    pub fn wrote_back(&self) -> bool {
        self.evicted.is_some_and(|e| e.dirty)
    }
}

/// One set: `ways` line slots plus the set's own replacement tracker.
#[derive(Debug)]
struct CacheSet {
    lines: Vec<CacheLine>,
    policy: Box<dyn ReplacementPolicy>,
}

impl CacheSet {
    fn new(ways: usize, policy: PolicyType) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways],
            policy: policies::for_set(policy, ways),
        }
    }

    fn find(&self, tag: u64) -> Option<usize> {
        self.lines.iter().position(|l| l.valid && l.tag == tag)
    }
}

/// Set-associative cache owning its line storage and per-set trackers.
///
/// Sets are independent; no state is shared between them.
#[derive(Debug)]
pub struct SetAssociativeCache {
    geometry: CacheGeometry,
    sets: Vec<CacheSet>,
}

impl SetAssociativeCache {
    /// Creates an empty cache with the given geometry.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Validated cache geometry.
    /// * `policy` - Replacement policy used by every set.
    pub fn new(geometry: CacheGeometry, policy: PolicyType) -> Self {
        let sets = (0..geometry.num_sets())
            .map(|_| CacheSet::new(geometry.ways(), policy))
            .collect();
        Self { geometry, sets }
    }

    /// Validates `config` and creates an empty cache from it.
    ///
    /// # Errors
    ///
    /// Returns the geometry's [`ConfigError`](crate::common::ConfigError) if the configuration is rejected.
    pub fn from_config(config: &CacheConfig) -> Result<Self, crate::common::ConfigError> {
        Ok(Self::new(CacheGeometry::new(config)?, config.policy))
    }

    /// Geometry this cache was built with.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Looks up `tag` in set `set_index`, filling or replacing a line on a miss.
    ///
    /// On a hit the line is marked dirty for writes and the tracker is told
    /// about the access. On a miss the block is installed in the lowest free
    /// way, or in the tracker's victim once the set is full; the new line is
    /// dirty exactly when the access is a write.
    ///
    /// # Arguments
    ///
    /// * `set_index` - Set selected by the address; must be `< num_sets`.
    /// * `tag` - Tag of the accessed block.
    /// * `is_write` - Whether this is a write operation.
    ///
    /// # Panics
    ///
    /// Panics if `set_index` is out of range. Indices produced by
    /// [`CacheGeometry::decode`] are always in range.
    pub fn access(&mut self, set_index: usize, tag: u64, is_write: bool) -> AccessResult {
        let set = &mut self.sets[set_index];

        if let Some(way) = set.find(tag) {
            let line = &mut set.lines[way];
            let dirtied = is_write && !line.dirty;
            if is_write {
                line.dirty = true;
            }
            set.policy.record_access(way);
            return AccessResult {
                outcome: AccessOutcome::Hit,
                way,
                dirtied,
                evicted: None,
            };
        }

        let (way, evicted) = if let Some(way) = set.policy.next_free_slot() {
            (way, None)
        } else {
            let way = set.policy.select_victim().unwrap_or(0);
            let victim = set.lines[way];
            let eviction = victim.valid.then_some(Eviction {
                way,
                tag: victim.tag,
                dirty: victim.dirty,
            });
            tracing::trace!(
                set = set_index,
                way,
                tag = victim.tag,
                dirty = victim.dirty,
                "evict"
            );
            (way, eviction)
        };

        set.lines[way] = CacheLine {
            tag,
            valid: true,
            dirty: is_write,
        };
        set.policy.insert(way);

        AccessResult {
            outcome: AccessOutcome::Miss,
            way,
            dirtied: is_write,
            evicted,
        }
    }

    /// Checks if the block holding `addr` is resident, without touching any state.
    pub fn contains(&self, addr: u64) -> bool {
        let decoded = self.geometry.decode(addr);
        self.sets[decoded.set_index].find(decoded.tag).is_some()
    }

    /// Returns the line in `way` of set `set_index`, if both are in range.
    pub fn line(&self, set_index: usize, way: usize) -> Option<&CacheLine> {
        self.sets.get(set_index)?.lines.get(way)
    }

    /// Replacement order of set `set_index`, oldest first.
    pub fn replacement_order(&self, set_index: usize) -> Option<Vec<usize>> {
        self.sets.get(set_index).map(|s| s.policy.order())
    }

    /// Counts valid dirty lines by scanning every set.
    pub fn resident_dirty_lines(&self) -> u64 {
        self.sets
            .iter()
            .flat_map(|s| s.lines.iter())
            .filter(|l| l.valid && l.dirty)
            .count() as u64
    }
}
