//! Session-scoped memoization of brightness grids.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use sg_core::config::PartitionMode;
use sg_core::grid::BrightnessGrid;

use crate::raster::RasterId;

/// Lookup key: source raster identity plus the partition parameters that
/// shape the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Identity of the source (unpadded) raster.
    pub id: RasterId,
    /// Partition resolution (column count).
    pub resolution: u32,
    /// Row sizing rule.
    pub mode: PartitionMode,
}

/// Memoizes per-(image identity, resolution) brightness grids for one
/// render session.
///
/// Bounded: when full, the oldest inserted entry is evicted. Hit and miss
/// counters expose recomputation behavior to tests.
///
/// # Example
/// ```
/// use sg_image::cache::BrightnessCache;
/// let cache = BrightnessCache::new(16);
/// assert_eq!(cache.hits(), 0);
/// ```
pub struct BrightnessCache {
    entries: HashMap<CacheKey, Arc<BrightnessGrid>>,
    order: VecDeque<CacheKey>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl BrightnessCache {
    /// Cache bounded to `capacity` grids (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up the grid for a key, counting the hit or miss.
    pub fn get(&mut self, key: CacheKey) -> Option<Arc<BrightnessGrid>> {
        match self.entries.get(&key) {
            Some(grid) => {
                self.hits += 1;
                Some(Arc::clone(grid))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a grid, evicting the oldest insertion when at capacity.
    pub fn put(&mut self, key: CacheKey, grid: Arc<BrightnessGrid>) {
        if self.entries.insert(key, grid).is_some() {
            return; // refreshed in place, insertion order unchanged
        }
        self.order.push_back(key);
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    /// Number of cached grids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that required a recomputation.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
