use crate::board::tile::{Edges, edge_rotations};
use crate::solver::pool::TileId;

/// Per-solve cache of precomputed tile rotations
///
/// Rotations are pure functions of the original tile, so they are computed
/// once per arena index and reused for every branch of the search. The
/// cache is owned by one solver instance and discarded with it; independent
/// solve invocations never share state.
#[derive(Debug)]
pub struct RotationCache {
    /// One slot per arena index, filled on first request
    entries: Vec<Option<[Edges; 4]>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl RotationCache {
    /// Create an empty cache for an arena of the given size
    pub fn new(tile_count: usize) -> Self {
        Self {
            entries: vec![None; tile_count],
            stats: CacheStats::default(),
        }
    }

    /// The four rotations of a tile, in increasing rotation order
    ///
    /// Computed from `base` on the first request for this arena index and
    /// served from the cache afterwards. Requests outside the arena are
    /// computed but not cached.
    pub fn rotations(&mut self, tile: TileId, base: Edges) -> [Edges; 4] {
        if let Some(slot) = self.entries.get_mut(tile) {
            if let Some(cached) = slot {
                self.stats.hits += 1;
                return *cached;
            }
            let computed = edge_rotations(base);
            *slot = Some(computed);
            self.stats.misses += 1;
            return computed;
        }

        self.stats.misses += 1;
        edge_rotations(base)
    }
}
