use bitvec::prelude::*;
use std::fmt;

/// Stable arena index of an original (unrotated) tile
pub type TileId = usize;

/// The set of tiles not yet placed in the current search branch
///
/// Tiles live in an arena in row-major flatten order; the pool tracks the
/// still-unused arena indices as a bitset. Iteration is in ascending index
/// order, which preserves the order tiles appear in the input grid. Each
/// recursion level owns its own pool, so sibling branches never observe
/// each other's removals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilePool {
    bits: BitVec,
}

impl TilePool {
    /// Create a pool containing every tile of an arena of the given size
    pub fn full(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Remove a tile from the pool
    ///
    /// Out-of-arena indices are ignored.
    pub fn remove(&mut self, tile: TileId) {
        if tile < self.bits.len() {
            self.bits.set(tile, false);
        }
    }

    /// A copy of this pool with one tile removed
    #[must_use]
    pub fn without(&self, tile: TileId) -> Self {
        let mut branch = self.clone();
        branch.remove(tile);
        branch
    }

    /// Test whether a tile is still unused
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Test whether every tile has been placed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of tiles still unused
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Unused tile indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for TilePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TilePool({} remaining: {:?})",
            self.count(),
            self.iter().collect::<Vec<_>>()
        )
    }
}
