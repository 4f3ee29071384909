use crate::board::puzzle::Puzzle;
use crate::board::solution::Solution;
use crate::board::tile::{Edges, Tile};
use crate::solver::adjacency::is_placeable;
use crate::solver::pool::{TileId, TilePool};
use crate::solver::rotations::{CacheStats, RotationCache};

/// A placement chosen during search: the arena index of the original tile
/// plus its oriented edge values
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    /// Arena index of the original (unrotated) tile
    pub tile: TileId,
    /// Edge values after rotation
    pub edges: Edges,
}

/// Exhaustive backtracking solver for one puzzle instance
///
/// Owns the tile arena (the input grid flattened row-major) and a rotation
/// cache scoped to this instance. The search enumerates candidate tiles in
/// arena order and rotations in increasing rotation order, which makes the
/// solution sequence deterministic.
pub struct Solver {
    tiles: Vec<Tile>,
    rows: usize,
    row_length: usize,
    cache: RotationCache,
}

impl Solver {
    /// Create a solver for the given puzzle
    pub fn new(puzzle: &Puzzle) -> Self {
        let tiles: Vec<Tile> = puzzle.grid().iter().cloned().collect();
        let cache = RotationCache::new(tiles.len());
        Self {
            rows: puzzle.rows(),
            row_length: puzzle.cols(),
            tiles,
            cache,
        }
    }

    /// Enumerate every complete valid board filling
    ///
    /// Solutions appear in depth-first order with tile-then-rotation
    /// priority. Distinct placement sequences that reach an identical final
    /// layout each contribute their own entry. An unsolvable puzzle yields
    /// an empty vector.
    pub fn enumerate(&mut self) -> Vec<Solution> {
        let mut solutions = Vec::new();
        let mut placements = Vec::with_capacity(self.tiles.len());
        let pool = TilePool::full(self.tiles.len());
        self.search(&mut placements, &pool, &mut solutions);
        solutions
    }

    /// Rotation cache statistics for this instance
    pub const fn cache_stats(&self) -> &CacheStats {
        &self.cache.stats
    }

    fn search(
        &mut self,
        placements: &mut Vec<Placement>,
        pool: &TilePool,
        solutions: &mut Vec<Solution>,
    ) {
        for tile in pool.iter() {
            let Some(base) = self.tiles.get(tile).map(|t| t.edges) else {
                continue;
            };
            for edges in self.cache.rotations(tile, base) {
                if !is_placeable(edges, placements, self.row_length) {
                    continue;
                }

                let branch_pool = pool.without(tile);
                placements.push(Placement { tile, edges });

                if placements.len() % self.row_length == 0 && branch_pool.is_empty() {
                    solutions.extend(self.snapshot(placements));
                }

                // A filled board still recurses once; the exhausted pool
                // makes that call return without iterating.
                self.search(placements, &branch_pool, solutions);
                placements.pop();
            }
        }
    }

    fn snapshot(&self, placements: &[Placement]) -> Option<Solution> {
        let cells: Vec<Tile> = placements
            .iter()
            .filter_map(|placement| {
                self.tiles
                    .get(placement.tile)
                    .map(|original| Tile::new(original.label.clone(), placement.edges))
            })
            .collect();
        Solution::from_cells(self.rows, self.row_length, cells)
    }
}

/// Solve a puzzle, returning every valid board filling
///
/// Flattens the input grid into a tile pool, derives the row length from
/// the grid's column count, and runs the exhaustive enumeration with a
/// fresh rotation cache.
pub fn solve(puzzle: &Puzzle) -> Vec<Solution> {
    Solver::new(puzzle).enumerate()
}
