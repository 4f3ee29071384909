//! Materialized solution snapshots
//!
//! Each solution is a fully independent copy of a completed board. No row
//! or tile structure is shared between solutions, so holding one snapshot
//! while the search continues is always safe.

use crate::board::tile::Tile;
use ndarray::Array2;

/// A completed board: every cell holds a rotated tile and every internal
/// adjacency was validated at placement time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    cells: Array2<Tile>,
}

impl Solution {
    /// Build a solution from a row-major cell list
    ///
    /// Returns `None` when the cell count does not match the dimensions.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Tile>) -> Option<Self> {
        Array2::from_shape_vec((rows, cols), cells)
            .ok()
            .map(|cells| Self { cells })
    }

    /// Number of rows in the board
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the board
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Placed tile at the given position, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells.get((row, col))
    }

    /// The completed board grid, row-major
    pub const fn grid(&self) -> &Array2<Tile> {
        &self.cells
    }
}
