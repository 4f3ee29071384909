//! Validated rectangular input grid
//!
//! A `Puzzle` is the boundary type of the crate: construction rejects
//! malformed input (empty grids, ragged rows, repeated labels) so the
//! search engine only ever operates on well-formed boards.

use crate::board::tile::Tile;
use crate::io::error::{Result, SolverError, invalid_puzzle};
use ndarray::Array2;
use std::collections::HashSet;

/// A rectangular grid of uniquely labelled tiles
///
/// The grid layout describes which tiles belong to the puzzle, not where
/// they must end up; the solver flattens it into a pool of candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    tiles: Array2<Tile>,
}

impl Puzzle {
    /// Create a puzzle from an already rectangular tile grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has a zero dimension or if two tiles
    /// share a label.
    pub fn new(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_puzzle(&"the board must contain at least one tile"));
        }

        let mut seen = HashSet::new();
        for tile in &tiles {
            if !seen.insert(tile.label.as_str()) {
                return Err(SolverError::DuplicateLabel {
                    label: tile.label.clone(),
                });
            }
        }
        drop(seen);

        Ok(Self { tiles })
    }

    /// Create a puzzle from nested rows of tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty or ragged, or if two tiles
    /// share a label.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(invalid_puzzle(&"the board must contain at least one tile"));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid_puzzle(&format!(
                    "row {index} has {} tiles, expected {width}",
                    row.len()
                )));
            }
        }

        let flat: Vec<Tile> = rows.into_iter().flatten().collect();
        let tiles = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| invalid_puzzle(&e))?;
        Self::new(tiles)
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tile at the given position, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get((row, col))
    }

    /// The underlying tile grid, row-major
    pub const fn grid(&self) -> &Array2<Tile> {
        &self.tiles
    }
}
