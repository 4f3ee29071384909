//! Random solvable-puzzle construction
//!
//! Builds a board by drawing every edge value at random, with interior
//! edges shared between neighbouring tiles so the laid-out board matches
//! everywhere. The tiles are then rotated and shuffled so the input
//! arrangement gives away nothing; the solver still finds the original
//! layout (and any others the values happen to admit).

use crate::board::puzzle::Puzzle;
use crate::board::tile::{SIDE_COUNT, Tile};
use crate::io::configuration::{EDGE_ALPHABET_SIZE, MAX_BOARD_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded generator of solvable edge-matching puzzles
pub struct PuzzleGenerator {
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a generator with a deterministic seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a rows×cols puzzle with at least one solution
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_BOARD_DIMENSION`].
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Puzzle> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value == 0 || value > MAX_BOARD_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_BOARD_DIMENSION}"),
                ));
            }
        }

        // Boundary values between cells; border edges are unconstrained.
        // vertical[r][c] sits above cell (r, c), horizontal[r][c] to its left.
        let vertical = self.edge_values(rows + 1, cols);
        let horizontal = self.edge_values(rows, cols + 1);

        let mut tiles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let top = boundary(&vertical, row, col);
                let bottom = boundary(&vertical, row + 1, col);
                let left = boundary(&horizontal, row, col);
                let right = boundary(&horizontal, row, col + 1);
                tiles.push(Tile::new(
                    label_for(row * cols + col),
                    [top, right, bottom, left],
                ));
            }
        }

        self.scramble(&mut tiles);

        let grid: Vec<Vec<Tile>> = tiles
            .chunks(cols)
            .map(<[Tile]>::to_vec)
            .collect();
        Puzzle::from_rows(grid)
    }

    fn edge_values(&mut self, rows: usize, cols: usize) -> Vec<Vec<i32>> {
        (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| self.rng.random_range(0..EDGE_ALPHABET_SIZE))
                    .collect()
            })
            .collect()
    }

    // Random orientation per tile, then a Fisher-Yates pass over positions
    fn scramble(&mut self, tiles: &mut [Tile]) {
        for tile in tiles.iter_mut() {
            let turns = self.rng.random_range(0..SIDE_COUNT);
            *tile = tile.rotated(turns);
        }
        for i in (1..tiles.len()).rev() {
            let j = self.rng.random_range(0..=i);
            tiles.swap(i, j);
        }
    }
}

fn boundary(values: &[Vec<i32>], row: usize, col: usize) -> i32 {
    values
        .get(row)
        .and_then(|r| r.get(col))
        .copied()
        .unwrap_or_default()
}

/// Spreadsheet-style label for a tile index: A..Z, then AA, AB, ...
fn label_for(index: usize) -> String {
    let mut n = index;
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}
