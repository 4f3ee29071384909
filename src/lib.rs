//! Exhaustive backtracking solver for edge-matching tile puzzles
//!
//! Every tile carries four labelled edge values. The solver enumerates all
//! arrangements of tile positions and rotations in which each tile's right
//! edge matches its right neighbour's left edge, each bottom edge matches
//! the tile below, and every tile is used exactly once.

#![forbid(unsafe_code)]

/// Tile, puzzle and solution data structures
pub mod board;
/// Seeded construction of solvable puzzle instances
pub mod generator;
/// Input/output operations and error handling
pub mod io;
/// The exhaustive backtracking search engine
pub mod solver;

pub use io::error::{Result, SolverError};
