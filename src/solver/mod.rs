//! The exhaustive backtracking search engine
//!
//! This module contains the complete search core:
//! - Adjacency validation rules
//! - The remaining-tile pool
//! - Rotation caching
//! - The recursive enumeration and its entry point

/// Adjacency validation rules for candidate placements
pub mod adjacency;
/// Recursive enumeration and the solve entry point
pub mod engine;
/// Remaining-tile pool tracking per search branch
pub mod pool;
/// Per-solve rotation caching
pub mod rotations;

pub use engine::{Solver, solve};
