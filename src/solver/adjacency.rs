//! Adjacency validation rules for candidate placements
//!
//! All checks are pure and total: a candidate rotation either fits the next
//! open cell or it does not. Because every placement is validated against
//! its left and top neighbours at insertion time, no board state with an
//! unchecked adjacency is ever constructed.

use crate::board::tile::{BOTTOM, Edges, LEFT, RIGHT, TOP};
use crate::solver::engine::Placement;

/// Test whether `left` placed to the left of `right` matches horizontally
pub const fn matches_horizontally(left: Edges, right: Edges) -> bool {
    left[RIGHT] == right[LEFT]
}

/// Test whether `top` placed above `bottom` matches vertically
pub const fn matches_vertically(top: Edges, bottom: Edges) -> bool {
    top[BOTTOM] == bottom[TOP]
}

/// Test whether a candidate rotation fits the next open cell
///
/// `placements` is the row-major placement stack so far. In the first row a
/// candidate only needs to match the tile to its left (or open the row); in
/// later rows it must also match the tile directly above it.
pub fn is_placeable(candidate: Edges, placements: &[Placement], row_length: usize) -> bool {
    if row_length == 0 {
        return false;
    }

    let column = placements.len() % row_length;
    let beside_ok = column == 0
        || placements
            .last()
            .is_some_and(|left| matches_horizontally(left.edges, candidate));
    if !beside_ok {
        return false;
    }

    if placements.len() < row_length {
        return true;
    }
    placements
        .get(placements.len() - row_length)
        .is_some_and(|above| matches_vertically(above.edges, candidate))
}
