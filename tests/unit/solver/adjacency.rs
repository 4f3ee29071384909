//! Tests for adjacency validation of candidate placements

#[cfg(test)]
mod tests {
    use edgematch::board::tile::Edges;
    use edgematch::solver::adjacency::{is_placeable, matches_horizontally, matches_vertically};
    use edgematch::solver::engine::Placement;

    fn placed(edges: Edges) -> Placement {
        Placement { tile: 0, edges }
    }

    // Tests the horizontal rule: left's right value against right's left value
    // Verified by comparing the wrong edge indices
    #[test]
    fn test_matches_horizontally() {
        assert!(matches_horizontally([0, 5, 0, 0], [0, 0, 0, 5]));
        assert!(!matches_horizontally([0, 5, 0, 0], [0, 0, 0, 6]));
        // Independent of the other edges
        assert!(matches_horizontally([9, 5, 1, 3], [2, 8, 4, 5]));
    }

    // Tests the vertical rule: top's bottom value against bottom's top value
    // Verified by comparing the wrong edge indices
    #[test]
    fn test_matches_vertically() {
        assert!(matches_vertically([0, 0, 7, 0], [7, 0, 0, 0]));
        assert!(!matches_vertically([0, 0, 7, 0], [8, 0, 0, 0]));
    }

    // Tests that the first cell of the board accepts any candidate
    // Verified by requiring a neighbour match unconditionally
    #[test]
    fn test_first_cell_is_unconstrained() {
        assert!(is_placeable([1, 2, 3, 4], &[], 3));
    }

    // Tests the horizontal constraint within the first row
    // Verified by skipping the horizontal check in the first row
    #[test]
    fn test_first_row_checks_left_neighbour() {
        let row = [placed([0, 5, 0, 0])];
        assert!(is_placeable([0, 0, 0, 5], &row, 3));
        assert!(!is_placeable([0, 0, 0, 6], &row, 3));
    }

    // Tests that a column-zero candidate only checks the tile above
    // Verified by matching against the last placed tile instead
    #[test]
    fn test_row_start_checks_above_only() {
        // Completed first row of length 2; next placement is at (1, 0)
        let row = [placed([0, 9, 3, 0]), placed([0, 0, 4, 9])];
        assert!(is_placeable([3, 1, 1, 1], &row, 2));
        assert!(!is_placeable([4, 1, 1, 1], &row, 2));
    }

    // Tests that interior cells check both neighbours
    // Verified by dropping either half of the check
    #[test]
    fn test_interior_cell_checks_both_neighbours() {
        // First row [A B], second row started with C; candidate lands at (1, 1)
        let placements = [
            placed([0, 9, 3, 0]),
            placed([0, 0, 4, 9]),
            placed([3, 6, 0, 0]),
        ];
        assert!(is_placeable([4, 0, 0, 6], &placements, 2));
        // Above matches, left does not
        assert!(!is_placeable([4, 0, 0, 7], &placements, 2));
        // Left matches, above does not
        assert!(!is_placeable([5, 0, 0, 6], &placements, 2));
    }

    // Tests the degenerate zero row length
    // Verified by letting the modulo operation divide by zero
    #[test]
    fn test_zero_row_length_is_never_placeable() {
        assert!(!is_placeable([1, 2, 3, 4], &[], 0));
    }
}
