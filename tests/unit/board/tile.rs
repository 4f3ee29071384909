//! Tests for tile rotation arithmetic and edge ordering

#[cfg(test)]
mod tests {
    use edgematch::board::tile::{
        BOTTOM, Edges, LEFT, RIGHT, TOP, Tile, edge_rotations, rotate_edges,
    };

    // Tests the four rotations of [a,b,c,d] in increasing rotation order
    // Verified by shifting in the opposite direction
    #[test]
    fn test_rotation_sequence() {
        let base: Edges = [1, 2, 3, 4];
        assert_eq!(
            edge_rotations(base),
            [[1, 2, 3, 4], [2, 3, 4, 1], [3, 4, 1, 2], [4, 1, 2, 3]]
        );
    }

    // Tests that the identity rotation leaves edges untouched
    // Verified by rotating unconditionally
    #[test]
    fn test_identity_rotation() {
        assert_eq!(rotate_edges([7, 0, 2, 5], 0), [7, 0, 2, 5]);
    }

    // Tests that turn counts wrap modulo four
    // Verified by removing the modulo reduction
    #[test]
    fn test_rotation_wraps() {
        let base: Edges = [1, 2, 3, 4];
        assert_eq!(rotate_edges(base, 4), base);
        assert_eq!(rotate_edges(base, 5), rotate_edges(base, 1));
    }

    // Tests that rotating a tile preserves its label
    // Verified by clearing the label during rotation
    #[test]
    fn test_rotated_tile_keeps_label() {
        let tile = Tile::new("A", [1, 2, 3, 4]);
        let rotated = tile.rotated(2);
        assert_eq!(rotated.label, "A");
        assert_eq!(rotated.edges, [3, 4, 1, 2]);
    }

    // Tests the side index convention against a known tile
    // Verified by permuting the index constants
    #[test]
    fn test_side_index_convention() {
        let tile = Tile::new("A", [1, 2, 3, 4]);
        assert_eq!(tile.edges.get(TOP), Some(&1));
        assert_eq!(tile.edges.get(RIGHT), Some(&2));
        assert_eq!(tile.edges.get(BOTTOM), Some(&3));
        assert_eq!(tile.edges.get(LEFT), Some(&4));
    }
}
