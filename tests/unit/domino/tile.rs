//! Tests for canonical tiles, orientation and placement faces

#[cfg(test)]
mod tests {
    use dominochain::domino::tile::render_tiles;
    use dominochain::domino::{Orientation, Placement, Tile};

    // Tests tile rendering uses the pipe-delimited face pair
    // Verified by swapping the faces in the format string
    #[test]
    fn test_tile_display() {
        assert_eq!(Tile::new(3, 5).to_string(), "[3|5]");
        assert_eq!(Tile::new(0, 0).to_string(), "[0|0]");
    }

    // Tests double detection
    // Verified by comparing against a constant face
    #[test]
    fn test_is_double() {
        assert!(Tile::new(4, 4).is_double());
        assert!(!Tile::new(4, 2).is_double());
    }

    // Tests canonical key ignores orientation
    // Verified by returning faces unsorted
    #[test]
    fn test_canonical_orders_faces() {
        assert_eq!(Tile::new(5, 1).canonical(), (1, 5));
        assert_eq!(Tile::new(1, 5).canonical(), (1, 5));
        assert_eq!(Tile::new(2, 2).canonical(), (2, 2));
    }

    // Tests upright placement keeps generated faces
    // Verified by flipping upright placements
    #[test]
    fn test_upright_faces() {
        let placement = Placement::upright(Tile::new(1, 6));

        assert_eq!(placement.left(), 1);
        assert_eq!(placement.right(), 6);
        assert_eq!(placement.orientation(), Orientation::Upright);
        assert_eq!(placement.to_string(), "[1|6]");
    }

    // Tests flipped placement swaps faces without touching the tile
    // Verified by mutating the tile when flipping
    #[test]
    fn test_flipped_faces() {
        let tile = Tile::new(1, 6);
        let placement = Placement::flipped(tile);

        assert_eq!(placement.left(), 6);
        assert_eq!(placement.right(), 1);
        assert_eq!(placement.tile(), tile);
        assert_eq!(placement.to_string(), "[6|1]");
    }

    #[test]
    fn test_render_tiles() {
        let tiles = [Tile::new(1, 2), Tile::new(2, 3), Tile::new(3, 1)];

        assert_eq!(render_tiles(&tiles), "[1|2] [2|3] [3|1]");
        assert_eq!(render_tiles(&[]), "");
    }

    // Tests snapshot field names
    // Verified by renaming the tile fields
    #[test]
    fn test_tile_serializes_both_faces() {
        let json = serde_json::to_value(Tile::new(2, 4)).unwrap();

        assert_eq!(json["side_a"], 2);
        assert_eq!(json["side_b"], 4);
    }
}
