//! Tests for chain accessors and rendering

#[cfg(test)]
mod tests {
    use dominochain::domino::chain::Chain;
    use dominochain::domino::{Placement, Tile};

    fn sample_chain() -> Chain {
        vec![
            Placement::upright(Tile::new(1, 2)),
            Placement::flipped(Tile::new(3, 2)),
            Placement::upright(Tile::new(3, 1)),
        ]
        .into()
    }

    #[test]
    fn test_empty_chain() {
        let chain = Chain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.open_end(), None);
        assert_eq!(chain.closing_face(), None);
        assert_eq!(chain.to_string(), "");
    }

    // Tests open end follows the last placement's right face
    // Verified by reading the left face instead
    #[test]
    fn test_open_end_and_closing_face() {
        let chain = sample_chain();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.closing_face(), Some(1));
        assert_eq!(chain.open_end(), Some(1));
    }

    // Tests rendering uses oriented faces
    // Verified by rendering canonical tiles
    #[test]
    fn test_display_uses_orientation() {
        assert_eq!(sample_chain().to_string(), "[1|2] [2|3] [3|1]");
    }

    #[test]
    fn test_tiles_discard_orientation() {
        let tiles: Vec<Tile> = sample_chain().tiles().collect();

        assert_eq!(
            tiles,
            vec![Tile::new(1, 2), Tile::new(3, 2), Tile::new(3, 1)]
        );
    }

    #[test]
    fn test_push_and_collect() {
        let mut pushed = Chain::new();
        pushed.push(Placement::upright(Tile::new(0, 4)));
        pushed.push(Placement::upright(Tile::new(4, 0)));

        let collected: Chain = [Tile::new(0, 4), Tile::new(4, 0)]
            .into_iter()
            .map(Placement::upright)
            .collect();

        assert_eq!(pushed, collected);
        assert_eq!(pushed.placements().len(), 2);
    }
}
