//! Tests for spinner feedback during enumeration

#[cfg(test)]
mod tests {
    use dominochain::algorithm::enumerator::{SearchObserver, SearchStats, find_variations_with};
    use dominochain::domino::Tile;
    use dominochain::io::configuration::SPINNER_UPDATE_STEPS;
    use dominochain::io::progress::SearchProgress;

    // Tests hidden progress drives a search without output
    // Verified by panicking on hidden bars
    #[test]
    fn test_hidden_progress_as_observer() {
        let mut progress = SearchProgress::new(false);
        let tiles = [Tile::new(1, 2), Tile::new(2, 3), Tile::new(3, 1)];

        let found = find_variations_with(&tiles, &mut progress);
        progress.finish();

        assert_eq!(found.chains.len(), 3);
    }

    // Tests visible spinner lifecycle
    // Verified by finishing before any update
    #[test]
    fn test_visible_progress_lifecycle() {
        let mut progress = SearchProgress::new(true);

        let mut stats = SearchStats::default();
        for step in 1..=SPINNER_UPDATE_STEPS * 2 {
            stats.steps = step;
            progress.on_step(&stats);
        }
        stats.variations = 1;
        progress.on_variation(&stats);

        progress.finish();
    }
}
