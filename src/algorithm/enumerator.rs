//! Exhaustive enumeration of closed chains by depth-first backtracking
//!
//! Every branch owns its own copy of the remaining pool and the partial chain,
//! so sibling branches never observe each other's choices. A tile is only
//! recursed into after it has been checked against the open end, which keeps
//! the search tractable for the small tile counts it targets. The worst case
//! remains factorial in the pool size.

use crate::algorithm::validator::is_valid;
use crate::domino::{Chain, Placement, Tile};
use std::collections::HashSet;

/// Receives progress notifications while the search runs
pub trait SearchObserver {
    /// A tile was appended to a partial chain
    fn on_step(&mut self, _stats: &SearchStats) {}

    /// A closed chain using every tile was found
    fn on_variation(&mut self, _stats: &SearchStats) {}
}

/// Observer that ignores all notifications
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SearchObserver for Silent {}

/// Counters collected during one enumeration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Extensions of a partial chain
    pub steps: usize,
    /// Chains that used the whole pool
    pub leaves: usize,
    /// Full-length chains discarded for open ends
    pub rejected: usize,
    /// Closed chains reported
    pub variations: usize,
}

/// Closed chains in discovery order together with search counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variations {
    /// Every closed chain found, in traversal order
    pub chains: Vec<Chain>,
    /// Counters from the search that produced `chains`
    pub stats: SearchStats,
}

impl Variations {
    /// Drop chains identical to an earlier one, keeping discovery order
    ///
    /// Identical chains appear when the pool holds the same tile more than once.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        let mut seen = HashSet::new();
        self.chains.retain(|chain| seen.insert(chain.clone()));
        self
    }
}

/// Enumerate every closed chain over `tiles`
pub fn find_variations(tiles: &[Tile]) -> Variations {
    find_variations_with(tiles, &mut Silent)
}

/// Enumerate every closed chain over `tiles`, reporting progress to `observer`
///
/// Branches are taken in pool-index order, so the result order is fixed for a
/// fixed input order. The first placement may be any tile, placed upright.
/// Later placements attach upright when their first face meets the open end and
/// flipped when only their second face does.
pub fn find_variations_with<O: SearchObserver + ?Sized>(
    tiles: &[Tile],
    observer: &mut O,
) -> Variations {
    let mut search = Search {
        observer,
        chains: Vec::new(),
        stats: SearchStats::default(),
    };
    search.explore(tiles, &Chain::new());

    log::debug!(
        "enumeration over {} tiles: {} steps, {} leaves, {} variations",
        tiles.len(),
        search.stats.steps,
        search.stats.leaves,
        search.stats.variations
    );

    Variations {
        chains: search.chains,
        stats: search.stats,
    }
}

struct Search<'a, O: SearchObserver + ?Sized> {
    observer: &'a mut O,
    chains: Vec<Chain>,
    stats: SearchStats,
}

impl<O: SearchObserver + ?Sized> Search<'_, O> {
    fn explore(&mut self, remaining: &[Tile], chain: &Chain) {
        if remaining.is_empty() {
            self.record_leaf(chain);
            return;
        }

        for (index, &tile) in remaining.iter().enumerate() {
            let Some(placement) = extension(chain, tile) else {
                continue;
            };

            self.stats.steps += 1;
            self.observer.on_step(&self.stats);

            let mut next_remaining = remaining.to_vec();
            next_remaining.remove(index);
            let mut next_chain = chain.clone();
            next_chain.push(placement);

            self.explore(&next_remaining, &next_chain);
        }
    }

    fn record_leaf(&mut self, chain: &Chain) {
        if chain.is_empty() {
            return;
        }

        self.stats.leaves += 1;
        if is_valid(chain.placements()) {
            self.stats.variations += 1;
            self.chains.push(chain.clone());
            self.observer.on_variation(&self.stats);
        } else {
            self.stats.rejected += 1;
        }
    }
}

/// How `tile` may extend `chain`, if at all
fn extension(chain: &Chain, tile: Tile) -> Option<Placement> {
    match chain.open_end() {
        None => Some(Placement::upright(tile)),
        Some(open) if tile.side_a == open => Some(Placement::upright(tile)),
        Some(open) if tile.side_b == open => Some(Placement::flipped(tile)),
        Some(_) => None,
    }
}
