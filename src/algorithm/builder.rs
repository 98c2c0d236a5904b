//! Greedy single-pass chain construction

use crate::algorithm::validator::is_valid;
use crate::domino::{Chain, Face, Placement, Tile};
use rand::Rng;

/// Outcome of one greedy build
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreedyBuild {
    /// Placements in the order they were appended
    pub chain: Chain,
    /// Tiles that never found a matching open end, in pool order
    pub leftover: Vec<Tile>,
    /// Whether the chain closes into a valid cycle
    pub valid: bool,
}

/// Build one chain by first-fit extension from a random starting tile
///
/// The starting tile is placed as generated. After that the remaining pool is
/// scanned in order and the first tile with a face equal to the open end is
/// appended, upright when its first face matches and flipped when only its
/// second face does. Building stops at the first scan that finds nothing.
/// There is no backtracking, so the chain may be partial or open.
pub fn build_chain<R: Rng + ?Sized>(tiles: &[Tile], rng: &mut R) -> GreedyBuild {
    let mut pool = tiles.to_vec();
    let mut chain = Chain::new();

    if pool.is_empty() {
        return GreedyBuild {
            chain,
            leftover: pool,
            valid: false,
        };
    }

    let start = rng.random_range(0..pool.len());
    chain.push(Placement::upright(pool.remove(start)));

    while let Some(open) = chain.open_end() {
        let Some((index, placement)) = first_fit(&pool, open) else {
            break;
        };
        pool.remove(index);
        chain.push(placement);
    }

    let valid = is_valid(chain.placements());
    log::debug!(
        "greedy build placed {} of {} tiles (valid: {valid})",
        chain.len(),
        tiles.len()
    );

    GreedyBuild {
        chain,
        leftover: pool,
        valid,
    }
}

fn first_fit(pool: &[Tile], open: Face) -> Option<(usize, Placement)> {
    pool.iter().enumerate().find_map(|(index, &tile)| {
        if tile.side_a == open {
            Some((index, Placement::upright(tile)))
        } else if tile.side_b == open {
            Some((index, Placement::flipped(tile)))
        } else {
            None
        }
    })
}
