//! Random tile set generation

use crate::domino::{Face, Tile};
use crate::io::configuration::MAX_FACE_COUNT;
use crate::io::error::{Result, invalid_input, invalid_parameter};
use rand::Rng;

/// Generate `count` tiles with faces drawn uniformly from `0..face_count`
///
/// Both faces are drawn independently, so repeated tiles and doubles are
/// expected. Tiles are returned in generation order.
///
/// # Errors
///
/// Returns an error if:
/// - `count` is zero
/// - `face_count` is zero or larger than [`MAX_FACE_COUNT`]
pub fn generate_tiles<R: Rng + ?Sized>(
    count: usize,
    face_count: Face,
    rng: &mut R,
) -> Result<Vec<Tile>> {
    if count == 0 {
        return Err(invalid_input(&count, &"tile count must be positive"));
    }
    if face_count == 0 || face_count > MAX_FACE_COUNT {
        return Err(invalid_parameter(
            "face_count",
            &face_count,
            &format!("must be between 1 and {MAX_FACE_COUNT}"),
        ));
    }

    let tiles: Vec<Tile> = (0..count)
        .map(|_| {
            let side_a = rng.random_range(0..face_count);
            let side_b = rng.random_range(0..face_count);
            Tile::new(side_a, side_b)
        })
        .collect();

    log::debug!("generated {count} tiles over {face_count} faces");
    Ok(tiles)
}
