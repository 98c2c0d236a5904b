//! Canonical domino tiles and their oriented placements
//!
//! A [`Tile`] is stored exactly as it was generated. Orientation only exists on a
//! [`Placement`], so the same tile can appear upright in one chain and flipped in
//! another without either chain touching the canonical value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric value printed on one end of a tile
pub type Face = u8;

/// A double-ended domino piece as generated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    /// First face, the left face when placed upright
    pub side_a: Face,
    /// Second face, the right face when placed upright
    pub side_b: Face,
}

impl Tile {
    /// Create a tile from its two faces
    pub const fn new(side_a: Face, side_b: Face) -> Self {
        Self { side_a, side_b }
    }

    /// Both faces carry the same value
    pub const fn is_double(&self) -> bool {
        self.side_a == self.side_b
    }

    /// Orientation-independent key, smaller face first
    pub const fn canonical(&self) -> (Face, Face) {
        if self.side_a <= self.side_b {
            (self.side_a, self.side_b)
        } else {
            (self.side_b, self.side_a)
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.side_a, self.side_b)
    }
}

/// Which way round a tile sits inside a chain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// `side_a` on the left, `side_b` on the right
    #[default]
    Upright,
    /// `side_b` on the left, `side_a` on the right
    Flipped,
}

/// A tile together with the orientation it was placed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    tile: Tile,
    orientation: Orientation,
}

impl Placement {
    /// Place a tile with the given orientation
    pub const fn new(tile: Tile, orientation: Orientation) -> Self {
        Self { tile, orientation }
    }

    /// Place a tile as generated
    pub const fn upright(tile: Tile) -> Self {
        Self::new(tile, Orientation::Upright)
    }

    /// Place a tile with its faces swapped
    pub const fn flipped(tile: Tile) -> Self {
        Self::new(tile, Orientation::Flipped)
    }

    /// The canonical tile this placement was drawn from
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Orientation chosen for this placement
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Face touching the previous placement
    pub const fn left(&self) -> Face {
        match self.orientation {
            Orientation::Upright => self.tile.side_a,
            Orientation::Flipped => self.tile.side_b,
        }
    }

    /// Face touching the next placement
    pub const fn right(&self) -> Face {
        match self.orientation {
            Orientation::Upright => self.tile.side_b,
            Orientation::Flipped => self.tile.side_a,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left(), self.right())
    }
}

/// Render tiles as space-separated `[a|b]` pairs
pub fn render_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
