//! Ordered sequences of oriented tiles

use crate::domino::tile::{Face, Placement, Tile};
use std::fmt;

/// An ordered sequence of placements
///
/// A chain does not enforce adjacency on insertion; builders decide what to
/// append and [`crate::algorithm::validator`] judges the result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Chain {
    placements: Vec<Placement>,
}

impl Chain {
    /// Create an empty chain
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Append a placement at the open end
    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Placements in chain order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placements
    pub const fn len(&self) -> usize {
        self.placements.len()
    }

    /// Chain holds no placements
    pub const fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Right face of the last placement, where the next tile must attach
    pub fn open_end(&self) -> Option<Face> {
        self.placements.last().map(Placement::right)
    }

    /// Left face of the first placement, which the last tile must meet to close the chain
    pub fn closing_face(&self) -> Option<Face> {
        self.placements.first().map(Placement::left)
    }

    /// Canonical tiles in chain order, orientation discarded
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.placements.iter().map(Placement::tile)
    }
}

impl From<Vec<Placement>> for Chain {
    fn from(placements: Vec<Placement>) -> Self {
        Self { placements }
    }
}

impl FromIterator<Placement> for Chain {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, placement) in self.placements.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{placement}")?;
        }
        Ok(())
    }
}
