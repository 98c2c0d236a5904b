//! Closed chain validation
//!
//! A chain is valid when it is non-empty, every touching pair of faces
//! matches, and the free face of the first placement equals the free face of
//! the last. A failed check is a value, never an error.

use crate::domino::{Face, Placement};
use std::fmt;

/// First reason a chain fails validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainDefect {
    /// Chain has no placements
    EmptyChain,
    /// Placement `index` does not meet placement `index + 1`
    BrokenAdjacency {
        /// Position of the earlier placement
        index: usize,
        /// Right face of the earlier placement
        right: Face,
        /// Left face of the later placement
        left: Face,
    },
    /// Adjacency holds but the chain does not close into a cycle
    OpenEnds {
        /// Left face of the first placement
        left: Face,
        /// Right face of the last placement
        right: Face,
    },
}

impl fmt::Display for ChainDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChain => write!(f, "chain is empty"),
            Self::BrokenAdjacency { index, right, left } => write!(
                f,
                "placement {index} ends in {right} but placement {} starts with {left}",
                index + 1
            ),
            Self::OpenEnds { left, right } => {
                write!(f, "chain opens with {left} but ends with {right}")
            }
        }
    }
}

/// Find the first defect in a sequence of placements
///
/// Adjacency is checked front to back before closure, so a chain with both a
/// broken joint and open ends reports the joint.
pub fn diagnose(placements: &[Placement]) -> Option<ChainDefect> {
    let (Some(first), Some(last)) = (placements.first(), placements.last()) else {
        return Some(ChainDefect::EmptyChain);
    };

    for (index, pair) in placements.windows(2).enumerate() {
        if let [earlier, later] = pair
            && earlier.right() != later.left()
        {
            return Some(ChainDefect::BrokenAdjacency {
                index,
                right: earlier.right(),
                left: later.left(),
            });
        }
    }

    if first.left() == last.right() {
        None
    } else {
        Some(ChainDefect::OpenEnds {
            left: first.left(),
            right: last.right(),
        })
    }
}

/// Check that placements form a closed chain
pub fn is_valid(placements: &[Placement]) -> bool {
    diagnose(placements).is_none()
}
