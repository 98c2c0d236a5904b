//! Domino chain generation, greedy construction and exhaustive closed-chain enumeration
//!
//! The system generates a random set of double-ended tiles, builds one chain
//! from it by first-fit extension, and separately enumerates every ordering and
//! orientation of the whole set that closes into a cycle.

#![forbid(unsafe_code)]

/// Tile generation, chain building, validation and enumeration
pub mod algorithm;
/// Tiles, placements and chains
pub mod domino;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{DominoError, Result};
