//! Domino data model
//!
//! This module contains the value types shared by every algorithm:
//! - Canonical tiles as generated and persisted
//! - Oriented placements of those tiles
//! - Chains of placements

/// Chains of oriented placements
pub mod chain;
/// Canonical tiles, orientations and placements
pub mod tile;

pub use chain::Chain;
pub use tile::{Face, Orientation, Placement, Tile};
