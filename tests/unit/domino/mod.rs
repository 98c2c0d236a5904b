pub mod chain;
pub mod tile;
