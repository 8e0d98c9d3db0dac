//! Spatial data structures for tiles and their arrangement
//!
//! This module contains spatial-related functionality including:
//! - Border fingerprinting
//! - Tiles and their rotation/mirroring
//! - Tile collections and the finished arrangement grid
//! - The stitched picture

/// Completed arrangement grid
pub mod arrangement;
/// Border fingerprints
pub mod edge;
/// Square pixel images and block transforms
pub mod image;
/// Tiles, sides and alignment
pub mod tile;
/// Owned tile collections
pub mod tile_set;

pub use arrangement::Arrangement;
pub use tile::{Side, Tile, TileId};
pub use tile_set::TileSet;
