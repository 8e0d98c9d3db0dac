//! Edge-matching reassembly of scrambled square image tiles
//!
//! Every tile border is fingerprinted so that matching borders can be found
//! regardless of how the tiles were rotated or mirrored. Tiles are classified
//! as corner, border or interior pieces, placed into a square grid starting
//! from a corner, and the stitched picture is scanned for sea monsters.

#![deny(unsafe_code)]

/// Classification, arrangement solving and pattern scanning
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Edges, tiles, tile sets, arrangements and images
pub mod spatial;

pub use io::error::{ReassemblyError, Result};
