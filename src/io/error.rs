//! Error types for tile loading, matching and arrangement solving

use std::fmt;
use std::path::PathBuf;

use crate::spatial::tile::{Side, TileId};

/// Main error type for all reassembly operations
#[derive(Debug)]
pub enum ReassemblyError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A tile record does not have the expected shape
    ///
    /// Covers bad `Tile <id>:` headers, unknown pixel markers, ragged rows,
    /// non-square blocks and tiles whose size differs from the rest of the set.
    MalformedTile {
        /// Tile identifier, when the header could be read
        tile_id: Option<TileId>,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Tile count cannot form a square arrangement
    InvalidTileCount {
        /// Number of tiles that were supplied
        count: usize,
    },

    /// A tile has an unmatched edge count outside {0, 1, 2}
    UnexpectedEdgeCount {
        /// Offending tile
        tile_id: TileId,
        /// Number of edges with no partner in the pool
        unmatched: usize,
    },

    /// No tile presents an edge matching the required one
    NoMatch {
        /// Tile whose edge needed a partner
        tile_id: TileId,
        /// Side of that tile that could not be matched
        side: Side,
    },

    /// Two tiles share an edge but cannot be oriented to fit
    Misaligned {
        /// Tile being placed
        tile_id: TileId,
        /// Neighbour it was aligned against
        neighbour_id: TileId,
        /// Side of the neighbour where the tile sits
        side: Side,
    },

    /// Solver ran out of plan or tiles before the grid was complete
    IncompleteArrangement {
        /// Number of cells filled
        placed: usize,
        /// Number of cells in the arrangement
        expected: usize,
        /// Tiles still left in the pool
        leftover: usize,
    },

    /// Product of tile identifiers does not fit in a `u64`
    ProductOverflow {
        /// Identifiers being multiplied
        ids: Vec<TileId>,
    },

    /// Search pattern definition is unusable
    InvalidPattern {
        /// Description of the problem
        reason: String,
    },

    /// No orientation of the stitched image contains the search pattern
    NoMonsters {
        /// Side length of the stitched image
        image_size: usize,
    },

    /// Stitched picture has no pixels to export
    EmptyImage,

    /// Failed to save an exported image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for ReassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedTile {
                tile_id: Some(id),
                reason,
            } => {
                write!(f, "Malformed tile {id}: {reason}")
            }
            Self::MalformedTile {
                tile_id: None,
                reason,
            } => {
                write!(f, "Malformed tile: {reason}")
            }
            Self::InvalidTileCount { count } => {
                write!(f, "{count} tiles cannot form a square arrangement")
            }
            Self::UnexpectedEdgeCount { tile_id, unmatched } => {
                write!(
                    f,
                    "Tile {tile_id} has {unmatched} unmatched edges (expected 0, 1 or 2)"
                )
            }
            Self::NoMatch { tile_id, side } => {
                write!(f, "No tile matches the {side} edge of tile {tile_id}")
            }
            Self::Misaligned {
                tile_id,
                neighbour_id,
                side,
            } => {
                write!(
                    f,
                    "Tile {tile_id} cannot be aligned on the {side} side of tile {neighbour_id}"
                )
            }
            Self::IncompleteArrangement {
                placed,
                expected,
                leftover,
            } => {
                write!(
                    f,
                    "Arrangement incomplete: {placed}/{expected} cells placed, {leftover} tiles left over"
                )
            }
            Self::ProductOverflow { ids } => {
                let listed: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "Product of tile ids {} overflows u64", listed.join(" * "))
            }
            Self::InvalidPattern { reason } => {
                write!(f, "Invalid search pattern: {reason}")
            }
            Self::NoMonsters { image_size } => {
                write!(
                    f,
                    "No orientation of the {image_size}x{image_size} image contains a sea monster"
                )
            }
            Self::EmptyImage => {
                write!(f, "Stitched image has no pixels")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ReassemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reassembly results
pub type Result<T> = std::result::Result<T, ReassemblyError>;

impl From<std::io::Error> for ReassemblyError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed tile error
pub fn malformed_tile(tile_id: Option<TileId>, reason: &impl ToString) -> ReassemblyError {
    ReassemblyError::MalformedTile {
        tile_id,
        reason: reason.to_string(),
    }
}
