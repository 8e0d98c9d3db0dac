//! Corner, border and interior classification by unmatched edge count

use crate::io::error::{ReassemblyError, Result};
use crate::spatial::tile::id_product;
use crate::spatial::{TileId, TileSet};

/// Tile identifiers bucketed by position class
///
/// Borders hold only tiles with exactly one unmatched edge; use
/// [`TileGroups::perimeter`] for corners and borders together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileGroups {
    /// Tiles with two unmatched edges
    pub corners: Vec<TileId>,
    /// Tiles with one unmatched edge
    pub borders: Vec<TileId>,
    /// Tiles with no unmatched edge
    pub interiors: Vec<TileId>,
}

impl TileGroups {
    /// Corner and border tiles together, corners first
    pub fn perimeter(&self) -> Vec<TileId> {
        let mut ids = self.corners.clone();
        ids.extend(self.borders.iter().filter(|id| !self.corners.contains(*id)));
        ids
    }

    /// Product of the corner identifiers
    ///
    /// # Errors
    ///
    /// Returns `ProductOverflow` if the product does not fit in a `u64`
    pub fn corner_product(&self) -> Result<u64> {
        id_product(&self.corners)
    }
}

/// Classify every tile by how many of its edges have no partner in the set
///
/// Only the outer boundary of the assembled picture is unmatched, so a
/// corner has two such edges, a border tile one and an interior tile none.
/// A single tile is corner, border and interior at once.
///
/// # Errors
///
/// Returns `UnexpectedEdgeCount` if any tile has three or four unmatched edges
pub fn classify(tiles: &TileSet) -> Result<TileGroups> {
    let mut groups = TileGroups::default();

    if tiles.len() == 1 {
        groups.corners = tiles.ids().collect();
        groups.borders = groups.corners.clone();
        groups.interiors = groups.corners.clone();
        return Ok(groups);
    }

    let frequencies = tiles.edge_frequencies();
    for tile in tiles.iter() {
        let unmatched = tile
            .edges()
            .iter()
            .filter(|edge| frequencies.get(&edge.canonical()).copied() == Some(1))
            .count();

        match unmatched {
            0 => groups.interiors.push(tile.id()),
            1 => groups.borders.push(tile.id()),
            2 => groups.corners.push(tile.id()),
            _ => {
                return Err(ReassemblyError::UnexpectedEdgeCount {
                    tile_id: tile.id(),
                    unmatched,
                });
            }
        }
    }

    Ok(groups)
}
