//! Completed square grid of placed tiles

use std::fmt;

use ndarray::{Array2, s};

use crate::io::error::{ReassemblyError, Result};
use crate::spatial::image::Image;
use crate::spatial::tile::{Side, Tile, TileId, id_product};

/// Placed tiles indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    grid: Array2<Tile>,
}

impl Arrangement {
    /// Build an arrangement from tiles in row-major order
    ///
    /// # Errors
    ///
    /// Returns `IncompleteArrangement` if the tile count is not `side * side`
    pub fn from_row_major(side: usize, tiles: Vec<Tile>) -> Result<Self> {
        let placed = tiles.len();
        let grid = Array2::from_shape_vec((side, side), tiles).map_err(|_shape_error| {
            ReassemblyError::IncompleteArrangement {
                placed,
                expected: side * side,
                leftover: 0,
            }
        })?;
        Ok(Self { grid })
    }

    /// Tiles per side
    pub fn side_length(&self) -> usize {
        self.grid.nrows()
    }

    /// Tile at the given cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.grid.get((row, col))
    }

    /// Borrow the underlying grid
    pub const fn grid(&self) -> &Array2<Tile> {
        &self.grid
    }

    /// Identifiers of the four corner tiles (fewer for a 1x1 arrangement)
    pub fn corner_ids(&self) -> Vec<TileId> {
        let last = self.side_length().saturating_sub(1);
        let mut ids: Vec<TileId> = [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .filter_map(|&cell| self.grid.get(cell).map(Tile::id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Product of the corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns `ProductOverflow` if the product does not fit in a `u64`
    pub fn corner_product(&self) -> Result<u64> {
        id_product(&self.corner_ids())
    }

    /// Check that every pair of neighbours meets on exactly matching edges
    ///
    /// # Errors
    ///
    /// Returns `Misaligned` for the first neighbour pair whose shared edges
    /// differ in orientation-sensitive comparison
    pub fn validate(&self) -> Result<()> {
        for ((row, col), tile) in self.grid.indexed_iter() {
            for (side, neighbour) in [
                (Side::Right, self.grid.get((row, col + 1))),
                (Side::Bottom, self.grid.get((row + 1, col))),
            ] {
                let Some(neighbour) = neighbour else {
                    continue;
                };
                if !tile.edge(side).matches(&neighbour.edge(side.opposite())) {
                    return Err(ReassemblyError::Misaligned {
                        tile_id: neighbour.id(),
                        neighbour_id: tile.id(),
                        side,
                    });
                }
            }
        }
        Ok(())
    }

    /// Join tile interiors (borders removed) into one picture
    pub fn stitch(&self) -> Image {
        let inner = self
            .grid
            .iter()
            .next()
            .map_or(0, |tile| tile.interior().nrows());
        let size = self.side_length() * inner;
        let mut pixels = Array2::from_elem((size, size), false);

        for ((row, col), tile) in self.grid.indexed_iter() {
            let top = row * inner;
            let left = col * inner;
            pixels
                .slice_mut(s![top..top + inner, left..left + inner])
                .assign(tile.interior());
        }
        Image::new(pixels)
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let ids: Vec<String> = row.iter().map(|tile| tile.id().to_string()).collect();
            writeln!(f, "{}", ids.join("\t"))?;
        }
        Ok(())
    }
}
