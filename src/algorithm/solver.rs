//! Greedy arrangement of tiles by walking outward from a corner
//!
//! The solver anchors a corner tile at (0, 0), fills the first row left to
//! right and the first column top to bottom, then repeats on the shrinking
//! square that remains. The corner of each smaller square is found by
//! reclassifying the remaining pool, since border status is relative to the
//! tiles that are left. Every placement is forced by edge identity, so there
//! is no backtracking: a missing match means the input is unsolvable.

use log::{debug, trace};
use ndarray::Array2;

use crate::algorithm::classifier::classify;
use crate::io::error::{ReassemblyError, Result};
use crate::spatial::{Arrangement, Side, Tile, TileId, TileSet};

/// One scheduled placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First corner at (0, 0)
    Anchor,
    /// Top-left corner of the remaining square at (`ring`, `ring`)
    RingCorner {
        /// Index of the square being filled
        ring: usize,
    },
    /// Cell filled from an already placed neighbour
    Along {
        /// Target cell (row, col)
        cell: (usize, usize),
        /// Placed neighbour (row, col)
        neighbour: (usize, usize),
        /// Side of the neighbour the new tile is placed on
        side: Side,
    },
}

/// Placement order for a square of the given side length
///
/// Yields exactly `side * side` placements, each cell once.
pub fn placement_plan(side: usize) -> Vec<Placement> {
    let mut plan = Vec::with_capacity(side * side);
    for ring in 0..side {
        plan.push(if ring == 0 {
            Placement::Anchor
        } else {
            Placement::RingCorner { ring }
        });
        for col in ring + 1..side {
            plan.push(Placement::Along {
                cell: (ring, col),
                neighbour: (ring, col - 1),
                side: Side::Right,
            });
        }
        for row in ring + 1..side {
            plan.push(Placement::Along {
                cell: (row, ring),
                neighbour: (row - 1, ring),
                side: Side::Bottom,
            });
        }
    }
    plan
}

/// Stepwise arrangement solver owning the tile pool
///
/// Tiles move from the pool into the grid one placement at a time, so each
/// tile has a single owner throughout.
#[derive(Debug, Clone)]
pub struct ArrangementSolver {
    pool: TileSet,
    grid: Array2<Option<Tile>>,
    plan: Vec<Placement>,
    cursor: usize,
    side: usize,
}

impl ArrangementSolver {
    /// Prepare to arrange the given tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileCount` if the tiles cannot form a square
    pub fn new(tiles: TileSet) -> Result<Self> {
        let side = tiles.side_length()?;
        Ok(Self {
            pool: tiles,
            grid: Array2::from_elem((side, side), None),
            plan: placement_plan(side),
            cursor: 0,
            side,
        })
    }

    /// Tiles per side of the arrangement
    pub const fn side_length(&self) -> usize {
        self.side
    }

    /// Number of cells filled so far
    pub const fn placed_count(&self) -> usize {
        self.cursor
    }

    /// Number of cells in the arrangement
    pub const fn total(&self) -> usize {
        self.side * self.side
    }

    /// Tiles not yet placed
    pub const fn pool(&self) -> &TileSet {
        &self.pool
    }

    /// Tile placed at a cell, if any
    pub fn placed(&self, row: usize, col: usize) -> Option<&Tile> {
        cell_tile(&self.grid, (row, col))
    }

    /// Perform the next scheduled placement
    ///
    /// Returns `false` once every placement has been made.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` or `Misaligned` when the required neighbour cannot
    /// be found or oriented, and `UnexpectedEdgeCount` when reclassifying the
    /// pool fails
    pub fn place_next(&mut self) -> Result<bool> {
        let Some(&step) = self.plan.get(self.cursor) else {
            return Ok(false);
        };

        match step {
            Placement::Anchor => self.place_anchor()?,
            Placement::RingCorner { ring } => self.place_ring_corner(ring)?,
            Placement::Along {
                cell,
                neighbour,
                side,
            } => self.place_along(cell, neighbour, side)?,
        }

        self.cursor += 1;
        Ok(true)
    }

    /// Validate and return the completed arrangement
    ///
    /// # Errors
    ///
    /// Returns `IncompleteArrangement` if cells are empty or tiles are left in
    /// the pool, and `Misaligned` if any neighbour pair does not match exactly
    pub fn finish(self) -> Result<Arrangement> {
        let expected = self.total();
        let placed = self.grid.iter().filter(|cell| cell.is_some()).count();
        if placed != expected || !self.pool.is_empty() {
            return Err(ReassemblyError::IncompleteArrangement {
                placed,
                expected,
                leftover: self.pool.len(),
            });
        }

        let tiles: Vec<Tile> = self.grid.iter().flatten().cloned().collect();
        let arrangement = Arrangement::from_row_major(self.side, tiles)?;
        arrangement.validate()?;
        Ok(arrangement)
    }

    fn place_anchor(&mut self) -> Result<()> {
        let groups = classify(&self.pool)?;
        let id = groups
            .corners
            .first()
            .copied()
            .ok_or(ReassemblyError::InvalidTileCount {
                count: self.pool.len(),
            })?;
        let mut tile = self.take(id)?;

        if self.side > 1 {
            let faces_pool =
                |tile: &Tile, side: Side| self.pool.find_match(&tile.edge(side)).is_some();
            let mut turns = 0;
            while !(faces_pool(&tile, Side::Right) && faces_pool(&tile, Side::Bottom)) {
                if turns == 3 {
                    return Err(ReassemblyError::NoMatch {
                        tile_id: id,
                        side: Side::Right,
                    });
                }
                tile.rotate90();
                turns += 1;
            }
            trace!("anchor {id} rotated {turns} times");
        }

        debug!("anchored corner tile {id} at (0, 0)");
        self.store((0, 0), tile)
    }

    fn place_ring_corner(&mut self, ring: usize) -> Result<()> {
        let groups = classify(&self.pool)?;
        let incomplete = self.incomplete();
        let neighbour = cell_tile(&self.grid, (ring, ring - 1)).ok_or(incomplete)?;
        let edge = neighbour.edge(Side::Right);

        let id = groups
            .corners
            .iter()
            .copied()
            .find(|&id| self.pool.get(id).is_some_and(|tile| tile.has_border(&edge)))
            .ok_or(ReassemblyError::NoMatch {
                tile_id: neighbour.id(),
                side: Side::Right,
            })?;

        let mut tile = self.pool.remove(id).ok_or(ReassemblyError::NoMatch {
            tile_id: neighbour.id(),
            side: Side::Right,
        })?;
        tile.align_to(neighbour, Side::Right)?;

        debug!("placed corner tile {id} at ({ring}, {ring})");
        self.store((ring, ring), tile)
    }

    fn place_along(
        &mut self,
        cell: (usize, usize),
        neighbour: (usize, usize),
        side: Side,
    ) -> Result<()> {
        let incomplete = self.incomplete();
        let anchor = cell_tile(&self.grid, neighbour).ok_or(incomplete)?;
        let no_match = ReassemblyError::NoMatch {
            tile_id: anchor.id(),
            side,
        };

        let Some(id) = self.pool.find_match(&anchor.edge(side)) else {
            return Err(no_match);
        };
        let Some(mut tile) = self.pool.remove(id) else {
            return Err(no_match);
        };
        tile.align_to(anchor, side)?;

        debug!("placed tile {id} at {cell:?} ({side} of {})", anchor.id());
        self.store(cell, tile)
    }

    fn take(&mut self, id: TileId) -> Result<Tile> {
        let incomplete = self.incomplete();
        self.pool.remove(id).ok_or(incomplete)
    }

    fn store(&mut self, cell: (usize, usize), tile: Tile) -> Result<()> {
        let incomplete = self.incomplete();
        let slot = self.grid.get_mut(cell).ok_or(incomplete)?;
        *slot = Some(tile);
        Ok(())
    }

    fn incomplete(&self) -> ReassemblyError {
        ReassemblyError::IncompleteArrangement {
            placed: self.cursor,
            expected: self.total(),
            leftover: self.pool.len(),
        }
    }
}

fn cell_tile(grid: &Array2<Option<Tile>>, cell: (usize, usize)) -> Option<&Tile> {
    grid.get(cell).and_then(Option::as_ref)
}

/// Arrange every tile of the set into a validated square
///
/// # Errors
///
/// Propagates any placement or validation error from [`ArrangementSolver`]
pub fn solve(tiles: TileSet) -> Result<Arrangement> {
    let mut solver = ArrangementSolver::new(tiles)?;
    while solver.place_next()? {}
    solver.finish()
}
