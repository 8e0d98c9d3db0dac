//! Part 1 and Part 2 answers for a puzzle input

use crate::algorithm::classifier::classify;
use crate::algorithm::monster::{MonsterScan, Pattern};
use crate::algorithm::solver::solve;
use crate::io::error::{ReassemblyError, Result};
use crate::spatial::{Arrangement, TileSet};

/// Product of the four corner tile identifiers
///
/// # Errors
///
/// Returns `UnexpectedEdgeCount` if classification fails,
/// `InvalidTileCount` if the set does not have exactly four corners and
/// `ProductOverflow` if the identifiers are too large to multiply
pub fn part1(tiles: &TileSet) -> Result<u64> {
    let groups = classify(tiles)?;
    if groups.corners.len() != 4 {
        return Err(ReassemblyError::InvalidTileCount { count: tiles.len() });
    }
    groups.corner_product()
}

/// Sea monster scan of the stitched arrangement
///
/// # Errors
///
/// Returns `NoMonsters` if no orientation of the image contains a sea monster
pub fn part2(arrangement: &Arrangement) -> Result<MonsterScan> {
    MonsterScan::run(&arrangement.stitch(), &Pattern::sea_monster()?)
}

/// Both answers for one puzzle input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Product of the corner tile identifiers
    pub part1: u64,
    /// Water roughness of the reassembled image
    pub part2: usize,
}

impl Answers {
    /// Parse, arrange and scan a puzzle input in one go
    ///
    /// # Errors
    ///
    /// Propagates any parsing, classification, placement or scan error
    pub fn from_input(input: &str) -> Result<Self> {
        let tiles = TileSet::parse(input)?;
        let part1 = part1(&tiles)?;
        let arrangement = solve(tiles)?;
        let scan = part2(&arrangement)?;
        Ok(Self {
            part1,
            part2: scan.roughness,
        })
    }
}
