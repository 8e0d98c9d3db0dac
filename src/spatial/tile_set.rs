//! Owned collection of puzzle tiles keyed by identifier

use std::collections::{BTreeMap, HashMap};

use crate::io::error::{ReassemblyError, Result, malformed_tile};
use crate::io::input::records;
use crate::spatial::edge::Edge;
use crate::spatial::tile::{Tile, TileId};

/// Tiles keyed by identifier
///
/// The set exclusively owns every tile. Iteration is in ascending id order,
/// which makes every "pick any" choice made over the set reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    tiles: BTreeMap<TileId, Tile>,
}

impl TileSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            tiles: BTreeMap::new(),
        }
    }

    /// Collect already built tiles into a set
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if two tiles share an id
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut set = Self::new();
        for tile in tiles {
            set.insert(tile)?;
        }
        Ok(set)
    }

    /// Parse every blank-line-delimited tile record of a puzzle input
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` for any unreadable record, a duplicated id or
    /// a tile whose size differs from the first one, and `InvalidTileCount`
    /// if the input holds no tiles at all
    pub fn parse(input: &str) -> Result<Self> {
        let mut set = Self::new();
        let mut tile_size = None;

        for record in records(input) {
            let tile = Tile::parse(record)?;
            let expected = *tile_size.get_or_insert(tile.size());
            if tile.size() != expected {
                return Err(malformed_tile(
                    Some(tile.id()),
                    &format!("side length {} differs from {expected}", tile.size()),
                ));
            }
            set.insert(tile)?;
        }

        if set.is_empty() {
            return Err(ReassemblyError::InvalidTileCount { count: 0 });
        }
        Ok(set)
    }

    /// Add a tile
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if a tile with the same id is already present
    pub fn insert(&mut self, tile: Tile) -> Result<()> {
        let id = tile.id();
        if self.tiles.contains_key(&id) {
            return Err(malformed_tile(Some(id), &"duplicate tile id"));
        }
        self.tiles.insert(id, tile);
        Ok(())
    }

    /// Take a tile out of the set
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        self.tiles.remove(&id)
    }

    /// Borrow a tile
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Mutably borrow a tile
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    /// Whether a tile is in the set
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Identifiers in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }

    /// Tiles in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Count of tiles presenting each canonical edge value
    pub fn edge_frequencies(&self) -> HashMap<u32, usize> {
        let mut frequencies = HashMap::new();
        for tile in self.tiles.values() {
            for edge in tile.edges() {
                *frequencies.entry(edge.canonical()).or_insert(0) += 1;
            }
        }
        frequencies
    }

    /// Some tile presenting the same border as `edge`
    pub fn find_match(&self, edge: &Edge) -> Option<TileId> {
        self.tiles
            .values()
            .find(|tile| tile.has_border(edge))
            .map(Tile::id)
    }

    /// Tiles per side of the square arrangement
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileCount` if the count is zero or not a perfect square
    pub fn side_length(&self) -> Result<usize> {
        let count = self.len();
        let side = count.isqrt();
        if count == 0 || side * side != count {
            return Err(ReassemblyError::InvalidTileCount { count });
        }
        Ok(side)
    }
}
