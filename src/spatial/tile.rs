//! Square puzzle tiles with fingerprinted borders
//!
//! A tile keeps its four border fingerprints separately from its interior
//! pixels. Every transform updates both so that the edges always describe the
//! border of the block as it is currently oriented.
//!
//! Top and bottom edges are read left-to-right, left and right edges
//! top-to-bottom. Two correctly placed neighbours therefore present the same
//! forward reading on their shared border.

use std::fmt;

use log::trace;
use ndarray::{Array2, s};

use crate::io::configuration::{
    EMPTY_PIXEL, FILLED_PIXEL, MAX_EDGE_LENGTH, MIN_TILE_SIZE, TILE_HEADER_PREFIX,
};
use crate::io::error::{ReassemblyError, Result, malformed_tile};
use crate::io::input::lines;
use crate::spatial::edge::Edge;
use crate::spatial::image::{mirror_columns, mirror_rows, rotate_clockwise};

/// Tile identifier as printed in the `Tile <id>:` header
pub type TileId = u64;

/// Product of tile identifiers, checked for overflow
///
/// # Errors
///
/// Returns `ProductOverflow` if the product does not fit in a `u64`
pub fn id_product(ids: &[TileId]) -> Result<u64> {
    ids.iter()
        .try_fold(1_u64, |product, &id| product.checked_mul(id))
        .ok_or_else(|| ReassemblyError::ProductOverflow { ids: ids.to_vec() })
}

/// One side of a tile, in clockwise order starting at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Upper border
    Top,
    /// Right-hand border
    Right,
    /// Lower border
    Bottom,
    /// Left-hand border
    Left,
}

impl Side {
    /// All sides in cyclic order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Slot of this side in the edge tuple
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// The side facing this one across a tile
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The next side clockwise
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// A puzzle tile: identifier, border fingerprints and interior pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    edges: [Edge; 4],
    interior: Array2<bool>,
}

impl Tile {
    /// Build a tile from its full pixel block (border included)
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the block is not square, is smaller than
    /// `MIN_TILE_SIZE`, or is wider than `MAX_EDGE_LENGTH`
    pub fn new(id: TileId, pixels: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows != cols {
            return Err(malformed_tile(
                Some(id),
                &format!("block is {rows}x{cols}, expected a square"),
            ));
        }
        if !(MIN_TILE_SIZE..=MAX_EDGE_LENGTH).contains(&rows) {
            return Err(malformed_tile(
                Some(id),
                &format!("side length {rows} outside {MIN_TILE_SIZE}..={MAX_EDGE_LENGTH}"),
            ));
        }

        let last = rows - 1;
        let border = |line: Vec<bool>| {
            Edge::from_pixels(&line).map_err(|e| match e {
                ReassemblyError::MalformedTile { reason, .. } => malformed_tile(Some(id), &reason),
                other => other,
            })
        };

        let edges = [
            border(pixels.row(0).to_vec())?,
            border(pixels.column(last).to_vec())?,
            border(pixels.row(last).to_vec())?,
            border(pixels.column(0).to_vec())?,
        ];
        let interior = pixels.slice(s![1..last, 1..last]).to_owned();

        Ok(Self {
            id,
            edges,
            interior,
        })
    }

    /// Parse a `Tile <id>:` record followed by its square pixel block
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the header is missing or unreadable, a row
    /// contains an unknown marker, or the rows do not form a square block
    pub fn parse(record: &str) -> Result<Self> {
        let mut rows = lines(record).filter(|line| !line.trim().is_empty());
        let header = rows
            .next()
            .ok_or_else(|| malformed_tile(None, &"empty tile record"))?;
        let id = parse_header(header)?;

        let mut flat = Vec::new();
        let mut size = None;
        let mut height = 0;
        for (row_index, row) in rows.enumerate() {
            let row = row.trim();
            let width = row.chars().count();
            let expected = *size.get_or_insert(width);
            if width != expected {
                return Err(malformed_tile(
                    Some(id),
                    &format!("row {row_index} has {width} pixels, expected {expected}"),
                ));
            }
            for c in row.chars() {
                flat.push(match c {
                    FILLED_PIXEL => true,
                    EMPTY_PIXEL => false,
                    other => {
                        return Err(malformed_tile(
                            Some(id),
                            &format!("invalid pixel marker {other:?} in row {row_index}"),
                        ));
                    }
                });
            }
            height += 1;
        }

        let width = size.unwrap_or(0);
        let pixels = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| malformed_tile(Some(id), &e))?;
        Self::new(id, &pixels)
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Edge currently on the given side
    pub const fn edge(&self, side: Side) -> Edge {
        self.edges[side.index()]
    }

    /// All four edges in cyclic order (top, right, bottom, left)
    pub const fn edges(&self) -> &[Edge; 4] {
        &self.edges
    }

    /// Interior pixels, border excluded
    pub const fn interior(&self) -> &Array2<bool> {
        &self.interior
    }

    /// Full side length including the border
    pub fn size(&self) -> usize {
        self.interior.nrows() + 2
    }

    /// Rotate the tile 90° clockwise
    pub fn rotate90(&mut self) {
        let [top, right, bottom, left] = self.edges;
        self.edges = [left.flip(), top, right.flip(), bottom];
        self.interior = rotate_clockwise(&self.interior);
    }

    /// Mirror the tile left-to-right
    pub fn flip_horizontal(&mut self) {
        let [top, right, bottom, left] = self.edges;
        self.edges = [top.flip(), left, bottom.flip(), right];
        self.interior = mirror_columns(&self.interior);
    }

    /// Mirror the tile top-to-bottom
    pub fn flip_vertical(&mut self) {
        let [top, right, bottom, left] = self.edges;
        self.edges = [bottom, right.flip(), top, left.flip()];
        self.interior = mirror_rows(&self.interior);
    }

    /// Whether any edge of this tile is the same border as `edge`
    pub fn has_border(&self, edge: &Edge) -> bool {
        self.edges.iter().any(|own| own.same_border(edge))
    }

    /// Reorient this tile so it sits on `side` of `other`
    ///
    /// Rotates until the edge sharing a border with `other` faces it, then
    /// mirrors along the shared border if the two readings run in opposite
    /// directions. At most three rotations and one flip are applied.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` if no edge of this tile shares the border on `side`
    /// of `other`, and `Misaligned` if the shared border cannot be brought
    /// into exact orientation
    pub fn align_to(&mut self, other: &Self, side: Side) -> Result<()> {
        let target = other.edge(side);
        let facing = side.opposite();

        if !self.has_border(&target) {
            return Err(ReassemblyError::NoMatch {
                tile_id: other.id,
                side,
            });
        }

        if target.is_palindrome() {
            trace!(
                "Tile {} meets tile {} on a symmetric border, flip is ambiguous",
                self.id,
                other.id
            );
        }

        for _ in 0..3 {
            if self.edge(facing).same_border(&target) {
                break;
            }
            self.rotate90();
        }

        if !self.edge(facing).matches(&target) {
            match side {
                Side::Left | Side::Right => self.flip_vertical(),
                Side::Top | Side::Bottom => self.flip_horizontal(),
            }
        }

        if self.edge(facing).matches(&target) {
            Ok(())
        } else {
            Err(ReassemblyError::Misaligned {
                tile_id: self.id,
                neighbour_id: other.id,
                side,
            })
        }
    }

    /// Full pixel block reconstructed from edges and interior
    pub fn pixels(&self) -> Array2<bool> {
        let size = self.size();
        let last = size - 1;
        let lines = Side::ALL.map(|side| self.edge(side).pixels().collect::<Vec<_>>());
        let [top, right, bottom, left] = &lines;

        Array2::from_shape_fn((size, size), |(row, col)| {
            let pixel = if row == 0 {
                top.get(col)
            } else if row == last {
                bottom.get(col)
            } else if col == 0 {
                left.get(row)
            } else if col == last {
                right.get(row)
            } else {
                self.interior.get((row - 1, col - 1))
            };
            pixel.copied().unwrap_or(false)
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels().rows() {
            for &filled in row {
                let marker = if filled { FILLED_PIXEL } else { EMPTY_PIXEL };
                write!(f, "{marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_header(header: &str) -> Result<TileId> {
    let header = header.trim();
    header
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(':'))
        .and_then(|digits| digits.trim().parse().ok())
        .ok_or_else(|| malformed_tile(None, &format!("bad tile header {header:?}")))
}
