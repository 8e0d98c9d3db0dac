//! Square pixel images and the transforms shared with tiles

use std::fmt;

use ndarray::{Array2, s};

use crate::io::configuration::{EMPTY_PIXEL, FILLED_PIXEL};

/// Rotate a pixel block 90° clockwise
pub fn rotate_clockwise(pixels: &Array2<bool>) -> Array2<bool> {
    pixels.t().slice(s![.., ..;-1]).to_owned()
}

/// Mirror a pixel block left-to-right
pub fn mirror_columns(pixels: &Array2<bool>) -> Array2<bool> {
    pixels.slice(s![.., ..;-1]).to_owned()
}

/// Mirror a pixel block top-to-bottom
pub fn mirror_rows(pixels: &Array2<bool>) -> Array2<bool> {
    pixels.slice(s![..;-1, ..]).to_owned()
}

/// A reassembled picture (`true` = filled pixel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Array2<bool>,
}

impl Image {
    /// Wrap a pixel block
    pub const fn new(pixels: Array2<bool>) -> Self {
        Self { pixels }
    }

    /// Parse rows of `#`/`.` markers; anything other than `#` is empty
    ///
    /// Returns `None` if the rows differ in width.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let rows: Vec<&str> = rows.into_iter().collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if rows.iter().any(|row| row.chars().count() != width) {
            return None;
        }
        let flat: Vec<bool> = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == FILLED_PIXEL))
            .collect();
        Array2::from_shape_vec((height, width), flat)
            .ok()
            .map(Self::new)
    }

    /// Underlying pixels
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Whether the pixel at (`row`, `col`) is filled; out of bounds is empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.pixels.get((row, col)).copied().unwrap_or(false)
    }

    /// Count of filled pixels
    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|&&filled| filled).count()
    }

    /// Rotate 90° clockwise
    #[must_use]
    pub fn rotate90(&self) -> Self {
        Self::new(rotate_clockwise(&self.pixels))
    }

    /// Mirror left-to-right
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        Self::new(mirror_columns(&self.pixels))
    }

    /// Mirror top-to-bottom
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        Self::new(mirror_rows(&self.pixels))
    }

    /// All eight orientations: four rotations, then the same four mirrored
    pub fn orientations(&self) -> Vec<Self> {
        let mut result = Vec::with_capacity(8);
        let mut current = self.clone();
        for _ in 0..4 {
            let next = current.rotate90();
            result.push(current);
            current = next;
        }
        let mirrored: Vec<Self> = result.iter().map(Self::flip_horizontal).collect();
        result.extend(mirrored);
        result
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            for &filled in row {
                let marker = if filled { FILLED_PIXEL } else { EMPTY_PIXEL };
                write!(f, "{marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
