//! Sea monster detection and water roughness over the stitched image

use log::debug;
use ndarray::Array2;

use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{ReassemblyError, Result};
use crate::spatial::image::Image;

/// Mask of pixels that must be filled for a pattern to match
///
/// Anything other than a filled marker in the definition is a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    height: usize,
    width: usize,
    offsets: Vec<(usize, usize)>,
}

impl Pattern {
    /// Build a pattern from its rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the rows differ in width or no pixel is required
    pub fn parse<'a>(rows: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let image = Image::from_rows(rows).ok_or_else(|| ReassemblyError::InvalidPattern {
            reason: "rows differ in width".to_string(),
        })?;

        let offsets: Vec<(usize, usize)> = image
            .pixels()
            .indexed_iter()
            .filter(|&(_, &filled)| filled)
            .map(|(position, _)| position)
            .collect();

        if offsets.is_empty() {
            return Err(ReassemblyError::InvalidPattern {
                reason: "pattern requires no filled pixels".to_string(),
            });
        }

        Ok(Self {
            height: image.rows(),
            width: image.cols(),
            offsets,
        })
    }

    /// The standard 20x3 sea monster
    ///
    /// # Errors
    ///
    /// Never fails for the built-in definition; the signature matches [`Pattern::parse`]
    pub fn sea_monster() -> Result<Self> {
        Self::parse(SEA_MONSTER)
    }

    /// Rows spanned by the pattern
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the pattern
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Offsets of the required pixels relative to the top-left corner
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Whether the pattern matches with its top-left corner at (`row`, `col`)
    pub fn matches_at(&self, image: &Image, row: usize, col: usize) -> bool {
        self.offsets
            .iter()
            .all(|&(dr, dc)| image.is_filled(row + dr, col + dc))
    }

    /// Top-left positions of every match within the image bounds
    pub fn occurrences(&self, image: &Image) -> Vec<(usize, usize)> {
        if image.rows() < self.height || image.cols() < self.width {
            return Vec::new();
        }

        let mut found = Vec::new();
        for row in 0..=image.rows() - self.height {
            for col in 0..=image.cols() - self.width {
                if self.matches_at(image, row, col) {
                    found.push((row, col));
                }
            }
        }
        found
    }
}

/// Result of scanning an image for a pattern in every orientation
#[derive(Debug, Clone)]
pub struct MonsterScan {
    /// Orientation of the image in which monsters were found
    pub image: Image,
    /// Pixels covered by at least one monster
    pub covered: Array2<bool>,
    /// Number of monsters found
    pub monsters: usize,
    /// Filled pixels not part of any monster
    pub roughness: usize,
}

impl MonsterScan {
    /// Find the orientation containing the pattern and measure roughness
    ///
    /// The first of the eight orientations with at least one match is used.
    /// Overlapping monsters share covered pixels, which are counted once.
    ///
    /// # Errors
    ///
    /// Returns `NoMonsters` if no orientation contains the pattern
    pub fn run(image: &Image, pattern: &Pattern) -> Result<Self> {
        for (index, oriented) in image.orientations().into_iter().enumerate() {
            let found = pattern.occurrences(&oriented);
            if found.is_empty() {
                continue;
            }

            let mut covered = Array2::from_elem((oriented.rows(), oriented.cols()), false);
            for &(row, col) in &found {
                for &(dr, dc) in pattern.offsets() {
                    if let Some(cell) = covered.get_mut((row + dr, col + dc)) {
                        *cell = true;
                    }
                }
            }

            let covered_count = covered.iter().filter(|&&c| c).count();
            let roughness = oriented.filled_count() - covered_count;
            debug!(
                "orientation {index}: {} monsters, roughness {roughness}",
                found.len()
            );

            return Ok(Self {
                image: oriented,
                covered,
                monsters: found.len(),
                roughness,
            });
        }

        Err(ReassemblyError::NoMonsters {
            image_size: image.rows(),
        })
    }
}
