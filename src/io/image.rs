//! PNG export of the reassembled picture with monsters highlighted

use crate::io::configuration::{EMPTY_COLOR, EXPORT_SCALE, FILLED_COLOR, MONSTER_COLOR};
use crate::io::error::{ReassemblyError, Result};
use crate::spatial::image::Image;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

/// Colour of one picture pixel
fn pixel_color(image: &Image, covered: &Array2<bool>, row: usize, col: usize) -> Rgba<u8> {
    if covered.get((row, col)).copied().unwrap_or(false) {
        Rgba(MONSTER_COLOR)
    } else if image.is_filled(row, col) {
        Rgba(FILLED_COLOR)
    } else {
        Rgba(EMPTY_COLOR)
    }
}

/// Export the picture as a PNG, each pixel scaled to an `EXPORT_SCALE` square
///
/// # Errors
///
/// Returns an error if:
/// - The picture is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png<P: AsRef<Path>>(
    image: &Image,
    covered: &Array2<bool>,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();
    if image.rows() == 0 || image.cols() == 0 {
        return Err(ReassemblyError::EmptyImage);
    }

    let width = image.cols() as u32 * EXPORT_SCALE;
    let height = image.rows() as u32 * EXPORT_SCALE;
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / EXPORT_SCALE) as usize;
        let col = (x / EXPORT_SCALE) as usize;
        pixel_color(image, covered, row, col)
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReassemblyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| ReassemblyError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
