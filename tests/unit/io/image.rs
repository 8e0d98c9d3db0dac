//! Tests for PNG export of the reassembled picture

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tempfile::TempDir;
    use tilestitch::ReassemblyError;
    use tilestitch::io::configuration::{EMPTY_COLOR, EXPORT_SCALE, FILLED_COLOR, MONSTER_COLOR};
    use tilestitch::io::image::export_image_as_png;
    use tilestitch::spatial::image::Image;

    // Tests PNG file creation with scaled pixels and highlight colours
    // Verified by ignoring the covered mask
    #[test]
    fn test_export_creates_scaled_png() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nested").join("picture_image.png");
        let picture = Image::from_rows(["#.", "##"]).unwrap();
        let mut covered = Array2::from_elem((2, 2), false);
        if let Some(cell) = covered.get_mut((1, 1)) {
            *cell = true;
        }

        export_image_as_png(&picture, &covered, &output_path).unwrap();

        let exported = image::open(&output_path).unwrap().to_rgba8();
        assert_eq!(exported.dimensions(), (2 * EXPORT_SCALE, 2 * EXPORT_SCALE));
        assert_eq!(exported.get_pixel(0, 0).0, FILLED_COLOR);
        assert_eq!(exported.get_pixel(EXPORT_SCALE, 0).0, EMPTY_COLOR);
        assert_eq!(
            exported.get_pixel(2 * EXPORT_SCALE - 1, 2 * EXPORT_SCALE - 1).0,
            MONSTER_COLOR
        );
        assert_eq!(exported.get_pixel(0, EXPORT_SCALE).0, FILLED_COLOR);
    }

    // Tests error when the picture has no pixels
    // Verified by ignoring the empty image check
    #[test]
    fn test_export_empty_image_error() {
        let temp_dir = TempDir::new().unwrap();
        let picture = Image::new(Array2::from_elem((0, 0), false));
        let covered = Array2::from_elem((0, 0), false);

        let result = export_image_as_png(&picture, &covered, temp_dir.path().join("empty.png"));

        assert!(matches!(result, Err(ReassemblyError::EmptyImage)));
    }

    // Tests unwritable destinations surface a file system error
    // Verified by discarding directory creation failures
    #[test]
    fn test_export_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let picture = Image::from_rows(["#"]).unwrap();
        let covered = Array2::from_elem((1, 1), false);

        let result = export_image_as_png(&picture, &covered, blocker.join("out.png"));

        assert!(result.is_err());
    }
}
