//! Tests for pixel block transforms and image orientations

#[cfg(test)]
mod tests {
    use ndarray::array;
    use tilestitch::spatial::image::{Image, mirror_columns, mirror_rows, rotate_clockwise};

    fn sample() -> Image {
        Image::from_rows(["#..", "##.", "..."]).unwrap()
    }

    // Tests clockwise rotation moves the left column to the top row
    // Verified by reversing rows instead of columns after transposing
    #[test]
    fn test_rotate_clockwise() {
        let pixels = array![[true, false], [false, false]];

        assert_eq!(rotate_clockwise(&pixels), array![[false, true], [false, false]]);
        assert_eq!(
            rotate_clockwise(&rotate_clockwise(&pixels)),
            array![[false, false], [false, true]]
        );
    }

    // Tests both mirrors reverse the expected axis
    // Verified by swapping the two mirror helpers
    #[test]
    fn test_mirrors() {
        let pixels = array![[true, false], [false, false]];

        assert_eq!(mirror_columns(&pixels), array![[false, true], [false, false]]);
        assert_eq!(mirror_rows(&pixels), array![[false, false], [true, false]]);
    }

    // Tests rows parse with '#' as the only filled marker
    // Verified by treating spaces as filled
    #[test]
    fn test_from_rows() {
        let image = sample();

        assert_eq!((image.rows(), image.cols()), (3, 3));
        assert_eq!(image.filled_count(), 3);
        assert!(image.is_filled(1, 1));
        assert!(!image.is_filled(2, 2));
        assert!(!image.is_filled(10, 0));
        assert_eq!(image.to_string(), "#..\n##.\n...\n");

        assert!(Image::from_rows(["##", "#"]).is_none());
        assert!(Image::from_rows(["##", "#", "###"]).is_none());
    }

    // Tests the eight orientations are distinct for an asymmetric image
    // Verified by appending rotations twice instead of their mirrors
    #[test]
    fn test_orientations_are_distinct() {
        let image = sample();
        let orientations = image.orientations();

        assert_eq!(orientations.len(), 8);
        assert_eq!(orientations.first(), Some(&image));
        for (i, a) in orientations.iter().enumerate() {
            assert_eq!(a.filled_count(), 3);
            for b in orientations.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // Tests transform involutions on whole images
    // Verified by rotating counter-clockwise in rotate90
    #[test]
    fn test_image_transform_identities() {
        let image = sample();

        assert_eq!(image.rotate90().rotate90().rotate90().rotate90(), image);
        assert_eq!(image.flip_horizontal().flip_horizontal(), image);
        assert_eq!(image.flip_vertical().flip_vertical(), image);
        assert_eq!(
            image.rotate90().rotate90(),
            image.flip_horizontal().flip_vertical()
        );
    }
}
