//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilestitch::ReassemblyError;
    use tilestitch::spatial::Side;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ReassemblyError::FileSystem {
            path: "/tmp/input.txt".into(),
            operation: "read input",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read input"));
        assert!(message.contains("/tmp/input.txt"));
    }

    // Tests malformed tile messages with and without an id
    // Verified by omitting the id from the message
    #[test]
    fn test_malformed_tile_error() {
        let with_id = ReassemblyError::MalformedTile {
            tile_id: Some(2311),
            reason: "row 2 has 9 pixels".to_string(),
        };
        let without_id = ReassemblyError::MalformedTile {
            tile_id: None,
            reason: "bad header".to_string(),
        };

        assert_eq!(with_id.to_string(), "Malformed tile 2311: row 2 has 9 pixels");
        assert_eq!(without_id.to_string(), "Malformed tile: bad header");
        assert!(with_id.source().is_none());
    }

    // Tests placement errors name the tile and side involved
    // Verified by omitting the side from the message
    #[test]
    fn test_placement_errors() {
        let no_match = ReassemblyError::NoMatch {
            tile_id: 1951,
            side: Side::Right,
        };
        assert_eq!(
            no_match.to_string(),
            "No tile matches the right edge of tile 1951"
        );

        let misaligned = ReassemblyError::Misaligned {
            tile_id: 2311,
            neighbour_id: 1951,
            side: Side::Bottom,
        };
        let message = misaligned.to_string();
        assert!(message.contains("2311"));
        assert!(message.contains("bottom"));
        assert!(message.contains("1951"));
    }

    // Tests count errors carry their numbers
    // Verified by dropping the leftover count from the message
    #[test]
    fn test_count_errors() {
        assert_eq!(
            ReassemblyError::InvalidTileCount { count: 8 }.to_string(),
            "8 tiles cannot form a square arrangement"
        );
        assert!(
            ReassemblyError::UnexpectedEdgeCount {
                tile_id: 7,
                unmatched: 3
            }
            .to_string()
            .contains("3 unmatched")
        );
        let incomplete = ReassemblyError::IncompleteArrangement {
            placed: 4,
            expected: 9,
            leftover: 5,
        }
        .to_string();
        assert!(incomplete.contains("4/9"));
        assert!(incomplete.contains("5 tiles"));
    }

    // Tests scan errors
    // Verified by printing a single dimension
    #[test]
    fn test_scan_errors() {
        assert!(
            ReassemblyError::NoMonsters { image_size: 24 }
                .to_string()
                .contains("24x24")
        );
        assert!(
            ReassemblyError::InvalidPattern {
                reason: "empty".to_string()
            }
            .to_string()
            .contains("empty")
        );
        assert!(!ReassemblyError::EmptyImage.to_string().is_empty());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = ReassemblyError::ImageExport {
            path: PathBuf::from("/tmp/out_image.png"),
            source: image_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/out_image.png"));
        assert!(error.to_string().contains("access denied"));
    }

    // Tests conversion from bare I/O errors
    // Verified by dropping the source in From
    #[test]
    fn test_from_io_error() {
        let error: ReassemblyError = std::io::Error::other("boom").into();

        assert!(matches!(error, ReassemblyError::FileSystem { .. }));
        assert!(error.source().is_some());
    }

    // Tests the overflow message lists every factor
    // Verified by printing only the first id
    #[test]
    fn test_product_overflow_error() {
        let error = ReassemblyError::ProductOverflow {
            ids: vec![70_000_000, 70_000_001, 70_000_002],
        };

        assert_eq!(
            error.to_string(),
            "Product of tile ids 70000000 * 70000001 * 70000002 overflows u64"
        );
        assert!(error.source().is_none());
    }
}
