//! Tests for border fingerprints and their orientation-invariant identity

#[cfg(test)]
mod tests {
    use tilestitch::ReassemblyError;
    use tilestitch::spatial::edge::Edge;

    // Tests bit packing with the first pixel as most significant bit
    // Verified by reversing the shift direction in from_pixels
    #[test]
    fn test_encode_known_border() {
        let edge = Edge::encode("..##.#..#.").unwrap();

        assert_eq!(edge.forward(), 210);
        assert_eq!(edge.reversed(), 300);
        assert_eq!(edge.len(), 10);
        assert!(!edge.is_empty());
    }

    // Tests canonical value ignores reading direction
    // Verified by returning forward instead of the minimum
    #[test]
    fn test_canonical_is_flip_invariant() {
        for line in ["..##.#..#.", "#.........", "##..#.#...", ".#####..#."] {
            let edge = Edge::encode(line).unwrap();
            assert_eq!(edge.canonical(), edge.flip().canonical(), "line {line}");
            assert_eq!(edge.canonical(), edge.forward().min(edge.reversed()));
        }
    }

    // Tests flipping twice restores the original edge
    // Verified by dropping the swap in flip
    #[test]
    fn test_double_flip_is_identity() {
        let edge = Edge::encode("#..#.##...").unwrap();
        let flipped = edge.flip();

        assert_eq!(flipped.forward(), edge.reversed());
        assert_eq!(flipped.reversed(), edge.forward());
        assert_eq!(flipped.flip(), edge);
    }

    // Tests exact matching is orientation-sensitive while border identity is not
    // Verified by comparing canonical values in matches
    #[test]
    fn test_matches_versus_same_border() {
        let edge = Edge::encode("##....#...").unwrap();
        let reversed = Edge::encode("...#....##").unwrap();

        assert!(edge.same_border(&reversed));
        assert!(!edge.matches(&reversed));
        assert!(edge.matches(&reversed.flip()));
    }

    // Tests palindromic lines read the same both ways
    // Verified by comparing forward with len
    #[test]
    fn test_palindrome_detection() {
        assert!(Edge::encode("#..##..#").unwrap().is_palindrome());
        assert!(!Edge::encode("#..##...").unwrap().is_palindrome());
    }

    // Tests display renders the line in reading direction
    // Verified by iterating bits from least significant
    #[test]
    fn test_display_round_trip() {
        let line = "#.##...#.#";
        let edge = Edge::encode(line).unwrap();

        assert_eq!(edge.to_string(), line);
        assert_eq!(edge.flip().to_string(), "#.#...##.#");
    }

    // Tests rejection of unknown markers, empty lines and overlong lines
    // Verified by removing the length check
    #[test]
    fn test_encode_rejects_bad_lines() {
        assert!(matches!(
            Edge::encode("..x."),
            Err(ReassemblyError::MalformedTile { tile_id: None, .. })
        ));
        assert!(Edge::encode("").is_err());
        assert!(Edge::encode(&"#".repeat(33)).is_err());
        assert!(Edge::encode(&"#".repeat(32)).is_ok());
    }

    // Tests boolean pixels encode the same as markers
    // Verified by inverting the filled test in from_pixels
    #[test]
    fn test_from_pixels_agrees_with_encode() {
        let pixels = [true, false, false, true, true];
        let from_bools = Edge::from_pixels(&pixels).unwrap();

        assert_eq!(from_bools, Edge::encode("#..##").unwrap());
        assert_eq!(from_bools.pixels().collect::<Vec<_>>(), pixels);
    }
}
