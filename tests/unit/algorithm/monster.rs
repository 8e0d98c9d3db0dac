//! Tests for pattern matching and roughness measurement

#[cfg(test)]
mod tests {
    use tilestitch::ReassemblyError;
    use tilestitch::algorithm::monster::{MonsterScan, Pattern};
    use tilestitch::io::configuration::SEA_MONSTER;
    use tilestitch::spatial::image::Image;

    /// Sea monster drawn one pixel in from the top-left, with one stray pixel
    fn lone_monster() -> Image {
        let mut rows = vec![".".repeat(22)];
        rows.extend(
            SEA_MONSTER
                .iter()
                .map(|line| format!(".{}.", line.replace(' ', "."))),
        );
        rows.push(format!("{}#", ".".repeat(21)));
        Image::from_rows(rows.iter().map(String::as_str)).unwrap()
    }

    // Tests the built-in monster shape
    // Verified by counting spaces as required pixels
    #[test]
    fn test_sea_monster_pattern() {
        let pattern = Pattern::sea_monster().unwrap();

        assert_eq!(pattern.height(), 3);
        assert_eq!(pattern.width(), 20);
        assert_eq!(pattern.offsets().len(), 15);
        assert!(pattern.offsets().contains(&(0, 18)));
    }

    // Tests patterns without filled pixels are rejected
    // Verified by removing the empty offsets check
    #[test]
    fn test_parse_rejects_empty_pattern() {
        assert!(matches!(
            Pattern::parse(["   ", " . "]),
            Err(ReassemblyError::InvalidPattern { .. })
        ));
        assert!(Pattern::parse(Vec::<&str>::new()).is_err());
    }

    // Tests rows of differing width are rejected instead of padded
    // Verified by taking the widest row as the pattern width
    #[test]
    fn test_parse_rejects_ragged_pattern() {
        assert!(matches!(
            Pattern::parse(["#  #", "##"]),
            Err(ReassemblyError::InvalidPattern { .. })
        ));

        let pattern = Pattern::parse([" # ", "# #"]).unwrap();
        assert_eq!((pattern.height(), pattern.width()), (2, 3));
        assert_eq!(pattern.offsets(), &[(0, 1), (1, 0), (1, 2)]);
    }

    // Tests matching reaches the last row and column of the image
    // Verified by using an exclusive upper bound in occurrences
    #[test]
    fn test_occurrences_include_far_edge() {
        let pattern = Pattern::sea_monster().unwrap();
        let image = lone_monster();

        assert_eq!(pattern.occurrences(&image), vec![(1, 1)]);
        assert!(pattern.matches_at(&image, 1, 1));
        assert!(!pattern.matches_at(&image, 0, 0));

        let tight = Image::from_rows(SEA_MONSTER).unwrap();
        assert_eq!(pattern.occurrences(&tight), vec![(0, 0)]);
    }

    // Tests roughness excludes monster pixels only
    // Verified by subtracting the monster count instead of covered pixels
    #[test]
    fn test_scan_lone_monster() {
        let scan = MonsterScan::run(&lone_monster(), &Pattern::sea_monster().unwrap()).unwrap();

        assert_eq!(scan.monsters, 1);
        assert_eq!(scan.roughness, 1);
        assert_eq!(scan.covered.iter().filter(|&&c| c).count(), 15);
        assert_eq!(scan.image, lone_monster());
    }

    // Tests monsters are found whichever way the image is turned
    // Verified by scanning only the first orientation
    #[test]
    fn test_scan_finds_turned_monster() {
        let pattern = Pattern::sea_monster().unwrap();
        let turned = lone_monster().rotate90().flip_vertical();

        let scan = MonsterScan::run(&turned, &pattern).unwrap();

        assert_eq!(scan.monsters, 1);
        assert_eq!(scan.roughness, 1);
        assert_eq!(pattern.occurrences(&scan.image).len(), 1);
    }

    // Tests overlapping matches count shared pixels once
    // Verified by summing pattern sizes per match
    #[test]
    fn test_overlapping_matches() {
        let pattern = Pattern::parse(["##"]).unwrap();
        let image = Image::from_rows(["###", "...", "..."]).unwrap();

        let scan = MonsterScan::run(&image, &pattern).unwrap();

        assert_eq!(scan.monsters, 2);
        assert_eq!(scan.roughness, 0);
    }

    // Tests images without monsters report an error
    // Verified by returning a zero-monster scan
    #[test]
    fn test_no_monsters() {
        let image = Image::from_rows(["#.#.", ".#.#", "#.#.", ".#.#"]).unwrap();

        assert!(matches!(
            MonsterScan::run(&image, &Pattern::sea_monster().unwrap()),
            Err(ReassemblyError::NoMonsters { image_size: 4 })
        ));
    }
}
