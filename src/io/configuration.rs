//! Puzzle constants and runtime configuration defaults

// Pixel markers used by the puzzle input
/// Marker for a filled pixel
pub const FILLED_PIXEL: char = '#';
/// Marker for an empty pixel
pub const EMPTY_PIXEL: char = '.';

/// Prefix of every tile header line (`Tile 2311:`)
pub const TILE_HEADER_PREFIX: &str = "Tile ";

// Edge fingerprints are packed into a u32
/// Longest border line that can be fingerprinted
pub const MAX_EDGE_LENGTH: usize = 32;

/// Smallest tile that still has a border on every side
pub const MIN_TILE_SIZE: usize = 2;

/// Sea monster searched for in the stitched image (spaces are wildcards)
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Input and output settings
/// Extension of puzzle input files picked up from a directory
pub const INPUT_EXTENSION: &str = "txt";
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_image";

/// Export colour of filled pixels (RGBA)
pub const FILLED_COLOR: [u8; 4] = [20, 60, 120, 255];
/// Export colour of empty pixels (RGBA)
pub const EMPTY_COLOR: [u8; 4] = [200, 225, 240, 255];
/// Export colour of pixels covered by a sea monster (RGBA)
pub const MONSTER_COLOR: [u8; 4] = [230, 90, 40, 255];
/// Side length in output pixels of one image pixel
pub const EXPORT_SCALE: u32 = 4;
