/// Puzzle answers built from the other stages
pub mod answers;
/// Corner, border and interior classification
pub mod classifier;
/// Sea monster detection over the stitched image
pub mod monster;
/// Outward-walking arrangement solver
pub mod solver;
