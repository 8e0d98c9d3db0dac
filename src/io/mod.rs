//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Puzzle constants and output defaults
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// PNG export of the reassembled picture
pub mod image;
/// Line and record scanning of input files
pub mod input;
/// Placement progress display
pub mod progress;
