//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Runtime configuration defaults and io-level constants
pub mod configuration;
/// Error types for puzzle loading and solving
pub mod error;
/// Puzzle text format parsing and serialization
pub mod format;
/// Batch progress reporting
pub mod progress;
/// Solution rendering and output files
pub mod render;
