//! Runtime configuration defaults and io-level constants

// Default values for configurable parameters
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;

/// Default row count for generated puzzles
pub const DEFAULT_GENERATED_ROWS: usize = 4;
/// Default column count for generated puzzles
pub const DEFAULT_GENERATED_COLS: usize = 4;

/// Number of distinct edge values generated puzzles draw from
pub const EDGE_ALPHABET_SIZE: i32 = 8;

// Safety limit to keep malformed headers from allocating absurd grids
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 64;

// Output settings
/// Suffix added to solution output filenames
pub const OUTPUT_SUFFIX: &str = "_solutions";
/// File extension recognised for puzzle inputs
pub const PUZZLE_EXTENSION: &str = "puzzle";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
