//! Error types for puzzle loading and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Failed to read a puzzle file from the filesystem
    PuzzleLoad {
        /// Path to the puzzle file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Puzzle file contents don't follow the text format
    PuzzleFormat {
        /// Path to the puzzle file
        path: PathBuf,
        /// Line number where parsing failed (1-based)
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Board doesn't meet the structural preconditions
    InvalidPuzzle {
        /// Description of what's wrong with the board
        reason: String,
    },

    /// Two tiles share an identifying label
    DuplicateLabel {
        /// The repeated label
        label: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PuzzleLoad { path, source } => {
                write!(f, "Failed to load puzzle '{}': {source}", path.display())
            }
            Self::PuzzleFormat { path, line, reason } => {
                write!(
                    f,
                    "Invalid puzzle file '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::InvalidPuzzle { reason } => {
                write!(f, "Invalid puzzle: {reason}")
            }
            Self::DuplicateLabel { label } => {
                write!(f, "Duplicate tile label '{label}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PuzzleLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid puzzle error
pub fn invalid_puzzle(reason: &impl ToString) -> SolverError {
    SolverError::InvalidPuzzle {
        reason: reason.to_string(),
    }
}

/// Create a puzzle format error at a specific line
pub fn puzzle_format(path: &std::path::Path, line: usize, reason: &impl ToString) -> SolverError {
    SolverError::PuzzleFormat {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}
