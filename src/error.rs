//! Error types for engine operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.

use std::fmt;

/// Errors that can occur during engine operations.
///
/// Size mismatch on generalized assignment is the only runtime-checked
/// failure in the crate: element arithmetic never fails, and out-of-range
/// indices are a documented caller precondition rather than a recoverable
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Source and destination shapes disagree in a generalized assignment.
    ///
    /// Shapes are reported as `(rows, columns)`; one-dimensional engines
    /// report `(length, 1)`. The assignment leaves the destination
    /// untouched; truncating or padding would silently produce a
    /// mathematically wrong result.
    SizeMismatch {
        /// The destination's shape.
        expected: (usize, usize),
        /// The source's shape.
        found: (usize, usize),
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SizeMismatch { expected, found } => write!(
                f,
                "size mismatch: cannot assign {}x{} source into {}x{} destination",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Creates a size-mismatch error.
pub fn size_mismatch(expected: (usize, usize), found: (usize, usize)) -> EngineError {
    EngineError::SizeMismatch { expected, found }
}
