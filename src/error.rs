// src/error.rs
use keyget_path::PathError;
use keyget_walk::WalkError;
use thiserror::Error;

/// Errors raised by keyget operations.
///
/// A path that simply does not resolve is never an error: reads report it
/// through their return value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeygetError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Unsafe path segment '{segment}' at position {position}")]
    UnsafePathSegment { segment: String, position: usize },

    #[error(
        "Index {index} at position {position} would pad an array of length {len} by more than {max_gap} nulls"
    )]
    IndexOutOfRange {
        index: usize,
        position: usize,
        len: usize,
        max_gap: usize,
    },
}

impl From<PathError> for KeygetError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidPath(message) => KeygetError::InvalidPath(message),
        }
    }
}

impl From<WalkError> for KeygetError {
    fn from(err: WalkError) -> Self {
        match err {
            WalkError::UnsafePathSegment { segment, position } => {
                KeygetError::UnsafePathSegment { segment, position }
            }
            WalkError::IndexOutOfRange {
                index,
                position,
                len,
                max_gap,
            } => KeygetError::IndexOutOfRange {
                index,
                position,
                len,
                max_gap,
            },
        }
    }
}
