use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
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
