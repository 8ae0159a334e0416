//! Error types for buffer operations.

use thiserror::Error;

pub use octetbuf_codec::EncodingError;

/// An offset, start or end outside the buffer's valid index range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("offset {offset} out of bounds for length {length}")]
    Offset { offset: usize, length: usize },
    #[error("start {start} out of bounds for length {length}")]
    Start { start: usize, length: usize },
    #[error("end {end} out of bounds for length {length}")]
    End { end: usize, length: usize },
    #[error("end {end} precedes start {start}")]
    EndBeforeStart { start: usize, end: usize },
}

/// A value that cannot be written as requested.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("fill value {0} does not fit in an octet")]
    FillRange(u32),
    #[error("value {0} outside the single-precision range")]
    FloatRange(f64),
}

/// A native byte-view conversion this host refuses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnsupportedOperationError {
    #[error("host has a native byte view; use `as_slice` or `to_array`")]
    NativeView,
}

/// Umbrella error for every fallible buffer operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BufferError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),
}
