//! Error types for the filtered reader.

use thiserror::Error;

/// The error type for all read operations in this crate.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// An error reported by the underlying source, passed through unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination range of a bulk read does not fit in the buffer.
    #[error("Range out of bounds: offset {offset} + count {count} exceeds buffer length {len}")]
    OutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// The source ran out while a valid code or a line was still required.
    #[error("Unexpected end of stream")]
    EndOfStream,
}

/// A convenience `Result` type alias using the crate's `ReaderError` type.
pub type Result<T> = std::result::Result<T, ReaderError>;
