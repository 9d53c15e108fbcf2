//! Error types shared by every per-format codec crate.

use thiserror::Error;

/// Errors returned when validating a caller-supplied pixel or block buffer
/// against the fixed size a 4x4 tile requires.
///
/// One variant per length mismatch, each carrying the expected and actual
/// byte counts so callers can build a precise diagnostic without
/// re-deriving the arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlockSliceError {
    /// The pixel buffer's length is not a multiple of the tile stride, or
    /// doesn't match `width * height * bytes_per_pixel`.
    #[error("pixel buffer length {actual} is not valid for a {expected}-byte-aligned image")]
    InvalidPixelBufferLength {
        /// The byte count the buffer must be a multiple of.
        expected: usize,
        /// The byte count actually supplied.
        actual: usize,
    },
    /// The compressed block buffer's length is not a multiple of the
    /// format's block size.
    #[error("block buffer length {actual} is not a multiple of the {expected}-byte block size")]
    InvalidBlockBufferLength {
        /// The format's block size in bytes (8 or 16).
        expected: usize,
        /// The byte count actually supplied.
        actual: usize,
    },
    /// Image `width`/`height` were given as zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// The width that was supplied.
        width: u32,
        /// The height that was supplied.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_non_empty() {
        let err = BlockSliceError::InvalidPixelBufferLength { expected: 4, actual: 5 };
        assert!(!err.to_string().is_empty());
    }
}
