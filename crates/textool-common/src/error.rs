//! Error types for textool-common.

use thiserror::Error;

/// Common error type shared by the container codecs.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Invalid magic bytes encountered.
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic {
        expected: Vec<u8>,
        actual: Vec<u8>,
    },

    /// Declared mip count disagrees with the count derived from the dimensions.
    #[error("mip count mismatch: expected {expected} mipmaps, got {declared}")]
    MipCountMismatch { expected: u32, declared: u32 },

    /// Payload too short for the declared mip chain.
    #[error("truncated payload: mip level {level} needs {needed} bytes but only {available} remain")]
    TruncatedPayload {
        level: u32,
        needed: usize,
        available: usize,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
