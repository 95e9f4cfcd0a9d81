//! Error types for TEX handling.

use textool_common::PixelFormat;
use thiserror::Error;

use crate::format::TexRevision;

/// Errors that can occur when decoding or encoding TEX containers.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] textool_common::Error),

    /// File shorter than the fixed TEX header.
    #[error("truncated TEX header: file is {available} bytes, header needs {needed}")]
    TruncatedHeader { needed: usize, available: usize },

    /// Structurally invalid header field.
    #[error("invalid TEX header: {0}")]
    InvalidHeader(String),

    /// Format byte with no meaning under the selected revision.
    #[error("unknown format byte {raw:#04x} under revision {revision:?}")]
    UnknownFormat { raw: u8, revision: TexRevision },

    /// Pixel format that the selected revision cannot store.
    #[error("pixel format {format:?} is not representable in revision {revision:?}")]
    UnrepresentableFormat {
        format: PixelFormat,
        revision: TexRevision,
    },

    /// Dimensions beyond the 16-bit header fields.
    #[error("dimensions {width}x{height} exceed the TEX 16-bit limit")]
    DimensionOverflow { width: u32, height: u32 },
}

/// Result type for TEX operations.
pub type Result<T> = std::result::Result<T, Error>;
