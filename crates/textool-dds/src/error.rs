//! Error types for DDS handling.

use thiserror::Error;

/// Errors that can occur when decoding or encoding DDS containers.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] textool_common::Error),

    /// File shorter than the fixed DDS header.
    #[error("truncated DDS header: file is {available} bytes, header needs {needed}")]
    TruncatedHeader { needed: usize, available: usize },

    /// Structurally invalid header field.
    #[error("invalid DDS header: {0}")]
    InvalidHeader(String),

    /// FourCC with no counterpart in the TEX container.
    #[error("unsupported fourcc \"{}\"", String::from_utf8_lossy(.0))]
    UnsupportedFourCc([u8; 4]),

    /// Pixel-format block that is neither a known fourcc nor 32-bit color.
    #[error("unsupported pixel format: flags {flags:#010x}, {bit_count} bits per pixel")]
    UnsupportedFormat { flags: u32, bit_count: u32 },

    /// Channel masks that are not a permutation of the four byte masks.
    #[error("invalid channel masks: {masks:08x?}")]
    InvalidChannelMask { masks: [u32; 4] },

    /// Pixel format that cannot be stored in a DDS container.
    #[error("pixel format {0:?} cannot be written to a DDS container")]
    UnencodableFormat(textool_common::PixelFormat),
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
