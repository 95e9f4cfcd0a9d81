//! Error types for the conversion pipelines.

use std::path::PathBuf;

use textool_common::PixelFormat;
use thiserror::Error;

/// Errors that can occur during a container conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] textool_common::Error),

    /// DDS codec error.
    #[error("{0}")]
    Dds(#[from] textool_dds::Error),

    /// TEX codec error.
    #[error("{0}")]
    Tex(#[from] textool_tex::Error),

    /// Source format with no counterpart in the destination container.
    #[error("unsupported pixel format: {0:?}")]
    UnsupportedFormat(PixelFormat),

    /// Input path with neither a .dds nor a .tex extension.
    #[error("\"{}\" is neither a .dds nor a .tex file", .0.display())]
    UnrecognizedExtension(PathBuf),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
