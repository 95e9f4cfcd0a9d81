//! textool - DDS/TEX texture container conversion.
//!
//! This crate provides a unified interface to the textool library ecosystem
//! for moving compressed textures between the DDS container and the
//! engine's TEX container, in either direction, without touching the
//! encoded pixel data.
//!
//! # Crates
//!
//! - [`textool_common`] - Common utilities (binary reading, pixel formats, mip geometry)
//! - [`textool_dds`] - DDS container structures and header codec
//! - [`textool_tex`] - TEX container structures, format revisions and header codec
//!
//! # Example
//!
//! ```no_run
//! use textool::prelude::*;
//!
//! let options = ConvertOptions::default();
//!
//! // In-memory conversion
//! let dds = std::fs::read("grass.dds")?;
//! let tex = dds_to_tex(&dds, &options)?;
//!
//! // Or let the library handle the file pair
//! let converted = convert_file("grass.dds".as_ref(), &options)?;
//! println!("wrote {}", converted.output.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use textool_common as common;
pub use textool_dds as dds;
pub use textool_tex as tex;

mod convert;
mod error;
pub mod swizzle;

pub use convert::{
    convert_file, dds_to_tex, sibling_path, tex_to_dds, Converted, ConvertOptions,
};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        convert_file, dds_to_tex, sibling_path, tex_to_dds, Converted, ConvertOptions, Error,
    };
    pub use textool_common::{ChannelOrder, PixelFormat, TextureDescriptor};
    pub use textool_tex::TexRevision;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
