//! DDS container handling for textool.
//!
//! A DDS file is the 4-byte magic `"DDS "`, a fixed 124-byte header with an
//! embedded pixel-format block, and the raw level payload stored finest
//! level first. This crate decodes that header into a
//! [`TextureDescriptor`][textool_common::TextureDescriptor] and encodes a
//! descriptor back into header bytes; it never touches the payload.
//!
//! # Example
//!
//! ```no_run
//! use textool_dds::parse_dds;
//!
//! let data = std::fs::read("texture.dds")?;
//! let (descriptor, payload) = parse_dds(&data)?;
//! println!("{}x{}, {} bytes of levels", descriptor.width, descriptor.height, payload.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
mod error;
mod header;

pub use codec::{parse_dds, write_header};
pub use error::{Error, Result};
pub use header::{DdsHeader, DdsPixelFormat, FourCC};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
