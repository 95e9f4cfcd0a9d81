//! TEX container handling for textool.
//!
//! A TEX file is the 4-byte magic `"TEX\0"`, a fixed 8-byte header, and the
//! raw level payload stored coarsest level first. The meaning of the header's
//! format byte has been through three incompatible revisions; the caller
//! selects a [`TexRevision`] explicitly, it is never sniffed from the file.
//!
//! # Example
//!
//! ```no_run
//! use textool_tex::{parse_tex, TexRevision};
//!
//! let data = std::fs::read("texture.tex")?;
//! let (descriptor, payload) = parse_tex(&data, TexRevision::V3)?;
//! println!("{}x{}, {} bytes of levels", descriptor.width, descriptor.height, payload.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
mod error;
mod format;
mod header;

pub use codec::{parse_tex, write_header};
pub use error::{Error, Result};
pub use format::TexRevision;
pub use header::TexHeader;

/// TEX file magic bytes ("TEX" plus a NUL).
pub const TEX_MAGIC: &[u8; 4] = b"TEX\0";
