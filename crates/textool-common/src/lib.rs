//! Common utilities for textool.
//!
//! This crate provides the foundational types shared by the container codecs:
//!
//! - [`BinaryReader`] - Zero-copy binary reading from byte slices
//! - [`PixelFormat`] / [`ChannelOrder`] - The pixel-format model
//! - [`TextureDescriptor`] - The canonical in-memory texture description
//! - [`mip`] - Mip-chain geometry and payload layout

mod error;
mod format;
mod reader;

pub mod mip;

pub use error::{Error, Result};
pub use format::{BlockGeometry, ChannelOrder, PixelFormat, TextureDescriptor};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
