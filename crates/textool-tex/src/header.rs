//! TEX header structures.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// TEX file header, following the 4-byte magic.
///
/// The layout is identical across all observed revisions; only the meaning
/// of `format` changes between them.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct TexHeader {
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Always 1 in observed files; meaning unknown.
    pub version: u8,
    /// Pixel format enumerant; interpretation depends on the revision.
    pub format: u8,
    /// Header flags.
    pub flags: u8,
    /// Reserved.
    pub reserved: u8,
}

impl TexHeader {
    /// Value every observed file carries in `version`.
    pub const VERSION: u8 = 1;

    /// Full mip chain present.
    pub const FLAG_MIPMAPS: u8 = 0x01;
}
