//! DDS header structures.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// DDS file header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags.
    pub flags: u32,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels.
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: u32,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT.
    pub const FLAGS_TEXTURE: u32 = 0x0000_1007;
    /// DDSD_PITCH.
    pub const FLAG_PITCH: u32 = 0x0000_0008;
    /// DDSD_MIPMAPCOUNT.
    pub const FLAG_MIPMAP_COUNT: u32 = 0x0002_0000;
    /// DDSD_LINEARSIZE.
    pub const FLAG_LINEAR_SIZE: u32 = 0x0008_0000;

    /// DDSCAPS_TEXTURE.
    pub const CAPS_TEXTURE: u32 = 0x0000_1000;
    /// DDSCAPS_COMPLEX | DDSCAPS_MIPMAP.
    pub const CAPS_MIPMAP: u32 = 0x0040_0008;
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags.
    pub flags: u32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Red bit mask.
    pub r_bit_mask: u32,
    /// Green bit mask.
    pub g_bit_mask: u32,
    /// Blue bit mask.
    pub b_bit_mask: u32,
    /// Alpha bit mask.
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// DDPF_ALPHAPIXELS.
    pub const FLAG_ALPHA_PIXELS: u32 = 0x0000_0001;
    /// DDPF_FOURCC.
    pub const FLAG_FOURCC: u32 = 0x0000_0004;
    /// DDPF_RGB.
    pub const FLAG_RGB: u32 = 0x0000_0040;

    /// Canonical red mask (byte 2).
    pub const MASK_R: u32 = 0x00ff_0000;
    /// Canonical green mask (byte 1).
    pub const MASK_G: u32 = 0x0000_ff00;
    /// Canonical blue mask (byte 0).
    pub const MASK_B: u32 = 0x0000_00ff;
    /// Canonical alpha mask (byte 3).
    pub const MASK_A: u32 = 0xff00_0000;
}

/// Four-character code for compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT3 compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");
    /// DX10 extended header.
    pub const DX10: Self = Self(*b"DX10");
    /// No compression.
    pub const NONE: Self = Self([0; 4]);
}
