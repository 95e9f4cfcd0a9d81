//! DDS header decoding and encoding.

use textool_common::mip;
use textool_common::{BinaryReader, ChannelOrder, PixelFormat, TextureDescriptor};
use zerocopy::IntoBytes;

use crate::header::{DdsHeader, DdsPixelFormat, FourCC};
use crate::{Error, Result, DDS_MAGIC};

/// Magic plus fixed header.
const HEADER_LEN: usize = 4 + std::mem::size_of::<DdsHeader>();

/// Mapping from the four canonical single-byte masks to byte indices.
///
/// Each mask selects exactly one byte of a 32-bit little-endian pixel; any
/// mask outside this table, or one used twice, cannot describe a byte-order
/// permutation and is rejected.
const MASK_BYTE_INDEX: [(u32, u8); 4] = [
    (0x0000_00ff, 0),
    (0x0000_ff00, 1),
    (0x00ff_0000, 2),
    (0xff00_0000, 3),
];

/// Decode a DDS file into a descriptor and its level payload.
///
/// The payload slice is returned untouched; level geometry and ordering are
/// the caller's concern.
pub fn parse_dds(data: &[u8]) -> Result<(TextureDescriptor, &[u8])> {
    if data.len() < 4 {
        return Err(Error::TruncatedHeader {
            needed: HEADER_LEN,
            available: data.len(),
        });
    }

    let mut reader = BinaryReader::new(data);
    reader.expect_magic(DDS_MAGIC)?;

    if data.len() < HEADER_LEN {
        return Err(Error::TruncatedHeader {
            needed: HEADER_LEN,
            available: data.len(),
        });
    }

    let header: DdsHeader = reader.read_struct()?;

    let size = header.size;
    if size != DdsHeader::SIZE {
        return Err(Error::InvalidHeader(format!(
            "header size is {size}, expected {}",
            DdsHeader::SIZE
        )));
    }
    let pf_size = header.pixel_format.size;
    if pf_size != DdsPixelFormat::SIZE {
        return Err(Error::InvalidHeader(format!(
            "pixel format size is {pf_size}, expected {}",
            DdsPixelFormat::SIZE
        )));
    }

    let width = header.width;
    let height = header.height;
    if width == 0 || height == 0 {
        return Err(Error::InvalidHeader(format!(
            "zero dimension: {width}x{height}"
        )));
    }
    let caps2 = header.caps2;
    if caps2 != 0 {
        return Err(Error::InvalidHeader(
            "cubemap and volume textures are not supported".to_string(),
        ));
    }

    let format = resolve_format(header.pixel_format)?;

    // A declared count of 0 or 1 both mean a single level with no chain;
    // anything larger must be the full chain for these dimensions.
    let declared = header.mipmap_count;
    let has_mipmaps = declared > 1;
    if has_mipmaps {
        let expected = mip::expected_mip_count(width, height);
        if declared != expected {
            return Err(textool_common::Error::MipCountMismatch { expected, declared }.into());
        }
    }

    let descriptor = TextureDescriptor {
        width,
        height,
        format,
        has_mipmaps,
    };
    Ok((descriptor, &data[HEADER_LEN..]))
}

/// Resolve the embedded pixel-format block into a [`PixelFormat`].
fn resolve_format(pf: DdsPixelFormat) -> Result<PixelFormat> {
    let flags = pf.flags;
    let bit_count = pf.rgb_bit_count;

    if flags & DdsPixelFormat::FLAG_FOURCC != 0 {
        return match pf.four_cc {
            FourCC::DXT1 => Ok(PixelFormat::Dxt1),
            FourCC::DXT5 => Ok(PixelFormat::Dxt5),
            other => Err(Error::UnsupportedFourCc(other.0)),
        };
    }

    if flags & DdsPixelFormat::FLAG_RGB != 0 && bit_count == 32 {
        let masks = [pf.r_bit_mask, pf.g_bit_mask, pf.b_bit_mask, pf.a_bit_mask];
        let order = channel_order_from_masks(masks)?;
        return if order == ChannelOrder::CANONICAL {
            Ok(PixelFormat::Bgra8)
        } else {
            Ok(PixelFormat::Rgba8(order))
        };
    }

    Err(Error::UnsupportedFormat { flags, bit_count })
}

/// Build a [`ChannelOrder`] from the four channel bit masks.
///
/// Valid mask sets are exactly the permutations of the four single-byte
/// masks; the bijection is checked before the order is constructed.
fn channel_order_from_masks(masks: [u32; 4]) -> Result<ChannelOrder> {
    let mut order = [0u8; 4];
    let mut seen = [false; 4];

    for (slot, mask) in masks.iter().enumerate() {
        let index = MASK_BYTE_INDEX
            .iter()
            .find(|(m, _)| m == mask)
            .map(|(_, i)| *i)
            .ok_or(Error::InvalidChannelMask { masks })?;
        if seen[index as usize] {
            return Err(Error::InvalidChannelMask { masks });
        }
        seen[index as usize] = true;
        order[slot] = index;
    }

    Ok(ChannelOrder(order))
}

/// Encode a descriptor as DDS magic plus header, appended to `out`.
///
/// Uncompressed output always carries the canonical mask set; non-canonical
/// orders exist only on the read side, before normalization.
pub fn write_header(out: &mut Vec<u8>, desc: &TextureDescriptor) -> Result<()> {
    let geometry = desc
        .format
        .block_geometry()
        .ok_or(Error::UnencodableFormat(desc.format))?;

    let mut flags = DdsHeader::FLAGS_TEXTURE;
    let mut caps = DdsHeader::CAPS_TEXTURE;
    let pitch_or_linear_size = if desc.format.compressed() {
        flags |= DdsHeader::FLAG_LINEAR_SIZE;
        mip::level_size(desc.width, desc.height, geometry) as u32
    } else {
        flags |= DdsHeader::FLAG_PITCH;
        desc.width * 4
    };

    let mipmap_count = if desc.has_mipmaps {
        flags |= DdsHeader::FLAG_MIPMAP_COUNT;
        caps |= DdsHeader::CAPS_MIPMAP;
        desc.mip_count()
    } else {
        0
    };

    let header = DdsHeader {
        size: DdsHeader::SIZE,
        flags,
        height: desc.height,
        width: desc.width,
        pitch_or_linear_size,
        depth: 0,
        mipmap_count,
        reserved1: [0; 11],
        pixel_format: build_pixel_format(desc.format),
        caps,
        caps2: 0,
        caps3: 0,
        caps4: 0,
        reserved2: 0,
    };

    out.extend_from_slice(DDS_MAGIC);
    out.extend_from_slice(header.as_bytes());
    Ok(())
}

fn build_pixel_format(format: PixelFormat) -> DdsPixelFormat {
    let mut pf = DdsPixelFormat {
        size: DdsPixelFormat::SIZE,
        flags: 0,
        four_cc: FourCC::NONE,
        rgb_bit_count: 0,
        r_bit_mask: 0,
        g_bit_mask: 0,
        b_bit_mask: 0,
        a_bit_mask: 0,
    };

    match format {
        PixelFormat::Dxt1 => {
            pf.flags = DdsPixelFormat::FLAG_FOURCC;
            pf.four_cc = FourCC::DXT1;
        }
        PixelFormat::Dxt5 => {
            pf.flags = DdsPixelFormat::FLAG_FOURCC;
            pf.four_cc = FourCC::DXT5;
        }
        PixelFormat::Bgra8 | PixelFormat::Rgba8(_) => {
            pf.flags = DdsPixelFormat::FLAG_RGB | DdsPixelFormat::FLAG_ALPHA_PIXELS;
            pf.rgb_bit_count = 32;
            pf.r_bit_mask = DdsPixelFormat::MASK_R;
            pf.g_bit_mask = DdsPixelFormat::MASK_G;
            pf.b_bit_mask = DdsPixelFormat::MASK_B;
            pf.a_bit_mask = DdsPixelFormat::MASK_A;
        }
        // Unreachable past the geometry check in write_header.
        _ => {}
    }

    pf
}
