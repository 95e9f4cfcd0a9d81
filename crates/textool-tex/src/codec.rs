//! TEX header decoding and encoding.

use textool_common::{BinaryReader, TextureDescriptor};
use zerocopy::IntoBytes;

use crate::format::TexRevision;
use crate::header::TexHeader;
use crate::{Error, Result, TEX_MAGIC};

/// Magic plus fixed header.
const HEADER_LEN: usize = 4 + std::mem::size_of::<TexHeader>();

/// Decode a TEX file into a descriptor and its level payload.
///
/// The payload slice is returned untouched. Non-convertible formats (depth,
/// ETC) decode successfully here and are refused only when a DDS write is
/// attempted.
pub fn parse_tex(data: &[u8], revision: TexRevision) -> Result<(TextureDescriptor, &[u8])> {
    if data.len() < 4 {
        return Err(Error::TruncatedHeader {
            needed: HEADER_LEN,
            available: data.len(),
        });
    }

    let mut reader = BinaryReader::new(data);
    reader.expect_magic(TEX_MAGIC)?;

    if data.len() < HEADER_LEN {
        return Err(Error::TruncatedHeader {
            needed: HEADER_LEN,
            available: data.len(),
        });
    }

    let header: TexHeader = reader.read_struct()?;

    let width = header.width as u32;
    let height = header.height as u32;
    if width == 0 || height == 0 {
        return Err(Error::InvalidHeader(format!(
            "zero dimension: {width}x{height}"
        )));
    }

    let format = revision.decode_format(header.format)?;
    let has_mipmaps = header.flags & TexHeader::FLAG_MIPMAPS != 0;

    let descriptor = TextureDescriptor {
        width,
        height,
        format,
        has_mipmaps,
    };
    Ok((descriptor, &data[HEADER_LEN..]))
}

/// Encode a descriptor as TEX magic plus header, appended to `out`.
pub fn write_header(
    out: &mut Vec<u8>,
    desc: &TextureDescriptor,
    revision: TexRevision,
) -> Result<()> {
    if desc.width > u16::MAX as u32 || desc.height > u16::MAX as u32 {
        return Err(Error::DimensionOverflow {
            width: desc.width,
            height: desc.height,
        });
    }

    let header = TexHeader {
        width: desc.width as u16,
        height: desc.height as u16,
        version: TexHeader::VERSION,
        format: revision.encode_format(desc.format)?,
        flags: if desc.has_mipmaps {
            TexHeader::FLAG_MIPMAPS
        } else {
            0
        },
        reserved: 0,
    };

    out.extend_from_slice(TEX_MAGIC);
    out.extend_from_slice(header.as_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use textool_common::PixelFormat;

    fn descriptor(format: PixelFormat, has_mipmaps: bool) -> TextureDescriptor {
        TextureDescriptor {
            width: 128,
            height: 64,
            format,
            has_mipmaps,
        }
    }

    fn header_bytes(desc: &TextureDescriptor, revision: TexRevision) -> Vec<u8> {
        let mut out = Vec::new();
        write_header(&mut out, desc, revision).unwrap();
        out
    }

    #[test]
    fn test_header_layout() {
        let bytes = header_bytes(&descriptor(PixelFormat::Dxt5, true), TexRevision::V3);
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..4], b"TEX\0");
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 128);
        assert_eq!(u16::from_le_bytes([bytes[6], bytes[7]]), 64);
        assert_eq!(bytes[8], TexHeader::VERSION);
        assert_eq!(bytes[9], 12);
        assert_eq!(bytes[10], TexHeader::FLAG_MIPMAPS);
    }

    #[test]
    fn test_round_trip_per_revision() {
        for (revision, format) in [
            (TexRevision::V1, PixelFormat::Dxt1),
            (TexRevision::V2, PixelFormat::Dxt5),
            (TexRevision::V3, PixelFormat::Bgra8),
        ] {
            let desc = descriptor(format, false);
            let bytes = header_bytes(&desc, revision);
            let (parsed, payload) = parse_tex(&bytes, revision).unwrap();
            assert_eq!(parsed, desc);
            assert!(payload.is_empty());
        }
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = header_bytes(&descriptor(PixelFormat::Dxt1, false), TexRevision::V3);
        bytes[3] = b'!';
        assert!(matches!(
            parse_tex(&bytes, TexRevision::V3),
            Err(Error::Common(textool_common::Error::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_truncated() {
        let bytes = header_bytes(&descriptor(PixelFormat::Dxt1, false), TexRevision::V3);
        assert!(matches!(
            parse_tex(&bytes[..7], TexRevision::V3),
            Err(Error::TruncatedHeader { .. })
        ));
        assert!(matches!(
            parse_tex(&bytes[..3], TexRevision::V3),
            Err(Error::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn test_depth_format_decodes() {
        // A V1 depth texture is a valid descriptor even though it can never
        // reach the DDS side.
        let mut bytes = header_bytes(&descriptor(PixelFormat::Dxt1, false), TexRevision::V1);
        bytes[9] = 1;
        let (parsed, _) = parse_tex(&bytes, TexRevision::V1).unwrap();
        assert_eq!(parsed.format, PixelFormat::Depth24);
    }

    #[test]
    fn test_unknown_format_byte() {
        let mut bytes = header_bytes(&descriptor(PixelFormat::Dxt1, false), TexRevision::V3);
        bytes[9] = 0x7f;
        assert!(matches!(
            parse_tex(&bytes, TexRevision::V3),
            Err(Error::UnknownFormat { raw: 0x7f, .. })
        ));
    }

    #[test]
    fn test_dimension_overflow() {
        let desc = TextureDescriptor {
            width: 70_000,
            height: 64,
            format: PixelFormat::Dxt1,
            has_mipmaps: false,
        };
        let mut out = Vec::new();
        assert!(matches!(
            write_header(&mut out, &desc, TexRevision::V3),
            Err(Error::DimensionOverflow { .. })
        ));
    }
}
