//! TEX pixel-format enumeration revisions.
//!
//! The on-disk format byte has been redefined twice, and the numeric values
//! overlap between revisions (0 is a depth format in V1 but ETC1 in V2), so
//! a file's bytes alone cannot identify the revision. The revision is
//! therefore an explicit input to every decode and encode.

use std::str::FromStr;

use textool_common::PixelFormat;

use crate::{Error, Result};

/// On-disk format-enumeration revision.
///
/// [`TexRevision::V3`] is the only write target new files should use; the
/// older revisions exist to read archives produced before the enumeration
/// was last redefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TexRevision {
    /// Depth-format era.
    V1,
    /// ETC era.
    V2,
    /// Current revision.
    #[default]
    V3,
}

impl TexRevision {
    /// Decode an on-disk format byte under this revision.
    ///
    /// Depth and ETC enumerants decode successfully; they fail later, when
    /// a container write is attempted.
    pub fn decode_format(self, raw: u8) -> Result<PixelFormat> {
        let format = match (self, raw) {
            (Self::V1, 0) => PixelFormat::Depth16,
            (Self::V1, 1) => PixelFormat::Depth24,
            (Self::V1, 2) => PixelFormat::Depth32,
            (Self::V2, 0) => PixelFormat::Etc1,
            (Self::V2, 1) => PixelFormat::Etc2Rgb,
            (Self::V2, 2) => PixelFormat::Etc2Rgba,
            (_, 10) => PixelFormat::Dxt1,
            (_, 12) => PixelFormat::Dxt5,
            (Self::V3, 13) => PixelFormat::Bgra8,
            _ => return Err(Error::UnknownFormat { raw, revision: self }),
        };
        Ok(format)
    }

    /// Encode a pixel format as an on-disk byte under this revision.
    ///
    /// Uncompressed data must already be in canonical byte order:
    /// [`PixelFormat::Rgba8`] is rejected so a missed normalization cannot
    /// silently produce a file with misordered channels.
    pub fn encode_format(self, format: PixelFormat) -> Result<u8> {
        let raw = match (self, format) {
            (_, PixelFormat::Dxt1) => 10,
            (_, PixelFormat::Dxt5) => 12,
            (Self::V3, PixelFormat::Bgra8) => 13,
            _ => {
                return Err(Error::UnrepresentableFormat {
                    format,
                    revision: self,
                })
            }
        };
        Ok(raw)
    }
}

impl FromStr for TexRevision {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "v1" | "V1" | "1" => Ok(Self::V1),
            "v2" | "V2" | "2" => Ok(Self::V2),
            "v3" | "V3" | "3" => Ok(Self::V3),
            other => Err(format!(
                "unknown TEX revision \"{other}\" (expected v1, v2 or v3)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textool_common::ChannelOrder;

    #[test]
    fn test_decode_overlapping_values() {
        // The same byte means different formats under different revisions.
        assert_eq!(
            TexRevision::V1.decode_format(0).unwrap(),
            PixelFormat::Depth16
        );
        assert_eq!(TexRevision::V2.decode_format(0).unwrap(), PixelFormat::Etc1);
        assert!(matches!(
            TexRevision::V3.decode_format(0),
            Err(Error::UnknownFormat { raw: 0, .. })
        ));
    }

    #[test]
    fn test_dxt_values_stable_across_revisions() {
        for revision in [TexRevision::V1, TexRevision::V2, TexRevision::V3] {
            assert_eq!(revision.decode_format(10).unwrap(), PixelFormat::Dxt1);
            assert_eq!(revision.decode_format(12).unwrap(), PixelFormat::Dxt5);
            assert_eq!(revision.encode_format(PixelFormat::Dxt1).unwrap(), 10);
            assert_eq!(revision.encode_format(PixelFormat::Dxt5).unwrap(), 12);
        }
    }

    #[test]
    fn test_bgra_only_in_v3() {
        assert_eq!(TexRevision::V3.decode_format(13).unwrap(), PixelFormat::Bgra8);
        assert_eq!(TexRevision::V3.encode_format(PixelFormat::Bgra8).unwrap(), 13);
        assert!(matches!(
            TexRevision::V1.encode_format(PixelFormat::Bgra8),
            Err(Error::UnrepresentableFormat { .. })
        ));
        assert!(matches!(
            TexRevision::V2.decode_format(13),
            Err(Error::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_depth_and_etc_never_encode() {
        assert!(TexRevision::V1.encode_format(PixelFormat::Depth32).is_err());
        assert!(TexRevision::V2.encode_format(PixelFormat::Etc2Rgba).is_err());
    }

    #[test]
    fn test_non_canonical_rgba_never_encodes() {
        let order = ChannelOrder([1, 2, 3, 0]);
        assert!(matches!(
            TexRevision::V3.encode_format(PixelFormat::Rgba8(order)),
            Err(Error::UnrepresentableFormat { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("v1".parse::<TexRevision>().unwrap(), TexRevision::V1);
        assert_eq!("3".parse::<TexRevision>().unwrap(), TexRevision::V3);
        assert!("v4".parse::<TexRevision>().is_err());
    }
}
