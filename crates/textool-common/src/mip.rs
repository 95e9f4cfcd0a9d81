//! Mip-chain geometry and payload layout.
//!
//! Both containers store a mip chain as one contiguous payload, but they
//! disagree on the on-disk level order, so every layout computation takes
//! the order as an explicit [`LevelOrder`] parameter.

use crate::{BlockGeometry, Error, Result};

/// Smallest mip dimension per side, in pixels.
///
/// Block-compressed levels smaller than a block edge still occupy one full
/// block; the ceiling division in [`level_size`] accounts for that, so the
/// dimension floor itself is a single pixel.
pub const MIN_MIP_DIMENSION: u32 = 1;

/// A single level of a mip chain, from finest (index 0) to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipLevel {
    /// Level index, 0 is the base image.
    pub index: u32,
    /// Level width in pixels.
    pub width: u32,
    /// Level height in pixels.
    pub height: u32,
    /// Encoded size of this level in bytes.
    pub byte_size: usize,
}

/// On-disk ordering of mip levels within a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOrder {
    /// Largest level first (DDS payload order).
    FinestFirst,
    /// Smallest level first (TEX payload order).
    CoarsestFirst,
}

/// Absolute byte span of one level within a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSpan {
    /// The level occupying this span.
    pub level: MipLevel,
    /// Absolute offset of the level within the payload.
    pub offset: usize,
}

/// Number of levels in a full mip chain for the given base dimensions.
///
/// Equals `floor(log2(max(width, height))) + 1`, driven by the larger
/// dimension.
pub fn expected_mip_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).leading_zeros()
}

/// Encoded byte size of one level.
pub fn level_size(width: u32, height: u32, block: BlockGeometry) -> usize {
    let blocks_x = ((width + block.block_dimension - 1) / block.block_dimension) as usize;
    let blocks_y = ((height + block.block_dimension - 1) / block.block_dimension) as usize;
    blocks_x * blocks_y * block.bytes_per_block
}

/// Compute the level sequence for a texture, finest to coarsest.
///
/// Returns a single level when `has_mipmaps` is false.
pub fn plan_levels(
    width: u32,
    height: u32,
    block: BlockGeometry,
    has_mipmaps: bool,
) -> Vec<MipLevel> {
    let count = if has_mipmaps {
        expected_mip_count(width, height)
    } else {
        1
    };

    let mut levels = Vec::with_capacity(count as usize);
    for index in 0..count {
        let level_width = (width >> index).max(MIN_MIP_DIMENSION);
        let level_height = (height >> index).max(MIN_MIP_DIMENSION);
        levels.push(MipLevel {
            index,
            width: level_width,
            height: level_height,
            byte_size: level_size(level_width, level_height, block),
        });
    }
    levels
}

/// Assign contiguous payload offsets to `levels` in the given on-disk order.
///
/// Offsets accumulate from the start of the payload. Fails with
/// [`Error::TruncatedPayload`] naming the first level that does not fit,
/// before any downstream consumer touches the payload. Trailing bytes
/// beyond the chain are tolerated.
pub fn layout(levels: &[MipLevel], order: LevelOrder, payload_len: usize) -> Result<Vec<LevelSpan>> {
    let ordered: Vec<&MipLevel> = match order {
        LevelOrder::FinestFirst => levels.iter().collect(),
        LevelOrder::CoarsestFirst => levels.iter().rev().collect(),
    };

    let mut spans = Vec::with_capacity(levels.len());
    let mut offset = 0usize;
    for level in ordered {
        let end = offset + level.byte_size;
        if end > payload_len {
            return Err(Error::TruncatedPayload {
                level: level.index,
                needed: level.byte_size,
                available: payload_len.saturating_sub(offset),
            });
        }
        spans.push(LevelSpan {
            level: *level,
            offset,
        });
        offset = end;
    }
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DXT1: BlockGeometry = BlockGeometry {
        bytes_per_block: 8,
        block_dimension: 4,
    };
    const DXT5: BlockGeometry = BlockGeometry {
        bytes_per_block: 16,
        block_dimension: 4,
    };
    const BGRA8: BlockGeometry = BlockGeometry {
        bytes_per_block: 4,
        block_dimension: 1,
    };

    #[test]
    fn test_expected_mip_count() {
        assert_eq!(expected_mip_count(256, 256), 9);
        assert_eq!(expected_mip_count(1, 1), 1);
        // Driven by the larger dimension.
        assert_eq!(expected_mip_count(300, 150), 9);
        assert_eq!(expected_mip_count(64, 64), 7);
        assert_eq!(expected_mip_count(4, 1024), 11);
    }

    #[test]
    fn test_level_size() {
        // 16x16 blocks of 16 bytes each.
        assert_eq!(level_size(64, 64, DXT5), 4096);
        assert_eq!(level_size(4, 4, DXT5), 16);
        // Sub-block levels still occupy a whole block.
        assert_eq!(level_size(2, 2, DXT5), 16);
        assert_eq!(level_size(1, 1, DXT5), 16);
        assert_eq!(level_size(1, 1, DXT1), 8);
        assert_eq!(level_size(16, 8, BGRA8), 512);
    }

    #[test]
    fn test_plan_levels_64_dxt5() {
        let levels = plan_levels(64, 64, DXT5, true);
        assert_eq!(levels.len(), 7);
        assert_eq!(levels[0].byte_size, 4096);
        assert_eq!(levels[4].width, 4);
        assert_eq!(levels[4].height, 4);
        assert_eq!(levels[4].byte_size, 16);
        assert_eq!(levels[6].width, 1);
        assert_eq!(levels[6].byte_size, 16);
    }

    #[test]
    fn test_plan_levels_no_mipmaps() {
        let levels = plan_levels(256, 128, DXT1, false);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].byte_size, 64 * 32 * 8);
    }

    #[test]
    fn test_plan_levels_non_square() {
        let levels = plan_levels(8, 2, BGRA8, true);
        assert_eq!(levels.len(), 4);
        // The short side clamps at the minimum dimension.
        assert_eq!((levels[2].width, levels[2].height), (2, 1));
        assert_eq!((levels[3].width, levels[3].height), (1, 1));
    }

    #[test]
    fn test_layout_orders() {
        let levels = plan_levels(16, 16, DXT1, true);
        let total: usize = levels.iter().map(|l| l.byte_size).sum();

        let finest = layout(&levels, LevelOrder::FinestFirst, total).unwrap();
        assert_eq!(finest[0].level.index, 0);
        assert_eq!(finest[0].offset, 0);
        assert_eq!(finest[1].offset, levels[0].byte_size);

        let coarsest = layout(&levels, LevelOrder::CoarsestFirst, total).unwrap();
        assert_eq!(coarsest[0].level.index, levels.len() as u32 - 1);
        assert_eq!(coarsest[0].offset, 0);
        // Base level sits at the end of the payload.
        let last = coarsest.last().unwrap();
        assert_eq!(last.level.index, 0);
        assert_eq!(last.offset + last.level.byte_size, total);
    }

    #[test]
    fn test_layout_truncated() {
        let levels = plan_levels(16, 16, DXT1, true);
        let total: usize = levels.iter().map(|l| l.byte_size).sum();

        let err = layout(&levels, LevelOrder::FinestFirst, total - 1).unwrap_err();
        match err {
            Error::TruncatedPayload { level, .. } => {
                // The last (coarsest) level is the one that no longer fits.
                assert_eq!(level, levels.len() as u32 - 1);
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_layout_tolerates_trailing_slack() {
        let levels = plan_levels(8, 8, DXT1, false);
        assert!(layout(&levels, LevelOrder::FinestFirst, levels[0].byte_size + 32).is_ok());
    }
}
