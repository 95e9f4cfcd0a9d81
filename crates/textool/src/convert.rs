//! Container conversion pipelines.
//!
//! Both directions run fully in memory: decode the source header, lay the
//! mip chain out, normalize channel order if needed, then emit the
//! destination header and the levels in the destination's on-disk order.
//! Every validation happens before the first output byte is produced.

use std::fs;
use std::path::{Path, PathBuf};

use textool_common::mip::{self, LevelOrder, LevelSpan, MipLevel};
use textool_common::{PixelFormat, TextureDescriptor};
use textool_tex::TexRevision;

use crate::swizzle::normalize_channels;
use crate::{Error, Result};

/// Options shared by both conversion directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// TEX format-enumeration revision to read and write.
    pub revision: TexRevision,
}

/// Outcome of a successful file conversion.
#[derive(Debug, Clone)]
pub struct Converted {
    /// Path the converted file was written to.
    pub output: PathBuf,
    /// Descriptor of the converted texture.
    pub descriptor: TextureDescriptor,
}

/// Convert an in-memory DDS file into a TEX file.
pub fn dds_to_tex(data: &[u8], options: &ConvertOptions) -> Result<Vec<u8>> {
    convert_dds_to_tex(data, options).map(|(_, out)| out)
}

/// Convert an in-memory TEX file into a DDS file.
pub fn tex_to_dds(data: &[u8], options: &ConvertOptions) -> Result<Vec<u8>> {
    convert_tex_to_dds(data, options).map(|(_, out)| out)
}

fn convert_dds_to_tex(
    data: &[u8],
    options: &ConvertOptions,
) -> Result<(TextureDescriptor, Vec<u8>)> {
    let (mut desc, payload) = textool_dds::parse_dds(data)?;
    let geometry = desc
        .format
        .block_geometry()
        .ok_or(Error::UnsupportedFormat(desc.format))?;

    let levels = mip::plan_levels(desc.width, desc.height, geometry, desc.has_mipmaps);
    let src_spans = mip::layout(&levels, LevelOrder::FinestFirst, payload.len())?;
    let total: usize = levels.iter().map(|l| l.byte_size).sum();

    let mut payload = payload.to_vec();
    if let PixelFormat::Rgba8(order) = desc.format {
        // The chain occupies the leading `total` bytes; all uncompressed
        // level sizes are multiples of 4, so the slice is pixel-aligned.
        normalize_channels(&mut payload[..total], order);
        desc.format = PixelFormat::Bgra8;
    }

    let mut out = Vec::with_capacity(16 + total);
    textool_tex::write_header(&mut out, &desc, options.revision)?;
    copy_levels(&mut out, &payload, &levels, &src_spans, LevelOrder::CoarsestFirst);
    Ok((desc, out))
}

fn convert_tex_to_dds(
    data: &[u8],
    options: &ConvertOptions,
) -> Result<(TextureDescriptor, Vec<u8>)> {
    let (desc, payload) = textool_tex::parse_tex(data, options.revision)?;
    let geometry = desc
        .format
        .block_geometry()
        .ok_or(Error::UnsupportedFormat(desc.format))?;

    let levels = mip::plan_levels(desc.width, desc.height, geometry, desc.has_mipmaps);
    let src_spans = mip::layout(&levels, LevelOrder::CoarsestFirst, payload.len())?;
    let total: usize = levels.iter().map(|l| l.byte_size).sum();

    let mut out = Vec::with_capacity(128 + total);
    textool_dds::write_header(&mut out, &desc)?;
    copy_levels(&mut out, payload, &levels, &src_spans, LevelOrder::FinestFirst);
    Ok((desc, out))
}

/// Append the mip chain to `out` in `dst_order`, reading each level from its
/// source span.
fn copy_levels(
    out: &mut Vec<u8>,
    payload: &[u8],
    levels: &[MipLevel],
    src_spans: &[LevelSpan],
    dst_order: LevelOrder,
) {
    let mut offsets = vec![0usize; levels.len()];
    for span in src_spans {
        offsets[span.level.index as usize] = span.offset;
    }

    let ordered: Vec<&MipLevel> = match dst_order {
        LevelOrder::FinestFirst => levels.iter().collect(),
        LevelOrder::CoarsestFirst => levels.iter().rev().collect(),
    };
    for level in ordered {
        let offset = offsets[level.index as usize];
        out.extend_from_slice(&payload[offset..offset + level.byte_size]);
    }
}

/// Derive the output path next to `input` by replacing its extension.
pub fn sibling_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Convert one file to the sibling container, dispatching on the extension.
///
/// `.dds` inputs become `.tex` files and vice versa, written next to the
/// input. The converted bytes are staged to a temporary file and renamed
/// into place, so a failed conversion never leaves a partial output behind.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<Converted> {
    let extension = input.extension().and_then(|e| e.to_str()).unwrap_or("");

    let (descriptor, output, converted) = if extension.eq_ignore_ascii_case("dds") {
        let data = fs::read(input)?;
        let (descriptor, converted) = convert_dds_to_tex(&data, options)?;
        (descriptor, sibling_path(input, "tex"), converted)
    } else if extension.eq_ignore_ascii_case("tex") {
        let data = fs::read(input)?;
        let (descriptor, converted) = convert_tex_to_dds(&data, options)?;
        (descriptor, sibling_path(input, "dds"), converted)
    } else {
        return Err(Error::UnrecognizedExtension(input.to_path_buf()));
    };

    let staging = output.with_extension("tmp");
    fs::write(&staging, &converted)?;
    fs::rename(&staging, &output)?;

    Ok(Converted { output, descriptor })
}
