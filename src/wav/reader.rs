//! Single-pass RIFF/WAVE chunk traversal.
//!
//! Validates the RIFF/WAVE envelope, then walks sibling chunks in file
//! order, extracting the `fmt ` descriptor and the first `LIST`/`INFO`
//! block while skipping everything else. Unknown-chunk tolerance is the
//! load-bearing property here: files in the wild routinely carry vendor
//! chunks (`fact`, `PEAK`, `cue `, `smpl`, ...) that must not abort the
//! scan, so the fallback skip arm is mandatory rather than incidental.

use std::{io::BufRead, path::PathBuf};

use log::{debug, warn};

use crate::{
    error::{MetaError, MetaResult},
    wav::{
        chunks::{ChunkKind, INFO_LIST_TYPE, RIFF_CHUNK, WAVE_CHUNK},
        cursor::ChunkCursor,
        fmt::FormatDescriptor,
        info::{self, InfoEntry},
        metadata::WavMetadata,
    },
};

/// Fields accumulated during the scan. Published as an immutable
/// `WavMetadata` only when the whole pass succeeds; a failed pass leaves
/// nothing observable.
#[derive(Debug, Default)]
struct MetadataBuilder {
    format: Option<FormatDescriptor>,
    data_size: u32,
    info: Option<Vec<InfoEntry>>,
}

pub(crate) fn read_metadata<R: BufRead>(
    reader: R,
    source_path: PathBuf,
) -> MetaResult<WavMetadata> {
    let mut cursor = ChunkCursor::new(reader);

    // RIFF envelope: tag, overall size (recorded by writers, informational
    // here), WAVE form type.
    let riff = cursor.read_id()?;
    if riff != RIFF_CHUNK {
        return Err(MetaError::not_riff(riff));
    }
    let _riff_size = cursor.read_u32_le()?;

    let wave = cursor.read_id()?;
    if wave != WAVE_CHUNK {
        return Err(MetaError::not_wave(wave));
    }

    let mut builder = MetadataBuilder::default();
    // Only the first INFO list in a file is honored.
    let mut info_captured = false;

    while cursor.has_more()? {
        let header = cursor.read_header()?;
        let body_size = u64::from(header.size);
        debug!("chunk '{}', {} bytes", header.id, header.size);

        match ChunkKind::of(&header.id) {
            ChunkKind::Fmt => {
                if builder.format.is_some() {
                    warn!("duplicate fmt chunk; the later one wins");
                }
                builder.format = Some(read_format(&mut cursor)?);
            }
            ChunkKind::Data => {
                // The payload is never buffered; only its size matters.
                builder.data_size = header.size;
                cursor.skip(body_size)?;
            }
            ChunkKind::List if !info_captured => {
                let list_type = cursor.read_id()?;
                if list_type == INFO_LIST_TYPE {
                    builder.info = Some(info::parse_info_entries(&mut cursor, header.size)?);
                    info_captured = true;
                } else {
                    cursor.skip(body_size.saturating_sub(4))?;
                }
            }
            // A second LIST after INFO was captured, id3 tags, and every
            // unrecognized tag are skipped wholesale.
            ChunkKind::List | ChunkKind::Id3 | ChunkKind::Other => {
                cursor.skip(body_size)?;
            }
        }
    }

    Ok(WavMetadata::new(
        source_path,
        builder.format,
        builder.data_size,
        builder.info,
    ))
}

/// Read a `fmt ` body: the canonical 16-byte layout, plus the declared
/// extra-parameter region for non-PCM codecs. The declared chunk size is
/// not reconciled against the bytes actually consumed; a lying size
/// shifts every later chunk boundary.
fn read_format<R: BufRead>(cursor: &mut ChunkCursor<R>) -> MetaResult<FormatDescriptor> {
    let mut raw = [0u8; 16];
    cursor.read_exact(&mut raw)?;
    let mut descriptor = FormatDescriptor::from_raw(&raw);

    if !descriptor.codec.is_pcm() {
        let extra = cursor.read_u16_le()?;
        cursor.skip(u64::from(extra))?;
        descriptor.extra_param_size = Some(extra);
    }

    Ok(descriptor)
}
