use std::io;
use thiserror::Error;

use crate::wav::chunks::ChunkID;

/// Result type for wav-meta operations
pub type MetaResult<T> = Result<T, MetaError>;

/// Error type for metadata extraction.
///
/// Every variant is terminal for the current parse: there is no partial
/// result or local recovery, the scan aborts and surfaces one of these.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Underlying read failure from the byte source (file vanished
    /// mid-read, pipe closed, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source does not begin with the ASCII `RIFF` tag
    #[error("not a RIFF file: found '{found}' at the start of the stream")]
    NotRiff { found: ChunkID },

    /// The RIFF envelope does not carry the `WAVE` form type
    #[error("not a WAVE file: found '{found}' where the form type belongs")]
    NotWave { found: ChunkID },

    /// Fewer bytes remained than a field read or skip required
    #[error("truncated input: needed {needed} more bytes after offset {offset}")]
    Truncated { needed: u64, offset: u64 },
}

impl MetaError {
    pub const fn not_riff(found: ChunkID) -> Self {
        MetaError::NotRiff { found }
    }

    pub const fn not_wave(found: ChunkID) -> Self {
        MetaError::NotWave { found }
    }

    pub const fn truncated(needed: u64, offset: u64) -> Self {
        MetaError::Truncated { needed, offset }
    }

    /// True for both flavors of shortfall: an explicit truncation and an
    /// unexpected-EOF surfaced by the underlying reader.
    pub fn is_truncation(&self) -> bool {
        match self {
            MetaError::Truncated { .. } => true,
            MetaError::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}
