//! `LIST`/`INFO` metadata entries.
//!
//! An INFO block carries human-readable tags (artist, title, album, ...)
//! as a flat run of individually length-prefixed text records. Entry
//! lengths alone drive the bookkeeping here; writers that pad odd-length
//! entries shift the next chunk boundary by one byte, which this parser
//! inherits from the on-disk convention it targets.

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::io::BufRead;

use log::warn;

use crate::{
    error::MetaResult,
    wav::{chunks::ChunkID, cursor::ChunkCursor},
};

/// Semantic labels for the recognized INFO entry codes.
///
/// Codes outside this set are retained verbatim on their entries, just
/// without a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoTag {
    Artist,
    Copyright,
    TrackTitle,
    AlbumTitle,
    TrackNumber,
    Year,
    Genre,
    Software,
    Comment,
}

impl InfoTag {
    /// Four-character code this tag is stored under
    pub const fn code(self) -> ChunkID {
        match self {
            InfoTag::Artist => ChunkID::new(b"IART"),
            InfoTag::Copyright => ChunkID::new(b"ICOP"),
            InfoTag::TrackTitle => ChunkID::new(b"INAM"),
            InfoTag::AlbumTitle => ChunkID::new(b"IPRD"),
            InfoTag::TrackNumber => ChunkID::new(b"ITRK"),
            InfoTag::Year => ChunkID::new(b"ICRD"),
            InfoTag::Genre => ChunkID::new(b"IGNR"),
            InfoTag::Software => ChunkID::new(b"ISFT"),
            InfoTag::Comment => ChunkID::new(b"ICMT"),
        }
    }

    /// Reverse mapping from a raw four-character code
    pub const fn from_code(id: &ChunkID) -> Option<Self> {
        match id.as_bytes() {
            b"IART" => Some(InfoTag::Artist),
            b"ICOP" => Some(InfoTag::Copyright),
            b"INAM" => Some(InfoTag::TrackTitle),
            b"IPRD" => Some(InfoTag::AlbumTitle),
            b"ITRK" => Some(InfoTag::TrackNumber),
            b"ICRD" => Some(InfoTag::Year),
            b"IGNR" => Some(InfoTag::Genre),
            b"ISFT" => Some(InfoTag::Software),
            b"ICMT" => Some(InfoTag::Comment),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            InfoTag::Artist => "ARTIST",
            InfoTag::Copyright => "COPYRIGHT",
            InfoTag::TrackTitle => "TRACKTITLE",
            InfoTag::AlbumTitle => "ALBUMTITLE",
            InfoTag::TrackNumber => "TRACKNUM",
            InfoTag::Year => "YEAR",
            InfoTag::Genre => "GENRE",
            InfoTag::Software => "SOFTWARE",
            InfoTag::Comment => "COMMENT",
        }
    }
}

impl Display for InfoTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// One tagged text entry from a `LIST`/`INFO` block. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoEntry {
    pub tag: ChunkID,
    pub text: String,
}

impl InfoEntry {
    /// Semantic label for the tag, when it is one of the recognized codes
    pub fn known_tag(&self) -> Option<InfoTag> {
        InfoTag::from_code(&self.tag)
    }
}

impl Display for InfoEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.known_tag() {
            Some(tag) => write!(f, "{} ({}) -> {}", self.tag, tag, self.text),
            None => write!(f, "{} -> {}", self.tag, self.text),
        }
    }
}

/// Decode the body of a `LIST`/`INFO` chunk into its tagged text entries.
///
/// The caller has already consumed the chunk header and the 4-byte `INFO`
/// sub-tag; `list_size` is the chunk's declared total size, which includes
/// that sub-tag. Each entry is `{4-byte tag, u32-LE length, length bytes
/// of text}`. An entry whose declared length overruns what remains of the
/// list is still read in full, matching how files written with sloppy
/// sizes are read everywhere else.
pub fn parse_info_entries<R: BufRead>(
    cursor: &mut ChunkCursor<R>,
    list_size: u32,
) -> MetaResult<Vec<InfoEntry>> {
    let mut entries = Vec::new();
    // The INFO sub-tag counts against the declared list size.
    let mut remaining = i64::from(list_size) - 4;

    while remaining > 0 {
        let tag = cursor.read_id()?;
        let len = cursor.read_u32_le()?;
        if i64::from(len) > remaining - 8 {
            warn!(
                "INFO entry '{}' declares {} bytes with only {} left in the list",
                tag,
                len,
                (remaining - 8).max(0)
            );
        }
        let raw = cursor.read_vec(u64::from(len))?;
        entries.push(InfoEntry {
            tag,
            text: trim_text(&raw),
        });
        remaining -= 8 + i64::from(len);
    }

    Ok(entries)
}

/// Strip leading and trailing bytes at or below 0x20, covering both
/// whitespace and the NUL padding INFO writers commonly append.
fn trim_text(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}
