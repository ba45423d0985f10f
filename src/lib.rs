// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms
#![allow(clippy::collapsible_if)] // Sometimes clearer to have separate conditions
// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`
#![warn(clippy::panic)] // Avoids using `panic!` in production code
// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions

pub mod bytes;
pub mod error;
pub mod wav;

pub use crate::{
    error::{MetaError, MetaResult},
    wav::{CodecTag, FormatDescriptor, InfoEntry, InfoTag, WavMetadata},
};

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

// Public API

/// Parse WAV metadata from any buffered sequential byte source.
///
/// Walks the RIFF chunk sequence once, front to back, extracting the
/// `fmt ` descriptor, the declared `data` payload size, and the first
/// `LIST`/`INFO` block. Audio samples are never buffered or decoded.
///
/// # Errors
///
/// Returns an error if the RIFF/WAVE envelope is missing, the source ends
/// mid-field, or the underlying reader fails. Chunks with unrecognized
/// tags are skipped, never an error.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let mut bytes = Vec::new();
/// bytes.extend_from_slice(b"RIFF");
/// bytes.extend_from_slice(&4u32.to_le_bytes());
/// bytes.extend_from_slice(b"WAVE");
///
/// let meta = wav_meta::parse(Cursor::new(bytes))?;
/// assert!(meta.format().is_none());
/// # Ok::<(), wav_meta::MetaError>(())
/// ```
pub fn parse<R: BufRead>(reader: R) -> MetaResult<WavMetadata> {
    wav::reader::read_metadata(reader, PathBuf::from("<stream>"))
}

/// Extract metadata from a WAV file on disk.
///
/// Opens the file, wraps it in a `BufReader`, and delegates to [`parse`].
/// The file handle is released when this returns, on success and on
/// failure alike.
pub fn info<P: AsRef<Path>>(fp: P) -> MetaResult<WavMetadata> {
    let path = fp.as_ref();
    let file = File::open(path)?;
    wav::reader::read_metadata(BufReader::new(file), path.to_path_buf())
}
