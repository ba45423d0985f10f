use core::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use crate::wav::{
    fmt::FormatDescriptor,
    info::{InfoEntry, InfoTag},
    CodecTag,
};

/// Immutable result of one metadata scan.
///
/// Constructed only by a successful parse pass; a failed pass yields no
/// record at all, so a `WavMetadata` in hand always describes a source
/// whose envelope and traversed chunk headers were readable.
#[derive(Debug, Clone, PartialEq)]
pub struct WavMetadata {
    source_path: PathBuf,
    format: Option<FormatDescriptor>,
    data_size: u32,
    info: Option<Vec<InfoEntry>>,
}

impl WavMetadata {
    pub(crate) fn new(
        source_path: PathBuf,
        format: Option<FormatDescriptor>,
        data_size: u32,
        info: Option<Vec<InfoEntry>>,
    ) -> Self {
        WavMetadata {
            source_path,
            format,
            data_size,
            info,
        }
    }

    /// Path the source was opened from, or `<stream>` for reader sources
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Audio encoding parameters, absent when the file carried no `fmt `
    /// chunk. Callers decide whether an absent format is acceptable.
    pub const fn format(&self) -> Option<&FormatDescriptor> {
        self.format.as_ref()
    }

    /// Declared size of the `data` chunk payload, 0 when none was seen
    pub const fn data_size(&self) -> u32 {
        self.data_size
    }

    /// INFO entries in file order, absent when no `LIST`/`INFO` was seen
    pub fn info(&self) -> Option<&[InfoEntry]> {
        self.info.as_deref()
    }

    pub const fn has_info(&self) -> bool {
        self.info.is_some()
    }

    /// Look up an INFO entry by its raw four-character code.
    ///
    /// Returns the first match in file order.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.info
            .as_deref()?
            .iter()
            .find(|entry| entry.tag.as_str() == Some(code))
            .map(|entry| entry.text.as_str())
    }

    /// Look up an INFO entry by its semantic tag.
    pub fn lookup_tag(&self, tag: InfoTag) -> Option<&str> {
        let code = tag.code();
        self.info
            .as_deref()?
            .iter()
            .find(|entry| entry.tag == code)
            .map(|entry| entry.text.as_str())
    }

    /// True for the 8 kHz mono 8-bit G.711 mu-law combination that IVR and
    /// call-recording platforms expect. Evaluated purely on parsed fields.
    pub fn is_telephony_format(&self) -> bool {
        match &self.format {
            Some(format) => {
                format.byte_rate == 8_000
                    && format.channels == 1
                    && format.codec == CodecTag::MuLaw
                    && format.bits_per_sample == 8
            }
            None => false,
        }
    }
}

impl Display for WavMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "WAV metadata for {}", self.source_path.display())?;
        match &self.format {
            Some(format) => writeln!(f, "{}", format)?,
            None => writeln!(f, "no fmt chunk present")?,
        }
        writeln!(f, "DataSize: {}", self.data_size)?;
        if let Some(entries) = &self.info {
            writeln!(f, "LIST INFO:")?;
            for entry in entries {
                writeln!(f, "    {}", entry)?;
            }
        }
        Ok(())
    }
}
