pub mod chunks;
pub mod cursor;
pub mod fmt;
pub mod info;
pub mod metadata;
pub mod reader;

use core::fmt::{Display, Formatter, Result as FmtResult};

pub use cursor::ChunkCursor;
pub use fmt::FormatDescriptor;
pub use info::{InfoEntry, InfoTag};
pub use metadata::WavMetadata;

/// WAV codec tags (wFormatTag)
///
/// The mapped set covers the low registry values; everything else in the
/// long tail of legacy assignments (GSM610, MP3, G.72x ADPCM variants, ...)
/// is carried verbatim as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CodecTag {
    /// PCM (uncompressed)
    Pcm,
    /// Microsoft ADPCM
    Adpcm,
    /// IEEE Float
    IeeeFloat,
    /// VSELP
    Vselp,
    /// IBM CVSD
    IbmCvsd,
    /// A-law
    ALaw,
    /// Mu-law
    MuLaw,
    /// DTS
    Dts,
    /// Unknown or unmapped legacy format
    Unknown(u16),
}

impl CodecTag {
    /// Canonical numeric WAV format tag
    pub const fn as_u16(self) -> u16 {
        match self {
            CodecTag::Pcm => 0x0001,
            CodecTag::Adpcm => 0x0002,
            CodecTag::IeeeFloat => 0x0003,
            CodecTag::Vselp => 0x0004,
            CodecTag::IbmCvsd => 0x0005,
            CodecTag::ALaw => 0x0006,
            CodecTag::MuLaw => 0x0007,
            CodecTag::Dts => 0x0008,
            CodecTag::Unknown(code) => code,
        }
    }

    pub const fn const_from(code: u16) -> Self {
        match code {
            0x0001 => CodecTag::Pcm,
            0x0002 => CodecTag::Adpcm,
            0x0003 => CodecTag::IeeeFloat,
            0x0004 => CodecTag::Vselp,
            0x0005 => CodecTag::IbmCvsd,
            0x0006 => CodecTag::ALaw,
            0x0007 => CodecTag::MuLaw,
            0x0008 => CodecTag::Dts,
            other => CodecTag::Unknown(other),
        }
    }

    /// Short symbolic name
    pub const fn as_str(self) -> &'static str {
        match self {
            CodecTag::Pcm => "PCM",
            CodecTag::Adpcm => "ADPCM",
            CodecTag::IeeeFloat => "IEEE_FLOAT",
            CodecTag::Vselp => "VSELP",
            CodecTag::IbmCvsd => "IBM_CVSD",
            CodecTag::ALaw => "A_LAW",
            CodecTag::MuLaw => "MU_LAW",
            CodecTag::Dts => "DTS",
            CodecTag::Unknown(_) => "UNKNOWN",
        }
    }

    /// Human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            CodecTag::Pcm => "Uncompressed PCM",
            CodecTag::Adpcm => "Microsoft ADPCM",
            CodecTag::IeeeFloat => "IEEE floating point",
            CodecTag::Vselp => "VSELP compressed speech",
            CodecTag::IbmCvsd => "IBM CVSD",
            CodecTag::ALaw => "A-law G.711 companded PCM",
            CodecTag::MuLaw => "Mu-law G.711 companded PCM",
            CodecTag::Dts => "DTS coherent acoustics",
            CodecTag::Unknown(_) => "Unknown or unmapped WAV format",
        }
    }

    /// True if this is raw integer PCM
    pub const fn is_pcm(self) -> bool {
        matches!(self, CodecTag::Pcm)
    }

    /// True if this format uses G.711 companding
    pub const fn is_companded(self) -> bool {
        matches!(self, CodecTag::ALaw | CodecTag::MuLaw)
    }
}

impl From<u16> for CodecTag {
    fn from(code: u16) -> Self {
        Self::const_from(code)
    }
}

impl From<CodecTag> for u16 {
    fn from(val: CodecTag) -> Self {
        val.as_u16()
    }
}

impl Display for CodecTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if f.alternate() {
            match self {
                CodecTag::Unknown(code) => {
                    write!(f, "{} (0x{:04X})", self.description(), code)
                }
                other => write!(f, "{}", other.description()),
            }
        } else {
            match self {
                CodecTag::Unknown(code) => write!(f, "UNKNOWN(0x{:04X})", code),
                other => write!(f, "{}", other.as_str()),
            }
        }
    }
}
