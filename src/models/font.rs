use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Font container formats recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    TrueType,
    OpenType,
    TrueTypeCollection,
    WindowsBitmap,
}

impl FontFormat {
    /// Match an extension (without the leading dot). Matching is case-sensitive,
    /// so `TTF` is not a font extension.
    pub fn from_extension(ext: &OsStr) -> Option<Self> {
        match ext.to_str()? {
            "ttf" => Some(FontFormat::TrueType),
            "otf" => Some(FontFormat::OpenType),
            "ttc" => Some(FontFormat::TrueTypeCollection),
            "fon" => Some(FontFormat::WindowsBitmap),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FontFormat::TrueType => "ttf",
            FontFormat::OpenType => "otf",
            FontFormat::TrueTypeCollection => "ttc",
            FontFormat::WindowsBitmap => "fon",
        }
    }
}

/// A candidate font file found in the scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
    pub format: FontFormat,
}

impl FontFile {
    /// Build a font file from a path, if its extension is a recognized one
    pub fn from_path(path: &Path) -> Option<Self> {
        let format = FontFormat::from_extension(path.extension()?)?;
        Some(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }

    pub fn file_stem(&self) -> &OsStr {
        self.path.file_stem().unwrap_or_default()
    }
}

/// Outcome of looking up the full font name of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    /// Resolved full name
    Found(String),
    /// The font parsed but carries no usable Windows full-name record
    NotFound,
    /// The file could not be read, parsed or decoded
    ParseError(String),
}

/// Why a file is being moved to the failure directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuarantineReason {
    NameNotFound,
    Unparsable(String),
}

impl fmt::Display for QuarantineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuarantineReason::NameNotFound => write!(f, "no full name record"),
            QuarantineReason::Unparsable(detail) => write!(f, "unreadable metadata: {}", detail),
        }
    }
}
