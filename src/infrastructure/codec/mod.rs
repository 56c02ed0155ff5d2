//! On-disk encodings for note collections

pub mod json;
pub mod tabular;

use crate::domain::Note;
use crate::error::{NoteError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub use json::JsonCodec;
pub use tabular::TabularCodec;

/// Content could not be decoded into notes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DecodeError(pub String);

/// Encode/decode strategy for one on-disk encoding
pub trait NoteCodec {
    /// Which encoding this codec implements
    fn encoding(&self) -> Encoding;

    /// Decode file content into notes, preserving file order
    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<Note>, DecodeError>;

    /// Encode the full collection, in order
    fn encode(&self, notes: &[Note]) -> Result<Vec<u8>>;
}

/// Supported store encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Array of objects (`.json`)
    Json,
    /// `;`-delimited rows with a header (`.csv`)
    Tabular,
}

impl Encoding {
    pub const ALL: [Encoding; 2] = [Encoding::Json, Encoding::Tabular];

    /// Pick the encoding from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Encoding::Json),
            Some("csv") => Ok(Encoding::Tabular),
            _ => Err(NoteError::Format(path.to_path_buf())),
        }
    }

    /// File extension used by this encoding
    pub fn extension(&self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Tabular => "csv",
        }
    }

    /// Number shown in the format prompt
    pub fn menu_number(&self) -> u8 {
        match self {
            Encoding::Json => 1,
            Encoding::Tabular => 2,
        }
    }

    /// Codec implementing this encoding
    pub fn codec(&self) -> Box<dyn NoteCodec> {
        match self {
            Encoding::Json => Box::new(JsonCodec),
            Encoding::Tabular => Box::new(TabularCodec),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "json" => Ok(Encoding::Json),
            "2" | "csv" | "tabular" => Ok(Encoding::Tabular),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: 1 (json), 2 (csv)",
                s.trim()
            )),
        }
    }
}
