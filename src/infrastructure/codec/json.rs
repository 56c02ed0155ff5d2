//! Record-oriented encoding: a JSON array of note objects

use super::{DecodeError, Encoding, NoteCodec};
use crate::domain::Note;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl NoteCodec for JsonCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Json
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<Note>, DecodeError> {
        // An empty file is an empty store
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(bytes).map_err(|e| DecodeError(e.to_string()))
    }

    fn encode(&self, notes: &[Note]) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(notes)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
