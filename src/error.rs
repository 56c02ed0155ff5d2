//! Error types for notekeeper

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notekeeper
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Unsupported store format: {0}")]
    Format(PathBuf),

    #[error("Failed to parse {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    #[error("Note not found: {0}")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl NoteError {
    /// Build a parse error for the given store path
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        NoteError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NoteError::Format(_) => 2,
            NoteError::Parse { .. } => 3,
            NoteError::NotFound(_) => 4,
            NoteError::Config(_) | NoteError::TomlDeserialize(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NoteError::Format(path) => {
                format!(
                    "Unsupported store format: {}\n\n\
                    Supported formats:\n\
                    • .json (record-oriented)\n\
                    • .csv (tabular, ';'-delimited)",
                    path.display()
                )
            }
            NoteError::Parse { path, message } => {
                format!(
                    "Failed to parse {}: {}\n\n\
                    Suggestions:\n\
                    • Check the file was not edited by hand\n\
                    • Timestamps must look like DD-MM-YYYY HH:MM:SS\n\
                    • Move the file aside to start with an empty store",
                    path.display(),
                    message
                )
            }
            NoteError::NotFound(id) => {
                format!(
                    "Note not found: {}\n\n\
                    Use 'notekeeper list' to see existing note ids",
                    id
                )
            }
            NoteError::InvalidInput(msg) if msg.contains("date") => {
                format!(
                    "Invalid input: {}\n\n\
                    Expected format: DD-MM-YYYY, today or yesterday\n\
                    Example: notekeeper by-date 17-01-2025",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NoteError
pub type Result<T> = std::result::Result<T, NoteError>;
