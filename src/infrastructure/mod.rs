//! Infrastructure layer - Encodings, persistence and configuration

pub mod codec;
pub mod config;
pub mod repository;

pub use codec::{Encoding, NoteCodec};
pub use config::Config;
pub use repository::NoteRepository;
