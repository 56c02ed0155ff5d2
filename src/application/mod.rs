//! Application layer - Composition of the note stores

pub mod notebooks;

pub use notebooks::Notebooks;
