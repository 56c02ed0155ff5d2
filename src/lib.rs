//! notekeeper - Personal note keeper
//!
//! Keeps short titled notes in a record-oriented (JSON) or tabular (CSV)
//! store, with an interactive menu and scriptable subcommands on top.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::NoteError;
