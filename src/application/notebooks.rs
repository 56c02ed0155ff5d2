//! Routing of note commands to the repository for a chosen encoding

use crate::domain::Clock;
use crate::error::{NoteError, Result};
use crate::infrastructure::{Config, Encoding, NoteRepository};
use std::path::Path;

/// The record-oriented and tabular stores, opened side by side.
/// The two repositories know nothing about each other.
#[derive(Debug)]
pub struct Notebooks {
    json: NoteRepository,
    tabular: NoteRepository,
}

impl Notebooks {
    /// Open both stores from configuration
    pub fn open(config: &Config) -> Result<Self> {
        let clock = config.clock()?;
        Self::open_with_clocks(config, Box::new(clock), Box::new(clock))
    }

    /// Open both stores with injected clocks
    pub fn open_with_clocks(
        config: &Config,
        json_clock: Box<dyn Clock>,
        tabular_clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let json = Self::open_slot(Encoding::Json, &config.json_path, json_clock)?;
        let tabular = Self::open_slot(Encoding::Tabular, &config.csv_path, tabular_clock)?;
        Ok(Notebooks { json, tabular })
    }

    fn open_slot(
        expected: Encoding,
        path: &Path,
        clock: Box<dyn Clock>,
    ) -> Result<NoteRepository> {
        // The json slot must not silently open a csv file and vice versa
        if Encoding::from_path(path)? != expected {
            return Err(NoteError::Format(path.to_path_buf()));
        }
        NoteRepository::open_with_clock(path, clock)
    }

    pub fn get(&self, encoding: Encoding) -> &NoteRepository {
        match encoding {
            Encoding::Json => &self.json,
            Encoding::Tabular => &self.tabular,
        }
    }

    pub fn get_mut(&mut self, encoding: Encoding) -> &mut NoteRepository {
        match encoding {
            Encoding::Json => &mut self.json,
            Encoding::Tabular => &mut self.tabular,
        }
    }
}
