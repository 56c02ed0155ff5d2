//! Configuration management

use crate::domain::clock::DEFAULT_UTC_OFFSET_HOURS;
use crate::domain::SystemClock;
use crate::error::{NoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "notekeeper.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "NOTEKEEPER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Record-oriented store
    pub json_path: PathBuf,
    /// Tabular store
    pub csv_path: PathBuf,
    /// Civil offset used for timestamps, in whole hours
    pub utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            json_path: PathBuf::from("notes.json"),
            csv_path: PathBuf::from("notes.csv"),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl Config {
    /// Resolve configuration: explicit path, then `NOTEKEEPER_CONFIG`,
    /// then `notekeeper.toml` in `dir`, else defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_file(Path::new(&path));
        }

        let local = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_file(&local);
        }

        Ok(Config::default())
    }

    /// Load config from a TOML file; relative store paths resolve against the file's directory
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NoteError::Config(format!("Config file not found: {}", path.display()))
            } else {
                NoteError::Io(e)
            }
        })?;

        let mut config = Self::from_toml(&contents)?;
        if let Some(base) = path.parent() {
            config.json_path = base.join(&config.json_path);
            config.csv_path = base.join(&config.csv_path);
        }
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(NoteError::Config(format!(
                "utc_offset_hours must be between -23 and 23, got {}",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }

    /// Clock producing timestamps at the configured offset
    pub fn clock(&self) -> Result<SystemClock> {
        SystemClock::from_offset_hours(self.utc_offset_hours).ok_or_else(|| {
            NoteError::Config(format!("Invalid UTC offset: {}", self.utc_offset_hours))
        })
    }
}
