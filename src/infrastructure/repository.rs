//! File-backed note repository

use crate::domain::{Clock, Note, SystemClock};
use crate::error::{NoteError, Result};
use crate::infrastructure::codec::{Encoding, NoteCodec};
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory ordered collection of notes bound to one file and one encoding.
///
/// Every successful mutation rewrites the whole file, so the file is always a
/// snapshot of the collection.
pub struct NoteRepository {
    path: PathBuf,
    codec: Box<dyn NoteCodec>,
    clock: Box<dyn Clock>,
    notes: Vec<Note>,
}

impl std::fmt::Debug for NoteRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteRepository")
            .field("path", &self.path)
            .field("encoding", &self.codec.encoding())
            .field("notes", &self.notes.len())
            .finish()
    }
}

impl NoteRepository {
    /// Open the store at `path`, timestamping with the default UTC+3 clock
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_clock(path, Box::new(SystemClock::default()))
    }

    /// Open the store at `path` with an injected clock
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Result<Self> {
        let path = path.into();
        let codec = Encoding::from_path(&path)?.codec();

        let mut repo = NoteRepository {
            path,
            codec,
            clock,
            notes: Vec::new(),
        };
        repo.load()?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> Encoding {
        self.codec.encoding()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Replace the collection with the file's content.
    /// A missing file yields an empty collection.
    pub fn load(&mut self) -> Result<()> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} does not exist, starting empty", self.path.display());
                self.notes.clear();
                return Ok(());
            }
            Err(e) => return Err(NoteError::Io(e)),
        };

        let notes = self
            .codec
            .decode(&bytes)
            .map_err(|e| NoteError::parse(&self.path, e.to_string()))?;
        validate(&notes).map_err(|message| NoteError::parse(&self.path, message))?;

        info!("Loaded {} notes from {}", notes.len(), self.path.display());
        self.notes = notes;
        Ok(())
    }

    /// Write the whole collection to the backing file.
    ///
    /// Writes a temp file in the same directory, then renames it into place.
    pub fn save(&self) -> Result<()> {
        let bytes = self.codec.encode(&self.notes)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.notekeeper-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        // A failed write or rename must not leave the temp file behind
        let written =
            fs::write(&tmp_path, bytes).and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(NoteError::Io(e));
        }

        debug!("Saved {} notes to {}", self.notes.len(), self.path.display());
        Ok(())
    }

    /// All notes in insertion order
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Append a new note with the next id and persist
    pub fn add(&mut self, title: &str, body: &str) -> Result<Note> {
        let id = self.next_id();
        let note = Note::new(id, title.to_string(), body.to_string(), self.clock.now());

        self.notes.push(note.clone());
        self.save()?;

        info!("Added note {} to {}", id, self.path.display());
        Ok(note)
    }

    /// Overwrite title and body of the note with `id`.
    /// Returns `false` without touching the store when no such note exists.
    pub fn edit(&mut self, id: u64, title: &str, body: &str) -> Result<bool> {
        let now = self.clock.now();
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            debug!("Edit: note {} not found in {}", id, self.path.display());
            return Ok(false);
        };

        note.title = title.to_string();
        note.body = body.to_string();
        note.updated_at = now.max(note.updated_at);
        self.save()?;

        info!("Edited note {} in {}", id, self.path.display());
        Ok(true)
    }

    /// Remove the note with `id`.
    /// Returns `false` without touching the store when no such note exists.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            debug!("Delete: note {} not found in {}", id, self.path.display());
            return Ok(false);
        };

        self.notes.remove(index);
        self.save()?;

        info!("Deleted note {} from {}", id, self.path.display());
        Ok(true)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes created on `date`, in collection order
    pub fn find_by_date(&self, date: NaiveDate) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.created_on() == date)
            .collect()
    }

    /// Today's date according to this repository's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    fn next_id(&self) -> u64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }
}

/// Check invariants a hand-edited file could break
fn validate(notes: &[Note]) -> std::result::Result<(), String> {
    let mut seen = HashSet::new();

    for note in notes {
        if note.id == 0 {
            return Err("note id must be positive, found 0".to_string());
        }
        if !seen.insert(note.id) {
            return Err(format!("duplicate note id {}", note.id));
        }
        if note.updated_at < note.created_at {
            return Err(format!(
                "note {} was updated before it was created",
                note.id
            ));
        }
    }

    Ok(())
}
