//! JSON-file-backed roster store.
//!
//! # Responsibility
//! - Hold the ordered record list and mirror it to a single JSON file.
//! - Provide ID-keyed CRUD with semantic errors (`NotFound`) in addition
//!   to transport errors (`Read`/`Write`).
//!
//! # Invariants
//! - `load_text` replaces the list wholesale and only after a full parse;
//!   a `Parse` failure leaves prior contents untouched.
//! - `import` writes the loaded text verbatim, not a re-serialization.
//! - Every mutation marks the store dirty; only `save` clears the flag.

use crate::model::scientist::{Scientist, ScientistId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for roster persistence and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    /// Input text is not a well-formed JSON array of records.
    Parse(serde_json::Error),
    /// Reading the roster file failed.
    Read { path: PathBuf, source: std::io::Error },
    /// Writing the roster file failed.
    Write { path: PathBuf, source: std::io::Error },
    /// Save was attempted before any file was opened or imported.
    NoFileSelected,
    /// The given ID is not present in the store.
    NotFound(ScientistId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed roster JSON: {err}"),
            Self::Read { path, source } => {
                write!(f, "failed to read roster file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write roster file `{}`: {source}", path.display())
            }
            Self::NoFileSelected => write!(f, "no roster file selected for saving"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::NoFileSelected | Self::NotFound(_) => None,
        }
    }
}

/// Ordered roster of records mirrored to one JSON file.
#[derive(Debug, Default)]
pub struct JsonFileStore {
    records: Vec<Scientist>,
    file_path: Option<PathBuf>,
    dirty: bool,
}

impl JsonFileStore {
    /// Creates an empty store with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current contents from JSON text.
    ///
    /// Decoding is permissive field-by-field (missing fields default), but
    /// the document as a whole must be a JSON array of objects. Returns the
    /// number of records loaded.
    ///
    /// # Errors
    /// - `Parse` when the text is malformed; the list is left unchanged.
    pub fn load_text(&mut self, json: &str) -> StoreResult<usize> {
        let records: Vec<Scientist> = serde_json::from_str(json).map_err(StoreError::Parse)?;
        let count = records.len();
        self.records = records;
        self.dirty = false;
        Ok(count)
    }

    /// Loads JSON text and copies it verbatim to `path`, attaching that
    /// path as the save target.
    ///
    /// This is the one-time "import bundled dataset into local storage"
    /// step: the file receives the original text, not a re-serialization.
    pub fn import(&mut self, json: &str, path: impl Into<PathBuf>) -> StoreResult<usize> {
        let count = self.load_text(json)?;
        let path = path.into();
        fs::write(&path, json).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            "event=roster_import module=store status=ok records={count} path={}",
            path.display()
        );
        self.file_path = Some(path);
        Ok(count)
    }

    /// Opens an existing roster file and attaches it as the save target.
    pub fn open_path(&mut self, path: impl Into<PathBuf>) -> StoreResult<usize> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let count = self.load_text(&text)?;
        info!(
            "event=roster_open module=store status=ok records={count} path={}",
            path.display()
        );
        self.file_path = Some(path);
        Ok(count)
    }

    /// Serializes the full list as indented JSON to the attached file.
    ///
    /// This is the only path that persists mutations.
    ///
    /// # Errors
    /// - `NoFileSelected` when no file has been opened or imported.
    /// - `Write` on I/O failure; the in-memory list is unaffected.
    pub fn save(&mut self) -> StoreResult<()> {
        let path = self.file_path.as_ref().ok_or(StoreError::NoFileSelected)?;
        let json = serde_json::to_string_pretty(&self.records).map_err(|err| {
            StoreError::Write {
                path: path.clone(),
                source: err.into(),
            }
        })?;
        fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            "event=roster_save module=store status=ok records={} path={}",
            self.records.len(),
            path.display()
        );
        self.dirty = false;
        Ok(())
    }

    /// Appends a record at the end of the roster.
    pub fn add(&mut self, record: Scientist) -> ScientistId {
        let id = record.id;
        self.records.push(record);
        self.dirty = true;
        id
    }

    /// Overwrites all data fields of the record with `record.id` in place.
    ///
    /// The record keeps its position in the roster.
    pub fn update(&mut self, record: &Scientist) -> StoreResult<()> {
        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        *slot = record.clone();
        self.dirty = true;
        Ok(())
    }

    /// Removes exactly one record by ID and returns it.
    pub fn remove(&mut self, id: ScientistId) -> StoreResult<Scientist> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.dirty = true;
        Ok(self.records.remove(index))
    }

    pub fn get(&self, id: ScientistId) -> Option<&Scientist> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: ScientistId) -> bool {
        self.get(id).is_some()
    }

    /// Records in display order.
    pub fn records(&self) -> &[Scientist] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Attached save target, if a file has been opened or imported.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Whether in-memory contents have diverged from the file.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
