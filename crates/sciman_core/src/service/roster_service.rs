//! Roster use-case service.
//!
//! # Responsibility
//! - Provide the operations a shell binds its actions to: open, save,
//!   search, select, add/edit sessions, delete.
//! - Own the save-after-mutate policy so call sites cannot forget it.
//!
//! # Invariants
//! - Edit and delete require a selection; otherwise `NoSelection`.
//! - A committed session or a delete persists immediately when a file is
//!   attached; without one the store is simply left dirty.
//! - Replacing the roster (open/import) clears any selection.

use crate::form::session::{FormOutcome, FormSession};
use crate::model::scientist::{Scientist, ScientistId};
use crate::search::substring;
use crate::store::json_store::{JsonFileStore, StoreError, StoreResult};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level error; every variant maps to one user-facing dialog.
#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
    /// Edit or delete was requested with nothing selected.
    NoSelection,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NoSelection => write!(f, "select a record first"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NoSelection => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case facade over the roster store plus the current selection.
#[derive(Debug, Default)]
pub struct RosterService {
    store: JsonFileStore,
    selected: Option<ScientistId>,
}

impl RosterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an existing roster file; returns the number of records.
    pub fn open_file(&mut self, path: impl Into<PathBuf>) -> ServiceResult<usize> {
        self.selected = None;
        Ok(self.store.open_path(path)?)
    }

    /// Imports JSON text verbatim into `path` and attaches it.
    pub fn import_text(&mut self, json: &str, path: impl Into<PathBuf>) -> ServiceResult<usize> {
        self.selected = None;
        Ok(self.store.import(json, path)?)
    }

    /// Explicitly persists the roster to the attached file.
    pub fn save(&mut self) -> ServiceResult<()> {
        Ok(self.store.save()?)
    }

    /// Records in display order.
    pub fn records(&self) -> &[Scientist] {
        self.store.records()
    }

    /// Search-as-you-type filter; blank queries return the full roster.
    pub fn search(&self, query: &str) -> Vec<&Scientist> {
        substring::filter(self.store.records(), query)
    }

    /// Marks a record as selected, gating edit/delete.
    pub fn select(&mut self, id: ScientistId) -> ServiceResult<()> {
        if !self.store.contains(id) {
            return Err(StoreError::NotFound(id).into());
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently selected record, if the selection is still in the roster.
    pub fn selected(&self) -> Option<&Scientist> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Starts a session for a brand-new record.
    pub fn begin_add(&self) -> FormSession {
        FormSession::create()
    }

    /// Starts a session pre-filled from the selected record.
    ///
    /// # Errors
    /// - `NoSelection` when nothing is selected.
    pub fn begin_edit(&self) -> ServiceResult<FormSession> {
        let record = self.selected().ok_or(ServiceError::NoSelection)?;
        Ok(FormSession::edit(record))
    }

    /// Applies a finished session outcome and persists the change.
    ///
    /// A committed record updates in place when its ID is already in the
    /// roster and appends otherwise; a discarded outcome is a no-op.
    /// Returns the affected ID for committed outcomes.
    pub fn apply_form(&mut self, outcome: FormOutcome) -> ServiceResult<Option<ScientistId>> {
        let record = match outcome {
            FormOutcome::Committed(record) => record,
            FormOutcome::Discarded => return Ok(None),
        };

        let id = record.id;
        if self.store.contains(id) {
            self.store.update(&record)?;
            debug!("event=record_updated module=service id={id}");
        } else {
            self.store.add(record);
            debug!(
                "event=record_added module=service id={id} records={}",
                self.store.len()
            );
        }
        self.persist()?;
        Ok(Some(id))
    }

    /// Deletes the selected record, clears the selection and persists.
    ///
    /// # Errors
    /// - `NoSelection` when nothing is selected.
    pub fn delete_selected(&mut self) -> ServiceResult<Scientist> {
        let id = self.selected.ok_or(ServiceError::NoSelection)?;
        // The selection is stale either way once we get here.
        self.selected = None;
        let removed = self.store.remove(id)?;
        debug!(
            "event=record_deleted module=service id={id} records={}",
            self.store.len()
        );
        self.persist()?;
        Ok(removed)
    }

    /// Attached save target, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.store.file_path()
    }

    /// Whether in-memory contents have diverged from the file.
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    // Save-after-mutate policy: write through when a file is attached,
    // otherwise leave the store dirty until one is.
    fn persist(&mut self) -> StoreResult<()> {
        match self.store.save() {
            Ok(()) | Err(StoreError::NoFileSelected) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
