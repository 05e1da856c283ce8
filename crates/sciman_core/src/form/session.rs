//! Add/edit form session.
//!
//! # Responsibility
//! - Carry editable copies of the six record fields for one interaction.
//! - Produce a committed record or a discarded outcome, never both.
//!
//! # Invariants
//! - An edit session writes back under the identity of the record it was
//!   opened from; a create session mints a fresh ID on confirm.
//! - `cancel` never touches the underlying record.
//! - No field-level validation; empty strings are accepted.

use crate::model::scientist::{Scientist, ScientistId};
use chrono::{Local, NaiveDate};

/// Result of ending a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The user confirmed; the record carries the session's field values.
    Committed(Scientist),
    /// The user cancelled; nothing was written.
    Discarded,
}

/// A transient editing session over a new or existing record.
///
/// Fields are public on purpose: they are the session's editable inputs,
/// bound one-to-one to the form controls of whatever shell drives it.
#[derive(Debug, Clone)]
pub struct FormSession {
    editing: Option<ScientistId>,
    pub full_name: String,
    pub faculty: String,
    pub department: String,
    pub degree: String,
    pub rank: String,
    pub rank_date: NaiveDate,
}

impl FormSession {
    /// Opens a session for a brand-new record; the date defaults to today.
    pub fn create() -> Self {
        Self::create_with_date(Local::now().date_naive())
    }

    /// Opens a create session with an explicit initial date.
    pub fn create_with_date(rank_date: NaiveDate) -> Self {
        Self {
            editing: None,
            full_name: String::new(),
            faculty: String::new(),
            department: String::new(),
            degree: String::new(),
            rank: String::new(),
            rank_date,
        }
    }

    /// Opens a session pre-filled from an existing record.
    pub fn edit(record: &Scientist) -> Self {
        Self {
            editing: Some(record.id),
            full_name: record.full_name.clone(),
            faculty: record.faculty.clone(),
            department: record.department.clone(),
            degree: record.degree.clone(),
            rank: record.rank.clone(),
            rank_date: record.rank_date,
        }
    }

    /// Whether this session edits an existing record.
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// ID of the record being edited, if any.
    pub fn editing(&self) -> Option<ScientistId> {
        self.editing
    }

    /// Ends the session, writing the inputs onto a record.
    pub fn confirm(self) -> FormOutcome {
        let record = match self.editing {
            Some(id) => Scientist::with_id(
                id,
                self.full_name,
                self.faculty,
                self.department,
                self.degree,
                self.rank,
                self.rank_date,
            ),
            None => Scientist::new(
                self.full_name,
                self.faculty,
                self.department,
                self.degree,
                self.rank,
                self.rank_date,
            ),
        };
        FormOutcome::Committed(record)
    }

    /// Ends the session without writing anything.
    pub fn cancel(self) -> FormOutcome {
        FormOutcome::Discarded
    }
}
