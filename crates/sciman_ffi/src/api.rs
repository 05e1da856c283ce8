//! FFI use-case API for the mobile-facing roster screens.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI via FRB.
//! - Map every core error into a response envelope message suitable for a
//!   localized dialog.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All state lives in one process-global service guarded by a mutex; the
//!   bridge may call in from a platform thread.

use chrono::NaiveDate;
use sciman_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, RosterService,
    Scientist, ScientistId,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static ROSTER: OnceLock<Mutex<RosterService>> = OnceLock::new();

fn with_roster<T>(f: impl FnOnce(&mut RosterService) -> T) -> T {
    let cell = ROSTER.get_or_init(|| Mutex::new(RosterService::new()));
    let mut guard = match cell.lock() {
        Ok(guard) => guard,
        // A poisoned lock means a previous panic was already reported; the
        // roster itself is still structurally valid.
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration fails.
/// - Never panics; returns empty string on success, error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One roster row shaped for grid display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecordItem {
    /// Stable record ID in string form.
    pub id: String,
    pub full_name: String,
    pub faculty: String,
    pub department: String,
    pub degree: String,
    pub rank: String,
    /// Display form (`yyyy-MM-dd`).
    pub rank_date: String,
}

/// List/search response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterListResponse {
    /// Matching rows in display order.
    pub items: Vec<RosterRecordItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected record ID, when one exists.
    pub id: Option<String>,
    /// Human-readable response message for dialogs/diagnostics.
    pub message: String,
}

impl RosterActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: None,
            message: message.into(),
        }
    }

    fn success_with_id(message: impl Into<String>, id: ScientistId) -> Self {
        Self {
            ok: true,
            id: Some(id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

fn to_item(record: &Scientist) -> RosterRecordItem {
    RosterRecordItem {
        id: record.id.to_string(),
        full_name: record.full_name.clone(),
        faculty: record.faculty.clone(),
        department: record.department.clone(),
        degree: record.degree.clone(),
        rank: record.rank.clone(),
        rank_date: record.rank_date_display(),
    }
}

fn parse_record_id(raw: &str) -> Result<ScientistId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid record id `{raw}`: {err}"))
}

fn parse_rank_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid rank date `{raw}`: {err}"))
}

/// Opens a roster file from app-private storage.
///
/// # FFI contract
/// - Sync call, file-system backed.
/// - Never panics; failure is reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_open(path: String) -> RosterActionResponse {
    with_roster(|service| match service.open_file(&path) {
        Ok(count) => RosterActionResponse::success(format!("Opened {count} record(s).")),
        Err(err) => RosterActionResponse::failure(format!("roster_open failed: {err}")),
    })
}

/// Imports bundled JSON text verbatim into `path` and attaches it.
///
/// # FFI contract
/// - Sync call, file-system backed.
/// - Never panics; failure is reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_import(json: String, path: String) -> RosterActionResponse {
    with_roster(|service| match service.import_text(&json, &path) {
        Ok(count) => RosterActionResponse::success(format!("Imported {count} record(s).")),
        Err(err) => RosterActionResponse::failure(format!("roster_import failed: {err}")),
    })
}

/// Explicitly persists the roster to the attached file.
///
/// # FFI contract
/// - Sync call, file-system backed.
/// - Never panics; failure is reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_save() -> RosterActionResponse {
    with_roster(|service| match service.save() {
        Ok(()) => RosterActionResponse::success("Saved."),
        Err(err) => RosterActionResponse::failure(format!("roster_save failed: {err}")),
    })
}

/// Full roster in display order.
///
/// # FFI contract
/// - Sync call, memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_list() -> RosterListResponse {
    roster_search(String::new())
}

/// Search-as-you-type filter; blank text returns the full roster.
///
/// # FFI contract
/// - Sync call, memory only.
/// - Never panics; returns deterministic row order.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_search(text: String) -> RosterListResponse {
    with_roster(|service| {
        let items: Vec<RosterRecordItem> =
            service.search(&text).into_iter().map(to_item).collect();
        let message = if items.is_empty() {
            "No results.".to_string()
        } else {
            format!("Found {} result(s).", items.len())
        };
        RosterListResponse { items, message }
    })
}

/// Marks a row as selected, gating edit/delete.
///
/// # FFI contract
/// - Sync call, memory only.
/// - Never panics; unknown IDs are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_select(id: String) -> RosterActionResponse {
    let parsed = match parse_record_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return RosterActionResponse::failure(message),
    };
    with_roster(|service| match service.select(parsed) {
        Ok(()) => RosterActionResponse::success_with_id("Record selected.", parsed),
        Err(err) => RosterActionResponse::failure(format!("roster_select failed: {err}")),
    })
}

/// Clears the current selection.
///
/// # FFI contract
/// - Sync call, memory only.
/// - Never panics; always succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_clear_selection() -> RosterActionResponse {
    with_roster(|service| {
        service.clear_selection();
        RosterActionResponse::success("Selection cleared.")
    })
}

/// Adds a record from confirmed form inputs and persists immediately.
///
/// # FFI contract
/// - Sync call, file-system backed when a roster file is attached.
/// - Never panics; invalid dates are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_add(
    full_name: String,
    faculty: String,
    department: String,
    degree: String,
    rank: String,
    rank_date: String,
) -> RosterActionResponse {
    let rank_date = match parse_rank_date(&rank_date) {
        Ok(date) => date,
        Err(message) => return RosterActionResponse::failure(message),
    };
    with_roster(|service| {
        let mut session = service.begin_add();
        session.full_name = full_name;
        session.faculty = faculty;
        session.department = department;
        session.degree = degree;
        session.rank = rank;
        session.rank_date = rank_date;

        match service.apply_form(session.confirm()) {
            Ok(Some(id)) => RosterActionResponse::success_with_id("Record added.", id),
            Ok(None) => RosterActionResponse::failure("roster_add produced no record"),
            Err(err) => RosterActionResponse::failure(format!("roster_add failed: {err}")),
        }
    })
}

/// Overwrites the selected record from confirmed form inputs and persists.
///
/// # FFI contract
/// - Sync call, file-system backed when a roster file is attached.
/// - Never panics; missing selection is reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_update_selected(
    full_name: String,
    faculty: String,
    department: String,
    degree: String,
    rank: String,
    rank_date: String,
) -> RosterActionResponse {
    let rank_date = match parse_rank_date(&rank_date) {
        Ok(date) => date,
        Err(message) => return RosterActionResponse::failure(message),
    };
    with_roster(|service| {
        let mut session = match service.begin_edit() {
            Ok(session) => session,
            Err(err) => {
                return RosterActionResponse::failure(format!("roster_update failed: {err}"))
            }
        };
        session.full_name = full_name;
        session.faculty = faculty;
        session.department = department;
        session.degree = degree;
        session.rank = rank;
        session.rank_date = rank_date;

        match service.apply_form(session.confirm()) {
            Ok(Some(id)) => RosterActionResponse::success_with_id("Record updated.", id),
            Ok(None) => RosterActionResponse::failure("roster_update produced no record"),
            Err(err) => RosterActionResponse::failure(format!("roster_update failed: {err}")),
        }
    })
}

/// Deletes the selected record, clears the selection and persists.
///
/// # FFI contract
/// - Sync call, file-system backed when a roster file is attached.
/// - Never panics; missing selection is reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_delete_selected() -> RosterActionResponse {
    with_roster(|service| match service.delete_selected() {
        Ok(removed) => RosterActionResponse::success_with_id("Record deleted.", removed.id),
        Err(err) => RosterActionResponse::failure(format!("roster_delete failed: {err}")),
    })
}
