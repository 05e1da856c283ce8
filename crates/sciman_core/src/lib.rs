//! Core domain logic for SciMan.
//! This crate is the single source of truth for roster business invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use form::session::{FormOutcome, FormSession};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::scientist::{Scientist, ScientistId};
pub use search::substring::{filter, filter_with, RosterQuery};
pub use service::roster_service::{RosterService, ServiceError, ServiceResult};
pub use store::json_store::{JsonFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
