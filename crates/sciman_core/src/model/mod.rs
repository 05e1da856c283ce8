//! Domain model for the scientist roster.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, search and form.
//! - Own the JSON wire conventions (field names, date format).
//!
//! # Invariants
//! - Every record is identified by a stable `ScientistId`.
//! - `rankDate` round-trips as an ISO-8601 date-time at midnight.

pub mod scientist;
