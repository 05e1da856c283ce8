//! Roster persistence layer.
//!
//! # Responsibility
//! - Own the ordered in-memory record list plus the backing file path.
//! - Keep JSON file details inside the core persistence boundary.
//!
//! # Invariants
//! - Insertion order is display order; the store never sorts.
//! - A failed operation leaves the in-memory list unchanged.

pub mod json_store;
