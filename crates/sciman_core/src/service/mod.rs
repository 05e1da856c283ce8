//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, search and form calls into use-case level APIs.
//! - Keep CLI/FFI shells decoupled from persistence and selection rules.

pub mod roster_service;
