//! Record editing sessions.
//!
//! # Responsibility
//! - Model the add/edit modal interaction without any presentation layer.
//! - Keep field mapping between inputs and records out of UI callbacks.

pub mod session;
