//! Roster search entry points.
//!
//! # Responsibility
//! - Expose the search-as-you-type filter independent of any UI layer.
//! - Keep result shaping inside core.

pub mod substring;
