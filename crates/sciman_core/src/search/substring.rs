//! Case-insensitive substring filter over the roster.
//!
//! # Responsibility
//! - Match queries against name, faculty and rank only.
//! - Preserve the relative order of matching records.
//!
//! # Invariants
//! - A blank query returns the full roster unchanged.
//! - Matching is Unicode case-insensitive (datasets carry Cyrillic names).
//! - Department, degree and rank date are never searched.

use crate::model::scientist::Scientist;

/// Options for roster filtering.
#[derive(Debug, Clone)]
pub struct RosterQuery {
    /// User query text; matched as a lowercase substring. Only a fully
    /// blank query is special-cased; padding otherwise matches literally.
    pub text: String,
    /// Optional cap on the number of results.
    pub limit: Option<usize>,
}

impl RosterQuery {
    /// Creates a query with no result limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: None,
        }
    }
}

/// Filters records by case-insensitive substring match.
///
/// Returns references into `records` in their original order. A blank or
/// empty query matches everything.
pub fn filter<'a>(records: &'a [Scientist], query: &str) -> Vec<&'a Scientist> {
    filter_with(records, &RosterQuery::new(query))
}

/// Filters records with explicit query options.
pub fn filter_with<'a>(records: &'a [Scientist], query: &RosterQuery) -> Vec<&'a Scientist> {
    let cap = query.limit.unwrap_or(usize::MAX);

    if query.text.trim().is_empty() {
        return records.iter().take(cap).collect();
    }

    // Non-blank queries match literally, padding included.
    let needle = query.text.to_lowercase();
    records
        .iter()
        .filter(|record| matches_record(record, &needle))
        .take(cap)
        .collect()
}

fn matches_record(record: &Scientist, needle: &str) -> bool {
    [&record.full_name, &record.faculty, &record.rank]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
