//! Search mode: booking-reference lookup across both datasets.
//!
//! Sum type enforces exactly one state at a time: either nothing is shown
//! (`Idle`) or a result panel is on screen (`Showing`) with the inactivity
//! countdown running in the controller.

use crate::loader::RecordStore;
use crate::model::{Dataset, TransferRecord};

/// Search screen result state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No results panel displayed.
    Idle,
    /// Results (or the not-found panel, when `matches` is empty) displayed.
    Showing {
        /// The normalized query that produced this panel.
        query: SearchQuery,
        /// Every matching record, today's instances before tomorrow's.
        matches: Vec<TransferRecord>,
    },
}

/// Validated, normalized search query: trimmed, case-folded, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: trims and lowercases the raw input.
    /// Returns `None` for empty or whitespace-only input, which the
    /// controller treats as an implicit go-home.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Scan both datasets for booking-reference matches.
///
/// Today's dataset is scanned first, then tomorrow's, each in encounter
/// order, and ALL matches are collected: booking references are not unique,
/// and a duplicated reference must surface every occurrence.
pub fn execute_search(store: &RecordStore, query: &SearchQuery) -> Vec<TransferRecord> {
    let mut matches = Vec::new();
    for dataset in [Dataset::Today, Dataset::Tomorrow] {
        for record in store.records(dataset) {
            if record.matches_key(query.as_str()) {
                matches.push(record.clone());
            }
        }
    }
    matches
}
