//! Home-screen view state: active dataset and current page.

use crate::model::Dataset;
use crate::state::page;

/// Fixed number of table rows per page.
pub const ITEMS_PER_PAGE: usize = 15;

/// Which dataset the home screen is showing and which page of it.
///
/// Invariant: `1 <= current_page <= total_pages(active record count)`.
/// `total_pages` is derived, never stored; it is recomputed from the live
/// record count at every use so the invariant cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// The dataset currently on screen.
    pub dataset: Dataset,
    /// 1-based page within the active dataset.
    pub current_page: usize,
}

impl BoardState {
    /// Fresh board: today's schedule, page 1.
    pub fn new() -> Self {
        Self {
            dataset: Dataset::Today,
            current_page: 1,
        }
    }

    /// One auto-advance tick.
    ///
    /// `active_count` is the record count of the dataset currently shown.
    /// Moves to the next page; past the last page, flips to the other
    /// dataset and resets to page 1. Empty datasets are not skipped: they
    /// show one empty page per cycle.
    pub fn advance(&mut self, active_count: usize) {
        self.current_page += 1;
        if self.current_page > page::total_pages(active_count) {
            self.dataset = self.dataset.flip();
            self.current_page = 1;
        }
    }

    /// Return to the first page without changing the dataset.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
