//! The kiosk controller: one owned state object for the whole board.
//!
//! Every handler in the shell is a method here, so dataset, page, search,
//! and timer state are never shared globals. Navigation methods cancel the
//! relevant countdowns before transitioning, which is what guarantees a
//! stale timer fire can never interleave with a fresh navigation.

use crate::loader::RecordStore;
use crate::state::{
    execute_search, paginate, BoardState, Countdown, RenderedPage, SearchQuery, SearchState,
};
use std::time::{Duration, Instant};
use tracing::debug;

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The cycling schedule table.
    Home,
    /// The booking lookup screen.
    Search,
}

/// Root controller: record store, view state, search state, and timers.
#[derive(Debug)]
pub struct Kiosk {
    store: RecordStore,
    /// Active dataset and page of the home screen.
    pub board: BoardState,
    /// Visible screen.
    pub screen: Screen,
    /// Search result panel state.
    pub search: SearchState,
    /// Free-text query being typed on the search screen.
    pub input: String,
    /// Whether the "enter your booking number" legend is shown.
    pub legend_visible: bool,
    auto_advance: Countdown,
    inactivity: Countdown,
}

impl Kiosk {
    /// Build the controller on the home screen with auto-advance armed.
    pub fn new(
        store: RecordStore,
        page_interval: Duration,
        inactivity_timeout: Duration,
        now: Instant,
    ) -> Self {
        let mut auto_advance = Countdown::new(page_interval);
        auto_advance.arm(now);
        Self {
            store,
            board: BoardState::new(),
            screen: Screen::Home,
            search: SearchState::Idle,
            input: String::new(),
            legend_visible: true,
            auto_advance,
            inactivity: Countdown::new(inactivity_timeout),
        }
    }

    /// The immutable record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The page of the active dataset currently on screen.
    ///
    /// Total pages are recomputed from the live record count on every call,
    /// so the page indicator can never disagree with the data.
    pub fn page(&self) -> RenderedPage<'_> {
        paginate(self.store.records(self.board.dataset), self.board.current_page)
    }

    /// Switch to the search screen.
    ///
    /// Clears any previous result panel and input, shows the legend hint,
    /// and cancels both countdowns. Total and idempotent: callable from any
    /// state, including when already on the search screen.
    pub fn go_to_search(&mut self) {
        self.auto_advance.cancel();
        self.inactivity.cancel();
        self.screen = Screen::Search;
        self.search = SearchState::Idle;
        self.input.clear();
        self.legend_visible = true;
        debug!("Switched to search screen");
    }

    /// Return to the home screen.
    ///
    /// Clears result panel and input, cancels the inactivity countdown,
    /// resets to page 1, and re-arms auto-advance (rendering the home
    /// screen is the point where the loop is guaranteed alive). Total and
    /// idempotent.
    pub fn go_to_home(&mut self, now: Instant) {
        self.inactivity.cancel();
        self.screen = Screen::Home;
        self.search = SearchState::Idle;
        self.input.clear();
        self.board.reset_page();
        self.auto_advance.arm(now);
        debug!("Switched to home screen");
    }

    /// Append a character to the search input.
    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last character of the search input.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the current search input.
    ///
    /// Empty (after trimming) input is an implicit go-home. Otherwise the
    /// previous inactivity countdown is replaced and both datasets are
    /// scanned; an empty match list shows the contact-support panel, which
    /// is a normal outcome, not an error.
    pub fn submit(&mut self, now: Instant) {
        self.inactivity.cancel();
        self.legend_visible = false;

        let Some(query) = SearchQuery::new(&self.input) else {
            self.go_to_home(now);
            return;
        };

        let matches = execute_search(&self.store, &query);
        debug!(query = query.as_str(), matches = matches.len(), "Search submitted");
        self.search = SearchState::Showing { query, matches };
        self.inactivity.arm(now);
    }

    /// Offer the current time to whichever countdown is outstanding.
    ///
    /// Auto-advance ticks move the board forward and re-arm; an inactivity
    /// fire returns to the home screen. Called from every pass of the event
    /// loop; unarmed countdowns make this a no-op.
    pub fn on_timer(&mut self, now: Instant) {
        if self.screen == Screen::Home && self.auto_advance.fire_if_due(now) {
            let active_count = self.store.len(self.board.dataset);
            self.board.advance(active_count);
            self.auto_advance.arm(now);
            debug!(
                dataset = %self.board.dataset,
                page = self.board.current_page,
                "Auto-advance tick"
            );
        }

        if self.screen == Screen::Search && self.inactivity.fire_if_due(now) {
            debug!("Inactivity timeout, returning home");
            self.go_to_home(now);
        }
    }

    /// Whether the auto-advance countdown is outstanding.
    pub fn auto_advance_armed(&self) -> bool {
        self.auto_advance.is_armed()
    }

    /// Whether the inactivity countdown is outstanding.
    pub fn inactivity_armed(&self) -> bool {
        self.inactivity.is_armed()
    }
}
