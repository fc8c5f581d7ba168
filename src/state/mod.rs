//! Pure display/search state machine.
//!
//! Everything in this module is free of terminal and clock side effects:
//! timers are deadlines compared against an injected `Instant`, and the
//! shell (`view`) is the only caller that supplies real wall-clock time.

mod board;
mod controller;
mod page;
mod search;
mod timer;

pub use board::{BoardState, ITEMS_PER_PAGE};
pub use controller::{Kiosk, Screen};
pub use page::{paginate, total_pages, RenderedPage};
pub use search::{execute_search, SearchQuery, SearchState};
pub use timer::Countdown;
