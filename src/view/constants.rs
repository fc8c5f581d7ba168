//! Layout dimension constants for TUI rendering.

use std::time::Duration;

/// Height of the title banner in lines (border + content).
pub const TITLE_HEIGHT: u16 = 3;

/// Height of the page indicator footer in lines.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the key hint bar in lines.
pub const HINT_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the search legend hint in lines.
pub const SEARCH_LEGEND_HEIGHT: u16 = 1;

/// Event poll timeout per loop pass.
///
/// Short enough that countdown deadlines are observed promptly; the
/// countdowns themselves carry the 10 s / 20 s intervals.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
