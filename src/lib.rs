//! Transfer Display Board (transferboard)
//!
//! Kiosk TUI that cycles through today's and tomorrow's airport pick-up
//! transfer schedules and lets a front-desk user look up a booking by
//! reference number.
//!
//! Architecture follows a Pure Core / Impure Shell split: `model`, `loader`,
//! and `state` are pure and fully testable without a terminal; `source`,
//! `logging`, and `view` form the shell.

pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
