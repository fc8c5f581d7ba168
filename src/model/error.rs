//! Error types for the transfer board.
//!
//! A small hierarchical taxonomy built on `thiserror`, composing through
//! `From` conversions so call sites stay on the `?` railway.
//!
//! Startup errors (missing or malformed schedule documents, bad config) are
//! fatal: the board shows a single error and exits rather than retrying.
//! A *missing* `templates.content` section inside an otherwise valid
//! document is NOT an error; it is an empty dataset and the board keeps
//! cycling over it.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Everything that can abort the board converts into this via `From`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A schedule document could not be read or parsed at startup.
    #[error("Failed to load schedule data: {0}")]
    Load(#[from] LoadError),

    /// Configuration file existed but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Terminal or rendering failure from the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading the two schedule documents.
///
/// Both documents are loaded exactly once at startup; any failure here is
/// fatal and surfaced as one user-visible message, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The schedule file does not exist at the given path.
    #[error("Schedule file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// I/O failure while reading a schedule file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The schedule file is not valid JSON.
    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson {
        /// The path with invalid content.
        path: PathBuf,
        /// Parser error message from `serde_json`.
        message: String,
    },
}
