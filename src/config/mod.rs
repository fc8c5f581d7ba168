//! Configuration loading with precedence handling.
//!
//! Precedence (highest to lowest): CLI `--config` path, the
//! `TRANSFERBOARD_CONFIG` environment variable, then the default path
//! `~/.config/transferboard/config.toml`. A missing config file is not an
//! error; hardcoded defaults apply.

use crate::loader::FieldMap;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default seconds between auto-advance ticks.
pub const DEFAULT_PAGE_SECS: u64 = 10;

/// Default seconds of search inactivity before returning home.
pub const DEFAULT_INACTIVITY_SECS: u64 = 20;

const DEFAULT_CONTACT_TEXT: &str = "If you have any questions about your pickup transfer time, \
please reach out to your Excursion Rep at the hospitality desk. You can also contact us easily \
via chat on the NexusTours App or by calling +52 998 251 6559. We're here to assist you!";

const DEFAULT_QR_URL: &str = "https://miguelgrhub.github.io/Dyspl/Qr.jpeg";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure. All fields optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Seconds between auto-advance ticks.
    #[serde(default)]
    pub page_secs: Option<u64>,

    /// Seconds of search inactivity before auto-returning home.
    #[serde(default)]
    pub inactivity_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Contact text shown on the no-match panel.
    #[serde(default)]
    pub contact_text: Option<String>,

    /// QR code image URL shown on the no-match panel (opaque reference).
    #[serde(default)]
    pub qr_url: Option<String>,

    /// JSON field names for record extraction (`[fields]` section).
    /// Covers the observed `PickupTime` vs `Time` variance.
    #[serde(default)]
    pub fields: Option<FieldMap>,
}

/// Resolved configuration after merging defaults and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Auto-advance interval.
    pub page_interval: Duration,
    /// Search inactivity timeout.
    pub inactivity_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Contact text for the no-match panel.
    pub contact_text: String,
    /// QR code image URL for the no-match panel.
    pub qr_url: String,
    /// Record field mapping.
    pub fields: FieldMap,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_interval: Duration::from_secs(DEFAULT_PAGE_SECS),
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_SECS),
            log_file_path: default_log_path(),
            contact_text: DEFAULT_CONTACT_TEXT.to_string(),
            qr_url: DEFAULT_QR_URL.to_string(),
            fields: FieldMap::default(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/transferboard/transferboard.log` on Unix-like systems;
/// falls back to the current directory when no state dir is available.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("transferboard").join("transferboard.log")
    } else {
        PathBuf::from("transferboard.log")
    }
}

/// Resolve the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("transferboard").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Missing config files are NOT errors; an existing but unreadable or
/// unparsable file is.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path (CLI --config)
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. TRANSFERBOARD_CONFIG environment variable
    if let Ok(env_path) = std::env::var("TRANSFERBOARD_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge an optional config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    let Some(file) = file else {
        return resolved;
    };

    if let Some(secs) = file.page_secs {
        resolved.page_interval = Duration::from_secs(secs);
    }
    if let Some(secs) = file.inactivity_secs {
        resolved.inactivity_timeout = Duration::from_secs(secs);
    }
    if let Some(path) = file.log_file_path {
        resolved.log_file_path = path;
    }
    if let Some(text) = file.contact_text {
        resolved.contact_text = text;
    }
    if let Some(url) = file.qr_url {
        resolved.qr_url = url;
    }
    if let Some(fields) = file.fields {
        resolved.fields = fields;
    }

    resolved
}
