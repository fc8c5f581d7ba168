//! Transfer Display Board - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Kiosk display board for airport pick-up transfer schedules
#[derive(Parser, Debug)]
#[command(name = "transferboard")]
#[command(version)]
#[command(about = "Kiosk TUI cycling today's and tomorrow's pick-up transfer schedules")]
pub struct Args {
    /// Path to today's schedule JSON document
    pub today: PathBuf,

    /// Path to tomorrow's schedule JSON document
    pub tomorrow: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → config file (CLI --config or TRANSFERBOARD_CONFIG or
    // default path)
    let config = {
        let config_file = transferboard::config::load_config_with_precedence(args.config.clone())?;
        transferboard::config::merge_config(config_file)
    };

    transferboard::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // One-time load: read both documents, populate the store, freeze it.
    let (today_doc, tomorrow_doc) = transferboard::source::read_documents(&args.today, &args.tomorrow)?;
    let store = transferboard::loader::RecordStore::load(&today_doc, &tomorrow_doc, &config.fields);

    transferboard::view::run_with_store(store, config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["transferboard", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["transferboard", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_requires_both_schedule_paths() {
        let result = Args::try_parse_from(["transferboard", "data.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_paths_populate_fields() {
        let args = Args::parse_from(["transferboard", "data.json", "data_2.json"]);
        assert_eq!(args.today, PathBuf::from("data.json"));
        assert_eq!(args.tomorrow, PathBuf::from("data_2.json"));
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from([
            "transferboard",
            "data.json",
            "data_2.json",
            "--config",
            "/custom/config.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
