//! Input source: one-time read of the two schedule documents from disk.

use crate::model::LoadError;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Read and parse one schedule document.
fn read_document(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|e| LoadError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read both schedule documents.
///
/// This is the only I/O the board performs after startup configuration;
/// either failure aborts initialization (no retry).
pub fn read_documents(today: &Path, tomorrow: &Path) -> Result<(Value, Value), LoadError> {
    let today_doc = read_document(today)?;
    let tomorrow_doc = read_document(tomorrow)?;
    info!(today = %today.display(), tomorrow = %tomorrow.display(), "Schedule documents read");
    Ok((today_doc, tomorrow_doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let missing = std::path::PathBuf::from("/nonexistent/transferboard-data.json");
        let err = read_document(&missing).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let path = write_temp("transferboard_bad.json", "{not json");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
        assert!(err.to_string().contains("transferboard_bad.json"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reads_both_documents() {
        let today = write_temp("transferboard_today.json", r#"{"templates":{"content":[]}}"#);
        let tomorrow = write_temp("transferboard_tomorrow.json", "{}");
        let (today_doc, tomorrow_doc) = read_documents(&today, &tomorrow).unwrap();
        assert!(today_doc.get("templates").is_some());
        assert!(tomorrow_doc.is_object());
        let _ = std::fs::remove_file(&today);
        let _ = std::fs::remove_file(&tomorrow);
    }

    #[test]
    fn first_failure_short_circuits() {
        let tomorrow = write_temp("transferboard_t2.json", "{}");
        let missing = std::path::PathBuf::from("/nonexistent/today.json");
        let err = read_documents(&missing, &tomorrow).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
        let _ = std::fs::remove_file(&tomorrow);
    }
}
