//! Persistent storage
//!
//! This module handles persistence of host settings, including the consent record.

pub mod settings;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;

/// Errors raised while reading or writing persisted settings.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine the application data directory")]
    NoDataDir,
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get the application data directory
///
/// Linux: ~/.local/share/legal-notice
/// macOS: ~/Library/Application Support/com.kodebeagle.legal-notice
/// Windows: %APPDATA%/kodebeagle/legal-notice/data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "kodebeagle", "legal-notice")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

/// Persistent boolean key-value store that survives restarts.
pub trait SettingsStore: Send + Sync {
    /// Returns the stored value, or `false` when the key was never set.
    fn get_bool(&self, key: &str) -> bool;

    /// Persists `value` under `key`.
    fn set_value(&self, key: &str, value: bool) -> Result<(), StorageError>;
}

/// Parse a stored property the way the host does: only `"true"` is true.
pub(crate) fn parse_bool(raw: Option<&str>) -> bool {
    raw.map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// In-memory settings store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_bool(&self, key: &str) -> bool {
        let values = self.values.read().expect("settings lock poisoned");
        parse_bool(values.get(key).map(String::as_str))
    }

    fn set_value(&self, key: &str, value: bool) -> Result<(), StorageError> {
        self.values
            .write()
            .expect("settings lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_false() {
        let store = MemorySettingsStore::new();
        assert!(!store.get_bool("missing"));
    }

    #[test]
    fn test_set_and_get() {
        let store = MemorySettingsStore::new();
        store.set_value("flag", true).unwrap();
        assert!(store.get_bool("flag"));
        store.set_value("flag", false).unwrap();
        assert!(!store.get_bool("flag"));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool(Some("true")));
        assert!(parse_bool(Some("TRUE ")));
        assert!(!parse_bool(Some("yes")));
        assert!(!parse_bool(Some("")));
        assert!(!parse_bool(None));
    }
}
