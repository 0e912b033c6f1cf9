//! Settings storage
//!
//! Manages persistence of host properties and the list of disabled plugins.

use crate::storage::{get_data_dir, parse_bool, SettingsStore, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Host settings as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSettings {
    /// String-valued properties; booleans are stored as "true"/"false"
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Plugin ids disabled by the host
    #[serde(default)]
    pub disabled_plugins: Vec<String>,
}

impl HostSettings {
    pub fn is_plugin_disabled(&self, plugin_id: &str) -> bool {
        self.disabled_plugins.iter().any(|id| id == plugin_id)
    }
}

/// Get the default settings file path
pub fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings(path: &Path) -> HostSettings {
    match load_settings_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings from {}, using defaults: {}", path.display(), e);
            HostSettings::default()
        }
    }
}

fn load_settings_internal(path: &Path) -> Result<HostSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(HostSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: HostSettings = serde_json::from_str(&json)?;
    settings.disabled_plugins.sort_unstable();
    settings.disabled_plugins.dedup();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(path: &Path, settings: &HostSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

/// File-backed settings store
///
/// Holds the loaded settings in memory and writes through to disk on every change.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    settings: RwLock<HostSettings>,
}

impl JsonSettingsStore {
    /// Open the store at `path`, loading whatever is already there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = load_settings(&path);
        Self {
            path,
            settings: RwLock::new(settings),
        }
    }

    /// Open the store at the platform default location.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::open(get_settings_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current settings.
    pub fn snapshot(&self) -> HostSettings {
        self.settings.read().expect("settings lock poisoned").clone()
    }

    pub fn is_plugin_disabled(&self, plugin_id: &str) -> bool {
        self.settings
            .read()
            .expect("settings lock poisoned")
            .is_plugin_disabled(plugin_id)
    }

    /// Record `plugin_id` as disabled. Disabling twice is a no-op.
    pub fn disable_plugin(&self, plugin_id: &str) -> Result<(), StorageError> {
        self.update(|settings| {
            if settings.is_plugin_disabled(plugin_id) {
                return false;
            }
            settings.disabled_plugins.push(plugin_id.to_string());
            true
        })
    }

    pub fn enable_plugin(&self, plugin_id: &str) -> Result<(), StorageError> {
        self.update(|settings| {
            let before = settings.disabled_plugins.len();
            settings.disabled_plugins.retain(|id| id != plugin_id);
            before != settings.disabled_plugins.len()
        })
    }

    /// Apply `change` and persist if it reports a modification.
    fn update<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut HostSettings) -> bool,
    {
        let mut settings = self.settings.write().expect("settings lock poisoned");
        let mut next = settings.clone();
        if !change(&mut next) {
            return Ok(());
        }
        save_settings(&self.path, &next)?;
        *settings = next;
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get_bool(&self, key: &str) -> bool {
        let settings = self.settings.read().expect("settings lock poisoned");
        parse_bool(settings.properties.get(key).map(String::as_str))
    }

    fn set_value(&self, key: &str, value: bool) -> Result<(), StorageError> {
        let value = value.to_string();
        self.update(|settings| {
            if settings.properties.get(key) == Some(&value) {
                return false;
            }
            settings.properties.insert(key.to_string(), value);
            true
        })
    }
}
