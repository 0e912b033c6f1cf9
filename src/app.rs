//! Host application wiring
//!
//! Ties the settings file, the consent gate and the UI loop together the way a
//! plugin host does on startup.

use crate::gate::ConsentGate;
use crate::host::event_loop::UiEventLoop;
use crate::host::HostLifecycle;
use crate::prompt::{ModalPrompt, WindowOwner};
use crate::storage::settings::JsonSettingsStore;
use crate::storage::{SettingsStore, StorageError};
use crate::types::config::GateConfig;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// What the plugin looks like once startup is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupState {
    /// Notice accepted, plugin running
    Active,
    /// Plugin disabled by an earlier refusal
    Disabled,
    /// The dialog did not complete; it will be shown again next launch
    Pending,
}

/// Load a gate configuration file
///
/// Returns the built-in notice if the file is missing or invalid.
pub fn load_gate_config(path: &Path) -> GateConfig {
    let mut config = match fs::read_to_string(path)
        .map_err(StorageError::from)
        .and_then(|json| serde_json::from_str::<GateConfig>(&json).map_err(StorageError::from))
    {
        Ok(config) => {
            tracing::info!("Loaded gate config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load gate config from {}, using defaults: {}", path.display(), e);
            GateConfig::default()
        }
    };
    config.validate();
    config
}

/// A plugin host running the legal notice gate on startup
pub struct App {
    settings: Arc<JsonSettingsStore>,
    gate: ConsentGate,
    event_loop: UiEventLoop,
}

impl App {
    pub fn new(
        settings: Arc<JsonSettingsStore>,
        config: GateConfig,
        prompt: Arc<dyn ModalPrompt>,
        lifecycle: Arc<dyn HostLifecycle>,
    ) -> Self {
        let (handle, event_loop) = UiEventLoop::channel();
        let gate = ConsentGate::new(config, settings.clone(), prompt, lifecycle, Arc::new(handle));
        tracing::info!("Host initialized with settings at {}", settings.path().display());
        Self {
            settings,
            gate,
            event_loop,
        }
    }

    pub fn gate(&self) -> &ConsentGate {
        &self.gate
    }

    /// Forget the recorded consent and re-enable the plugin.
    pub fn reset(&self) -> Result<(), StorageError> {
        let config = self.gate.config();
        self.settings.set_value(&config.settings_key, false)?;
        self.settings.enable_plugin(&config.plugin_id)?;
        tracing::info!("Consent for {} reset", config.plugin_id);
        Ok(())
    }

    /// Run the startup hook and drain the UI queue.
    pub fn start(&mut self, owner: Option<WindowOwner>) -> StartupState {
        let plugin_id = self.gate.config().plugin_id.clone();
        if self.settings.is_plugin_disabled(&plugin_id) {
            tracing::info!("Plugin {} is disabled, skipping legal notice", plugin_id);
            return StartupState::Disabled;
        }

        if self.gate.run_startup(owner) {
            let stats = self.event_loop.run_pending();
            if stats.failed > 0 {
                tracing::warn!("Legal notice did not complete");
            }
        }

        if self.gate.is_accepted() {
            StartupState::Active
        } else if self.settings.is_plugin_disabled(&plugin_id) {
            StartupState::Disabled
        } else {
            StartupState::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::testing::{RecordingLifecycle, ScriptedPrompt};
    use crate::prompt::console::ConsolePrompt;
    use crate::prompt::PromptChoice;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn console(input: &str) -> Arc<dyn ModalPrompt> {
        Arc::new(ConsolePrompt::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        ))
    }

    #[test]
    fn test_console_accept_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Arc::new(JsonSettingsStore::open(&path));
        let lifecycle = Arc::new(RecordingLifecycle::default());

        let mut app = App::new(settings, GateConfig::default(), console("accept\n"), lifecycle.clone());
        assert_eq!(app.start(None), StartupState::Active);
        assert!(lifecycle.calls().is_empty());

        // Next launch does not prompt: the scripted prompt would decline.
        let prompt = Arc::new(ScriptedPrompt::new(PromptChoice::Decline));
        let mut app = App::new(
            Arc::new(JsonSettingsStore::open(&path)),
            GateConfig::default(),
            prompt.clone(),
            lifecycle.clone(),
        );
        assert_eq!(app.start(None), StartupState::Active);
        assert_eq!(prompt.shown(), 0);
    }

    #[test]
    fn test_disabled_plugin_skips_notice() {
        let dir = TempDir::new().unwrap();
        let settings = Arc::new(JsonSettingsStore::open(dir.path().join("settings.json")));
        settings.disable_plugin("kodebeagleidea").unwrap();

        let prompt = Arc::new(ScriptedPrompt::new(PromptChoice::Accept));
        let lifecycle = Arc::new(RecordingLifecycle::default());
        let mut app = App::new(settings, GateConfig::default(), prompt.clone(), lifecycle.clone());

        assert_eq!(app.start(None), StartupState::Disabled);
        assert_eq!(prompt.shown(), 0);
        assert!(lifecycle.calls().is_empty());
        assert!(!app.gate().is_accepted());
    }

    #[test]
    fn test_cancel_with_recording_lifecycle() {
        let dir = TempDir::new().unwrap();
        let settings = Arc::new(JsonSettingsStore::open(dir.path().join("settings.json")));
        let lifecycle = Arc::new(RecordingLifecycle::default());

        let mut app = App::new(settings, GateConfig::default(), console(""), lifecycle.clone());

        // The recording lifecycle does not touch the settings file.
        assert_eq!(app.start(None), StartupState::Pending);
        assert_eq!(lifecycle.disabled(), vec!["kodebeagleidea".to_string()]);
        assert_eq!(lifecycle.restarts(), vec![true]);
    }

    #[test]
    fn test_reset_clears_consent_and_reenables() {
        let dir = TempDir::new().unwrap();
        let settings = Arc::new(JsonSettingsStore::open(dir.path().join("settings.json")));
        settings.set_value("KodeBeagleIdeaLegalNotice", true).unwrap();
        settings.disable_plugin("kodebeagleidea").unwrap();

        let prompt = Arc::new(ScriptedPrompt::new(PromptChoice::Accept));
        let mut app = App::new(
            settings.clone(),
            GateConfig::default(),
            prompt.clone(),
            Arc::new(RecordingLifecycle::default()),
        );
        app.reset().unwrap();

        assert!(!app.gate().is_accepted());
        assert!(!settings.is_plugin_disabled("kodebeagleidea"));
        assert_eq!(app.start(None), StartupState::Active);
        assert_eq!(prompt.shown(), 1);
    }

    #[test]
    fn test_load_gate_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gate.json");

        assert_eq!(load_gate_config(&path), GateConfig::default());

        fs::write(&path, r#"{"settings_key": "K", "plugin_id": "p", "title": "", "message": "m"}"#).unwrap();
        let config = load_gate_config(&path);
        assert_eq!(config.settings_key, "K");
        assert_eq!(config.plugin_id, "p");
        assert_eq!(config.title, "Kode Beagle");
        assert_eq!(config.message, "m");

        fs::write(&path, "[]").unwrap();
        assert_eq!(load_gate_config(&path), GateConfig::default());
    }
}
