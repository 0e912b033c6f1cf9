//! First-run consent gate
//!
//! Checks whether the legal notice was accepted and, when it was not, posts the
//! notice dialog to the host's UI thread.

pub mod dialog;
pub mod notice;

#[cfg(test)]
pub(crate) mod testing;

use crate::host::{HostLifecycle, LifecycleError, UiTaskQueue};
use crate::prompt::{ModalPrompt, PromptError, WindowOwner};
use crate::storage::{SettingsStore, StorageError};
use crate::types::config::GateConfig;
use dialog::{ConsentNotification, LegalNoticeDialog};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced to the host from a consent dialog.
#[derive(Debug, Error)]
pub enum ConsentError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Consent gate for one plugin
#[derive(Clone)]
pub struct ConsentGate {
    config: Arc<GateConfig>,
    settings: Arc<dyn SettingsStore>,
    prompt: Arc<dyn ModalPrompt>,
    lifecycle: Arc<dyn HostLifecycle>,
    queue: Arc<dyn UiTaskQueue>,
    last_decision: Arc<Mutex<Option<ConsentNotification>>>,
}

impl ConsentGate {
    pub fn new(
        config: GateConfig,
        settings: Arc<dyn SettingsStore>,
        prompt: Arc<dyn ModalPrompt>,
        lifecycle: Arc<dyn HostLifecycle>,
        queue: Arc<dyn UiTaskQueue>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            settings,
            prompt,
            lifecycle,
            queue,
            last_decision: Arc::new(Mutex::new(None)),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Whether the notice has been accepted. Reads the settings store every time.
    pub fn is_accepted(&self) -> bool {
        self.settings.get_bool(&self.config.settings_key)
    }

    /// Post the notice dialog to the UI queue and return immediately.
    ///
    /// Does not check [`is_accepted`](Self::is_accepted); callers do.
    pub fn present(&self, owner: Option<WindowOwner>) {
        let config = self.config.clone();
        let settings = self.settings.clone();
        let prompt = self.prompt.clone();
        let lifecycle = self.lifecycle.clone();
        let last_decision = self.last_decision.clone();

        tracing::debug!("Scheduling legal notice for {}", config.plugin_id);
        self.queue.schedule(Box::new(move || {
            let dialog = LegalNoticeDialog::new(&config, settings, lifecycle);
            let notification = dialog.show(prompt.as_ref(), owner.as_ref())?;
            *last_decision.lock().expect("decision mutex poisoned") = Some(notification);
            Ok(())
        }));
    }

    /// Startup hook: present the notice unless it was already accepted.
    ///
    /// Returns whether a dialog was scheduled.
    pub fn run_startup(&self, owner: Option<WindowOwner>) -> bool {
        if self.is_accepted() {
            tracing::debug!("Legal notice already accepted");
            return false;
        }
        self.present(owner);
        true
    }

    /// How the most recent dialog from this gate ended, if one has.
    pub fn last_decision(&self) -> Option<ConsentNotification> {
        self.last_decision
            .lock()
            .expect("decision mutex poisoned")
            .clone()
    }
}
